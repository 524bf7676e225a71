//! Application state and logic.

use chrono::Local;
use std::time::Instant;

use crate::clipboard;
use crate::config::Config;
use crate::home::{HomeRequest, HomeSurface, Theme};
use crate::navigation::Toolbar;
use crate::viewer::PageViewer;

/// Colon command line used to call home entry points by name.
#[derive(Debug, Default)]
pub struct CommandLine {
    active: bool,
    buffer: String,
}

impl CommandLine {
    /// Check if the command line is open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Open the command line.
    pub fn start(&mut self) {
        self.active = true;
        self.buffer.clear();
    }

    /// Add a character.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Close without running.
    pub fn cancel(&mut self) {
        self.active = false;
        self.buffer.clear();
    }

    /// Close and return the typed command.
    pub fn submit(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.buffer)
    }

    /// Get the typed text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Navigation toolbar and the viewer it drives.
    pub toolbar: Toolbar<PageViewer>,
    /// Home surface.
    pub home: HomeSurface,
    /// Command line for entry points.
    pub command: CommandLine,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create a new application instance.
    ///
    /// `open` is navigated to after the start location when given.
    pub fn new(config: &Config, open: Option<&str>, now: Instant) -> Self {
        let toolbar = Toolbar::new(PageViewer::new(), config.start_location())
            .with_search_engine(config.search_engine())
            .with_home(config.home_url.clone());

        let mut app = Self {
            toolbar,
            home: HomeSurface::new(Theme::from_dark(config.dark), now),
            command: CommandLine::default(),
            status: "Ready".to_string(),
        };

        app.toolbar.reload_current();
        if let Some(input) = open {
            app.navigate_to(input);
        }

        tracing::info!("Started at {}", app.toolbar.current());
        app
    }

    /// Run timers and deliver finished viewer loads.
    ///
    /// The clock only ticks while the home surface is on screen.
    pub fn tick(&mut self, now: Instant) {
        if self.showing_home() {
            self.home.tick(now);
        }
        if let Some(report) = self.toolbar.viewer_mut().complete_load() {
            self.toolbar.on_load_complete(report);
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.home.theme()
    }

    /// Whether the home surface is on screen.
    pub fn showing_home(&self) -> bool {
        self.toolbar.is_home()
    }

    /// Navigate to user text.
    pub fn navigate_to(&mut self, input: &str) {
        self.toolbar.navigate_to(input);
        self.status = format!("Loading {}", self.toolbar.current());
    }

    /// Submit the address field.
    pub fn submit_address(&mut self) {
        self.toolbar.submit_address();
        self.status = format!("Loading {}", self.toolbar.current());
    }

    /// Go back one page.
    pub fn go_back(&mut self) {
        if !self.toolbar.controls().back_enabled {
            self.status = "Nothing to go back to".to_string();
            return;
        }
        self.toolbar.step_back();
        self.status = format!("Back to {}", self.toolbar.current());
    }

    /// Go forward one page.
    pub fn go_forward(&mut self) {
        if !self.toolbar.controls().forward_enabled {
            self.status = "Nothing to go forward to".to_string();
            return;
        }
        self.toolbar.step_forward();
        self.status = format!("Forward to {}", self.toolbar.current());
    }

    /// Reload the current page.
    pub fn reload(&mut self) {
        self.toolbar.reload_current();
        self.status = format!("Reloading {}", self.toolbar.current());
    }

    /// Open the home surface.
    pub fn go_home(&mut self) {
        self.toolbar.go_home();
        self.home.update_time(&Local::now());
        self.status = "Home".to_string();
    }

    /// Toggle dark mode.
    pub fn toggle_theme(&mut self) {
        self.home.toggle_theme();
        self.status = format!("Theme: {}", self.home.theme().name());
    }

    /// Open the selected bookmark.
    pub fn activate_bookmark(&mut self) {
        let request = self.home.activate_selected();
        self.apply(request);
    }

    /// Submit the home search box.
    pub fn submit_home_search(&mut self) {
        let request = self.home.submit_search();
        self.apply(request);
    }

    /// Run the command line as `<entryPoint> [argument]`.
    pub fn run_command(&mut self) {
        let line = self.command.submit();
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let (name, arg) = line.split_once(' ').unwrap_or((line, ""));
        match self.home.invoke_named(name, arg.trim()) {
            Ok(request) => {
                self.status = format!("Ran {}", name);
                self.apply(request);
            },
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                self.status = e.to_string();
            },
        }
    }

    /// Copy the current location to the clipboard.
    pub fn copy_location(&mut self) {
        let location = self.toolbar.current().to_string();
        match clipboard::copy_location(&location) {
            Ok(()) => self.status = "Location copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Carry out a request from the home surface.
    fn apply(&mut self, request: Option<HomeRequest>) {
        match request {
            Some(HomeRequest::Search(query)) => self.navigate_to(&query),
            Some(HomeRequest::Open(location)) => {
                self.toolbar.open(location);
                self.status = format!("Loading {}", location);
            },
            None => {},
        }
    }

    /// Stop timers before the app goes away.
    pub fn shutdown(&mut self) {
        self.home.teardown();
        tracing::info!("Shut down with {} history entries", self.toolbar.history().len());
    }
}
