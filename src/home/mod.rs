//! Home surface feature - the "new tab" page.
//!
//! This module contains state management for the home page: a clock that
//! refreshes once per second, the bookmark grid, a search box and the
//! light/dark theme. Hosts reach it either through the methods on
//! [`HomeSurface`] or by name through [`api::EntryPoint`].

pub mod api;
pub mod bookmarks;
pub mod clock;
pub mod theme;

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::time::Instant;

use crate::error::{AdaptaError, Result};
use api::{parse_dark_flag, EntryPoint};
use bookmarks::BookmarkGrid;
use clock::{ClockDisplay, ClockTimer, CLOCK_INTERVAL};
pub use theme::Theme;

/// Something the home surface asks its host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeRequest {
    /// Navigate the top-level view to user text (location or search).
    Search(String),
    /// Navigate the top-level view to an absolute location.
    Open(&'static str),
}

/// Home surface state.
#[derive(Debug)]
pub struct HomeSurface {
    theme: Theme,
    clock: Option<ClockDisplay>,
    timer: ClockTimer,
    grid: BookmarkGrid,
    search: String,
    search_active: bool,
}

impl HomeSurface {
    /// Create and initialize a home surface.
    ///
    /// Fills the bookmark grid, shows the current time and starts the clock.
    pub fn new(theme: Theme, now: Instant) -> Self {
        let mut surface = Self {
            theme,
            clock: Some(ClockDisplay::default()),
            timer: ClockTimer::start(CLOCK_INTERVAL, now),
            grid: BookmarkGrid::new(),
            search: String::new(),
            search_active: false,
        };
        surface.grid.generate_if_empty();
        surface.update_time(&Local::now());
        surface
    }

    /// Drop the clock display. Clock updates then do nothing.
    pub fn without_clock(mut self) -> Self {
        self.clock = None;
        self
    }

    /// Advance the clock if its timer is due. Returns whether it ticked.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.update_time(&Local::now());
        true
    }

    /// Refresh the clock display from `now`.
    pub fn update_time<Tz: TimeZone>(&mut self, now: &DateTime<Tz>)
    where
        Tz::Offset: Display,
    {
        if let Some(display) = self.clock.as_mut() {
            display.update(now);
        }
    }

    /// Rebuild the bookmark grid.
    pub fn generate_bookmarks(&mut self) {
        self.grid.generate();
    }

    /// Apply the dark or light theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.theme = Theme::from_dark(is_dark);
        tracing::debug!("Home theme: {}", self.theme.name());
    }

    /// Flip between dark and light.
    pub fn toggle_theme(&mut self) {
        self.set_theme(!self.theme.is_dark());
    }

    /// Ask the host to navigate to `query`. Blank queries are ignored.
    pub fn handle_search(&self, query: &str) -> Option<HomeRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(HomeRequest::Search(query.to_string()))
    }

    /// Ask the host to open the selected bookmark.
    pub fn activate_selected(&self) -> Option<HomeRequest> {
        self.grid.activate(self.grid.cursor()).map(HomeRequest::Open)
    }

    /// Call an entry point by its exported name.
    pub fn invoke_named(&mut self, name: &str, arg: &str) -> Result<Option<HomeRequest>> {
        let entry: EntryPoint = name.parse()?;
        self.invoke(entry, arg)
    }

    /// Call an entry point.
    pub fn invoke(&mut self, entry: EntryPoint, arg: &str) -> Result<Option<HomeRequest>> {
        tracing::debug!("Home entry point {} ({:?})", entry, arg);
        match entry {
            EntryPoint::HandleSearch => Ok(self.handle_search(arg)),
            EntryPoint::SetTheme => {
                let is_dark = parse_dark_flag(arg)
                    .ok_or_else(|| AdaptaError::invalid_argument(entry.name(), arg))?;
                self.set_theme(is_dark);
                Ok(None)
            },
            EntryPoint::UpdateTime => {
                self.update_time(&Local::now());
                Ok(None)
            },
            EntryPoint::GenerateBookmarks => {
                self.generate_bookmarks();
                Ok(None)
            },
        }
    }

    /// Stop the clock. Called when the surface is torn down.
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }

    /// Focus the search box.
    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search.clear();
    }

    /// Type into the search box.
    pub fn search_input(&mut self, c: char) {
        self.search.push(c);
    }

    /// Delete the last character in the search box.
    pub fn search_backspace(&mut self) {
        self.search.pop();
    }

    /// Leave the search box without searching.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.search.clear();
    }

    /// Leave the search box and search for what was typed.
    pub fn submit_search(&mut self) -> Option<HomeRequest> {
        self.search_active = false;
        let query = std::mem::take(&mut self.search);
        self.handle_search(&query)
    }

    /// Whether the search box has focus.
    pub fn is_searching(&self) -> bool {
        self.search_active
    }

    /// Search box text.
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Clock display, if present.
    pub fn clock(&self) -> Option<&ClockDisplay> {
        self.clock.as_ref()
    }

    /// Clock timer.
    pub fn timer(&self) -> &ClockTimer {
        &self.timer
    }

    /// Bookmark grid.
    pub fn grid(&self) -> &BookmarkGrid {
        &self.grid
    }

    /// Bookmark grid, for moving the selection.
    pub fn grid_mut(&mut self) -> &mut BookmarkGrid {
        &mut self.grid
    }
}

impl Drop for HomeSurface {
    fn drop(&mut self) {
        self.teardown();
    }
}
