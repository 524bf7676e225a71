//! Navigation toolbar: address field, back/forward/reload controls and the
//! history that drives an embedded viewer.

use super::history::History;
use super::location::{classify, SearchEngine};

/// Internal address of the home surface.
pub const HOME_LOCATION: &str = "adapta://home";

/// Location a viewer reports before anything has loaded.
const BLANK_LOCATION: &str = "about:blank";

/// Embedded content viewer driven by the toolbar.
pub trait Viewer {
    /// Point the viewer at a new location.
    fn load(&mut self, location: &str);
}

/// What a viewer could tell us once a load completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// The resulting location is readable (it may differ from the request
    /// after redirects).
    Readable(String),
    /// The host refused to reveal the resulting location (cross-origin).
    Denied,
}

/// Enabled state of the back and forward controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    /// Back control is clickable.
    pub back_enabled: bool,
    /// Forward control is clickable.
    pub forward_enabled: bool,
}

/// Editable address field.
///
/// Focusing selects the whole text, so the first typed character replaces it.
#[derive(Debug, Clone, Default)]
pub struct AddressField {
    text: String,
    editing: bool,
    selected: bool,
}

impl AddressField {
    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the user is typing into the field.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the whole text is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Replace the text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Give the field focus and select everything.
    pub fn focus(&mut self) {
        self.editing = true;
        self.selected = true;
    }

    /// Type a character.
    pub fn input(&mut self, c: char) {
        if self.selected {
            self.text.clear();
            self.selected = false;
        }
        self.text.push(c);
    }

    /// Delete the last character, or everything when selected.
    pub fn backspace(&mut self) {
        if self.selected {
            self.text.clear();
            self.selected = false;
        } else {
            self.text.pop();
        }
    }

    /// Leave the field, returning what was typed.
    pub fn submit(&mut self) -> String {
        self.editing = false;
        self.selected = false;
        self.text.clone()
    }

    /// Leave the field and put `restore` back.
    pub fn cancel(&mut self, restore: &str) {
        self.editing = false;
        self.selected = false;
        self.text = restore.to_string();
    }
}

/// Toolbar state for one view.
///
/// Owns the history and the viewer; every operation leaves the address field
/// and control state consistent with the cursor.
#[derive(Debug)]
pub struct Toolbar<V> {
    history: History,
    viewer: V,
    address: AddressField,
    controls: ControlState,
    engine: SearchEngine,
    home: String,
}

impl<V: Viewer> Toolbar<V> {
    /// Create a toolbar whose history is seeded with `seed`.
    ///
    /// The seed is shown in the address field but not loaded; call
    /// [`Toolbar::reload_current`] to load it.
    pub fn new(viewer: V, seed: impl Into<String>) -> Self {
        let history = History::new(seed);
        let mut address = AddressField::default();
        address.set(history.current());

        let mut toolbar = Self {
            history,
            viewer,
            address,
            controls: ControlState::default(),
            engine: SearchEngine::default(),
            home: HOME_LOCATION.to_string(),
        };
        toolbar.refresh_control_state();
        toolbar
    }

    /// Use a different search engine for non-location input.
    pub fn with_search_engine(mut self, engine: SearchEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Use a different home location.
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Navigate to whatever the user typed.
    ///
    /// Empty input does nothing at all.
    pub fn navigate_to(&mut self, raw: &str) {
        let Some(location) = classify(raw, &self.engine).into_location() else {
            return;
        };
        self.open(location);
    }

    /// Navigate to an already absolute location without classifying it.
    pub fn open(&mut self, location: impl Into<String>) {
        let location = location.into();
        self.viewer.load(&location);

        if self.history.push(location.as_str()) {
            tracing::debug!(
                "History: {} entries, cursor at {}",
                self.history.len(),
                self.history.cursor()
            );
        } else {
            tracing::debug!("Reloading current location {}", location);
        }

        self.address.set(location);
        self.refresh_control_state();
    }

    /// Navigate to the home location.
    pub fn go_home(&mut self) {
        let home = self.home.clone();
        self.open(home);
    }

    /// Step back one entry. No-op at the first entry.
    pub fn step_back(&mut self) {
        let Some(location) = self.history.back().map(str::to_owned) else {
            return;
        };
        self.show(location);
    }

    /// Step forward one entry. No-op at the last entry.
    pub fn step_forward(&mut self) {
        let Some(location) = self.history.forward().map(str::to_owned) else {
            return;
        };
        self.show(location);
    }

    /// Load the current entry again without touching history.
    pub fn reload_current(&mut self) {
        let location = self.history.current().to_string();
        self.viewer.load(&location);
    }

    /// Recompute back/forward enabled state from the cursor.
    pub fn refresh_control_state(&mut self) {
        self.controls = ControlState {
            back_enabled: self.history.can_go_back(),
            forward_enabled: self.history.can_go_forward(),
        };
    }

    /// Sync the address field with where the viewer actually ended up.
    ///
    /// A denied read is normal for foreign origins and leaves the field as is.
    pub fn on_load_complete(&mut self, report: LoadReport) {
        match report {
            LoadReport::Readable(location) if location != BLANK_LOCATION => {
                if location != self.address.text() {
                    tracing::debug!("Viewer settled on {}", location);
                    self.address.set(location);
                }
            },
            LoadReport::Readable(_) => {},
            LoadReport::Denied => {
                tracing::trace!("Resulting location not readable");
            },
        }
    }

    /// Move the cursor and load the entry it lands on.
    fn show(&mut self, location: String) {
        self.viewer.load(&location);
        self.address.set(location);
        self.refresh_control_state();
    }

    /// The history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Location at the cursor.
    pub fn current(&self) -> &str {
        self.history.current()
    }

    /// Back/forward enabled state.
    pub fn controls(&self) -> ControlState {
        self.controls
    }

    /// The address field.
    pub fn address(&self) -> &AddressField {
        &self.address
    }

    /// The address field, for editing.
    pub fn address_mut(&mut self) -> &mut AddressField {
        &mut self.address
    }

    /// Submit the address field and navigate to what it holds.
    pub fn submit_address(&mut self) {
        let typed = self.address.submit();
        if typed.trim().is_empty() {
            let current = self.history.current().to_string();
            self.address.set(current);
            return;
        }
        self.navigate_to(&typed);
    }

    /// Abandon editing and show the current location again.
    pub fn cancel_address(&mut self) {
        let current = self.history.current().to_string();
        self.address.cancel(&current);
    }

    /// Home location.
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Whether the current entry is the home location.
    pub fn is_home(&self) -> bool {
        self.history.current() == self.home
    }

    /// The viewer.
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// The viewer, mutably.
    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }
}
