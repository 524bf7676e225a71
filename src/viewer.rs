//! Page viewer used by the terminal shell.
//!
//! The terminal cannot render web content, so the viewer only tracks what it
//! was asked to show. A load completes on the next event-loop tick; pages on
//! the shell's own origin report where they ended up, foreign origins refuse
//! to, the same way a cross-origin frame would.

use url::Url;

use crate::navigation::{LoadReport, Viewer};

/// Scheme of locations served by the shell itself.
pub const SHELL_SCHEME: &str = "adapta";

/// Viewer pane state.
#[derive(Debug, Default)]
pub struct PageViewer {
    location: Option<String>,
    pending: Option<String>,
    loads: usize,
}

impl PageViewer {
    /// Create an empty viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Location last requested.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Number of loads issued so far.
    pub fn load_count(&self) -> usize {
        self.loads
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Finish the in-flight load, if any.
    pub fn complete_load(&mut self) -> Option<LoadReport> {
        let location = self.pending.take()?;
        if is_shell_origin(&location) {
            Some(LoadReport::Readable(location))
        } else {
            Some(LoadReport::Denied)
        }
    }
}

impl Viewer for PageViewer {
    fn load(&mut self, location: &str) {
        tracing::debug!("Viewer loading {}", location);
        self.location = Some(location.to_string());
        self.pending = Some(location.to_string());
        self.loads += 1;
    }
}

/// Whether `location` is served by the shell.
pub fn is_shell_origin(location: &str) -> bool {
    Url::parse(location)
        .map(|url| url.scheme() == SHELL_SCHEME)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_then_complete() {
        let mut viewer = PageViewer::new();
        assert!(viewer.complete_load().is_none());

        viewer.load("adapta://home");
        assert!(viewer.is_loading());
        assert_eq!(
            viewer.complete_load(),
            Some(LoadReport::Readable("adapta://home".to_string()))
        );
        assert!(!viewer.is_loading());
        assert_eq!(viewer.location(), Some("adapta://home"));
    }

    #[test]
    fn foreign_origin_is_denied() {
        let mut viewer = PageViewer::new();
        viewer.load("https://example.com");
        assert_eq!(viewer.complete_load(), Some(LoadReport::Denied));
        assert_eq!(viewer.load_count(), 1);
    }

    #[test]
    fn shell_origin_check() {
        assert!(is_shell_origin("adapta://home"));
        assert!(!is_shell_origin("https://adapta.dev"));
        assert!(!is_shell_origin("not a url"));
    }
}
