//! Named entry points a host controller can call on the home surface.

use std::fmt;
use std::str::FromStr;

use crate::error::AdaptaError;

/// An operation exported by the home surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Navigate the top-level view to a query or location.
    HandleSearch,
    /// Switch theme; the argument is `dark`/`true` or `light`/`false`.
    SetTheme,
    /// Refresh the clock text now.
    UpdateTime,
    /// Rebuild the bookmark grid.
    GenerateBookmarks,
}

/// Every exported entry point, in table order.
pub const ENTRY_POINTS: &[EntryPoint] = &[
    EntryPoint::HandleSearch,
    EntryPoint::UpdateTime,
    EntryPoint::GenerateBookmarks,
    EntryPoint::SetTheme,
];

impl EntryPoint {
    /// Stable name hosts use to call this entry point.
    pub fn name(self) -> &'static str {
        match self {
            EntryPoint::HandleSearch => "handleSearch",
            EntryPoint::SetTheme => "setTheme",
            EntryPoint::UpdateTime => "updateTime",
            EntryPoint::GenerateBookmarks => "generateBookmarks",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryPoint {
    type Err = AdaptaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ENTRY_POINTS
            .iter()
            .copied()
            .find(|entry| entry.name() == s)
            .ok_or_else(|| AdaptaError::unknown_entry_point(s))
    }
}

/// Parse a `setTheme` argument into a dark-mode flag.
pub fn parse_dark_flag(arg: &str) -> Option<bool> {
    match arg.trim().to_ascii_lowercase().as_str() {
        "dark" | "true" | "1" => Some(true),
        "light" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for entry in ENTRY_POINTS {
            assert_eq!(entry.name().parse::<EntryPoint>().unwrap(), *entry);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "openTab".parse::<EntryPoint>().unwrap_err();
        assert!(matches!(err, AdaptaError::UnknownEntryPoint { ref name } if name == "openTab"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("handlesearch".parse::<EntryPoint>().is_err());
    }

    #[test]
    fn dark_flag_parsing() {
        assert_eq!(parse_dark_flag("dark"), Some(true));
        assert_eq!(parse_dark_flag(" TRUE "), Some(true));
        assert_eq!(parse_dark_flag("light"), Some(false));
        assert_eq!(parse_dark_flag("0"), Some(false));
        assert_eq!(parse_dark_flag("dim"), None);
    }
}
