//! Navigation: location classification, browsing history and the toolbar.
//!
//! Everything here is independent of the terminal front end so that it can
//! be driven by any host that implements [`Viewer`].

pub mod history;
pub mod location;
pub mod toolbar;

pub use history::History;
pub use location::{classify, format_location, Classification, SearchEngine};
pub use toolbar::{AddressField, ControlState, LoadReport, Toolbar, Viewer, HOME_LOCATION};
