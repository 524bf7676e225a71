//! Adapta - a terminal browser shell with a new-tab home page.
//!
//! The crate is split into host-independent logic and a thin terminal front
//! end:
//!
//! - [`navigation`]: turns typed text into locations and keeps the
//!   back/forward history that drives a [`navigation::Viewer`]
//! - [`home`]: the new-tab page with its clock, bookmark grid and theme,
//!   reachable by name through [`home::api::EntryPoint`]
//! - [`app`] and [`ui`]: the ratatui shell that owns one of each
//!
//! # Example
//!
//! ```
//! use adapta::navigation::{Toolbar, Viewer};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Viewer for Log {
//!     fn load(&mut self, location: &str) {
//!         self.0.push(location.to_string());
//!     }
//! }
//!
//! let mut toolbar = Toolbar::new(Log::default(), "https://www.apple.com");
//! toolbar.navigate_to("example.com");
//! toolbar.step_back();
//! assert_eq!(toolbar.current(), "https://www.apple.com");
//! assert!(toolbar.controls().forward_enabled);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod home;
pub mod navigation;
pub mod ui;
pub mod viewer;

pub use error::{AdaptaError, Result};
