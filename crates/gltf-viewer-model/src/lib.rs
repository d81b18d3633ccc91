// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! glTF Viewer Model - shared types and collaborator traits
//!
//! This crate holds everything the viewer needs that does not touch the
//! browser directly, so it can be tested natively.
//!
//! # Architecture
//!
//! - [`Options`] - display options parsed from the page URL fragment
//! - [`ViewerConfig`] - fixed application settings (default asset, selectors)
//! - [`Locator`], [`FileMap`], [`LoadRequest`] - what a load is made of
//! - [`Failure`] and [`ViewError`] - raw failures from the rendering library
//!   and their classified, user-facing form
//! - [`ViewerHost`], [`Validator`], [`Shell`] - the seams to the external
//!   renderer, validator and page UI
//!
//! # Example
//!
//! ```
//! use gltf_viewer_model::Options;
//!
//! let options = Options::from_fragment("#kiosk=1&cameraPosition=0,1.5,3");
//! assert!(options.kiosk_mode);
//! assert_eq!(options.camera_position, Some(vec![0.0, 1.5, 3.0]));
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod query;
pub mod resources;
pub mod traits;

// Re-export all public types
pub use config::*;
pub use error::*;
pub use options::*;
pub use resources::*;
pub use traits::*;
