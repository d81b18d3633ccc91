// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! glTF Viewer Core - load orchestration
//!
//! [`AppController`] owns the single viewer surface and runs every load
//! through the same cycle: show the spinner, clear or create the surface,
//! resolve the locator, wait for the renderer, then validate or report the
//! error, and finally clean up. It is platform-agnostic; the browser build
//! supplies the [`Shell`](gltf_viewer_model::Shell) and
//! [`Validator`](gltf_viewer_model::Validator) implementations.

pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{LoadState, ViewOutcome};

// Re-export the model crate so hosts only need one dependency
pub use gltf_viewer_model as model;
