// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seams to the external collaborators
//!
//! The controller only talks to the renderer, the validator and the page
//! through these traits. The browser build implements them with
//! `wasm-bindgen`; tests implement them with in-memory doubles.

use crate::{Failure, FileMap, Options};
use futures_util::future::LocalBoxFuture;

/// A rendering surface that can display one model at a time
pub trait ViewerHost {
    /// File handle type used for auxiliary resources
    type File;
    /// Parsed scene handed back on success
    type Scene;

    /// Tear down whatever the surface currently displays
    fn clear(&self);

    /// Load and display the model at `url`
    ///
    /// Auxiliary resources are looked up in `resources` relative to
    /// `base_path`. Resolves once the scene is displayed or loading failed.
    fn load<'a>(
        &'a self,
        url: &'a str,
        base_path: &'a str,
        resources: &'a FileMap<Self::File>,
    ) -> LocalBoxFuture<'a, std::result::Result<Self::Scene, Failure>>;
}

/// Structural validation of a loaded model
///
/// Fire-and-forget: the outcome is reported by the validator itself and does
/// not affect the viewer state.
pub trait Validator<F, S> {
    fn validate(&self, url: &str, base_path: &str, resources: &FileMap<F>, scene: &S);
}

/// The page around the viewer: spinner, alerts, surface and object URLs
pub trait Shell {
    /// File handle type of this platform
    type File;
    /// Viewer surface created by this shell
    type Viewer: ViewerHost<File = Self::File>;

    /// Create and mount a new viewer surface
    fn create_viewer(&self, options: &Options) -> std::result::Result<Self::Viewer, Failure>;

    /// Create a temporary URL referencing an in-memory file
    fn create_object_url(&self, file: &Self::File) -> std::result::Result<String, Failure>;

    /// Release a URL made by [`Shell::create_object_url`]
    fn revoke_object_url(&self, url: &str);

    fn set_spinner_visible(&self, visible: bool);

    /// Show a message to the user (modal alert in the browser)
    fn show_message(&self, message: &str);
}

/// Scene type produced by a shell's viewer
pub type SceneOf<S> = <<S as Shell>::Viewer as ViewerHost>::Scene;
