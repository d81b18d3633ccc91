// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load state and per-call outcome

use gltf_viewer_model::ViewError;

/// Where the controller is in its load cycle
///
/// `Displayed` and `Failed` are not terminal: every `view()` goes back to
/// `Loading`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Displayed,
    Failed,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Displayed => "displayed",
            LoadState::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Result of a single `view()` call
#[derive(Debug, PartialEq)]
pub enum ViewOutcome<T> {
    /// The model is on screen
    Displayed(T),
    /// Loading failed; the message has been shown
    Failed(ViewError),
    /// A newer `view()` started before this one finished; nothing was shown
    Superseded,
}

impl<T> ViewOutcome<T> {
    pub fn is_displayed(&self) -> bool {
        matches!(self, ViewOutcome::Displayed(_))
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, ViewOutcome::Superseded)
    }

    /// The scene, if the model was displayed
    pub fn scene(self) -> Option<T> {
        match self {
            ViewOutcome::Displayed(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            ViewOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }
}
