// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application controller

use crate::state::{LoadState, ViewOutcome};
use gltf_viewer_model::{
    Failure, FileMap, LoadRequest, Locator, Options, SceneOf, Shell, Validator, ViewError,
    ViewerConfig, ViewerHost,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Orchestrates model loads for one page
///
/// Holds at most one viewer surface. Each `view()` call gets a generation
/// number; only the newest generation may change what the user sees, so a
/// slow load that finishes after a newer one started is dropped silently.
pub struct AppController<S: Shell, V> {
    options: Options,
    config: ViewerConfig,
    shell: S,
    validator: V,
    /// Lazily created viewer surface
    viewer: RefCell<Option<Rc<S::Viewer>>>,
    /// Generation of the most recent `view()` call
    generation: Cell<u64>,
    state: Cell<LoadState>,
}

impl<S: Shell, V> AppController<S, V> {
    /// Create the controller and hide the spinner
    pub fn new(options: Options, config: ViewerConfig, shell: S, validator: V) -> Self {
        shell.set_spinner_visible(false);
        log::debug!("[Viewer] Controller created with options {:?}", options);

        Self {
            options,
            config,
            shell,
            validator,
            viewer: RefCell::new(None),
            generation: Cell::new(0),
            state: Cell::new(LoadState::Idle),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    /// Generation of the latest `view()` call (0 before the first)
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Whether a viewer surface has been created
    pub fn has_viewer(&self) -> bool {
        self.viewer.borrow().is_some()
    }

    /// Classify a failure, log it and show the message to the user
    pub fn on_error(&self, failure: &Failure) -> ViewError {
        let error = ViewError::classify(failure);
        log::error!("[Viewer] Load failed ({}): {:?}", error.kind(), failure);
        self.shell.show_message(&error.to_string());
        error
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn begin_load(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.state.set(LoadState::Loading);
        self.shell.set_spinner_visible(true);
        generation
    }

    /// Clear the existing surface, or create the first one
    fn acquire_viewer(&self) -> Result<Rc<S::Viewer>, Failure> {
        let mut slot = self.viewer.borrow_mut();
        if let Some(viewer) = slot.as_ref() {
            viewer.clear();
            return Ok(Rc::clone(viewer));
        }

        let viewer = Rc::new(self.shell.create_viewer(&self.options)?);
        log::debug!("[Viewer] Viewer surface created");
        *slot = Some(Rc::clone(&viewer));
        Ok(viewer)
    }

    fn fail<T>(&self, generation: u64, failure: &Failure) -> ViewOutcome<T> {
        if !self.is_current(generation) {
            log::debug!("[Viewer] Ignoring failure of superseded load #{}", generation);
            return ViewOutcome::Superseded;
        }
        let error = self.on_error(failure);
        self.state.set(LoadState::Failed);
        ViewOutcome::Failed(error)
    }
}

impl<S, V> AppController<S, V>
where
    S: Shell,
    V: Validator<S::File, SceneOf<S>>,
{
    /// Load the fixed startup asset
    pub async fn load_default_asset(&self) -> ViewOutcome<SceneOf<S>> {
        let locator = Locator::Url(self.config.default_asset.clone());
        log::info!("[Viewer] Loading default asset {}", self.config.default_asset);
        self.view(locator, &self.config.default_base_path, FileMap::default())
            .await
    }

    /// Load a request built elsewhere
    pub async fn view_request(&self, request: LoadRequest<S::File>) -> ViewOutcome<SceneOf<S>> {
        self.view(request.locator, &request.base_path, request.resources)
            .await
    }

    /// Display a model
    ///
    /// Runs validation on success (unless in kiosk mode) or reports the
    /// error on failure. Cleanup (hiding the spinner, revoking a temporary
    /// object URL) runs exactly once, also when the returned future is
    /// dropped before completion.
    pub async fn view(
        &self,
        locator: Locator<S::File>,
        base_path: &str,
        resources: FileMap<S::File>,
    ) -> ViewOutcome<SceneOf<S>> {
        let generation = self.begin_load();
        let mut cleanup = LoadCleanup {
            controller: self,
            generation,
            object_url: None,
        };

        let viewer = match self.acquire_viewer() {
            Ok(viewer) => viewer,
            Err(failure) => return self.fail(generation, &failure),
        };

        let url = match locator {
            Locator::Url(url) => url,
            Locator::File(ref file) => match self.shell.create_object_url(file) {
                Ok(url) => {
                    cleanup.object_url = Some(url.clone());
                    url
                }
                Err(failure) => return self.fail(generation, &failure),
            },
        };

        log::debug!(
            "[Viewer] Load #{}: {} (base '{}', {} resources)",
            generation,
            url,
            base_path,
            resources.len()
        );

        let result = viewer.load(&url, base_path, &resources).await;

        if !self.is_current(generation) {
            log::debug!("[Viewer] Load #{} superseded", generation);
            return ViewOutcome::Superseded;
        }

        match result {
            Ok(scene) => {
                if !self.options.kiosk_mode {
                    self.validator.validate(&url, base_path, &resources, &scene);
                }
                self.state.set(LoadState::Displayed);
                log::info!("[Viewer] Displayed {}", url);
                ViewOutcome::Displayed(scene)
            }
            Err(failure) => self.fail(generation, &failure),
        }
    }
}

/// Per-load cleanup, run on drop
struct LoadCleanup<'a, S: Shell, V> {
    controller: &'a AppController<S, V>,
    generation: u64,
    object_url: Option<String>,
}

impl<S: Shell, V> Drop for LoadCleanup<'_, S, V> {
    fn drop(&mut self) {
        let controller = self.controller;
        // Only the newest load owns the spinner
        if controller.is_current(self.generation) {
            controller.shell.set_spinner_visible(false);
            if controller.state.get().is_loading() {
                controller.state.set(LoadState::Idle);
            }
        }
        if let Some(url) = self.object_url.take() {
            controller.shell.revoke_object_url(&url);
        }
    }
}
