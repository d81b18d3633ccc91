// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! What a model load is made of

use rustc_hash::FxHashMap;

/// Auxiliary resources (textures, buffers) keyed by relative name
pub type FileMap<F> = FxHashMap<String, F>;

/// Where the root model file comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Locator<F> {
    /// Already dereferenceable URL, used as-is
    Url(String),
    /// In-memory file; needs a temporary object URL
    File(F),
}

impl<F> From<&str> for Locator<F> {
    fn from(url: &str) -> Self {
        Locator::Url(url.to_string())
    }
}

impl<F> From<String> for Locator<F> {
    fn from(url: String) -> Self {
        Locator::Url(url)
    }
}

/// One request to display a model
#[derive(Clone, Debug)]
pub struct LoadRequest<F> {
    pub locator: Locator<F>,
    pub base_path: String,
    pub resources: FileMap<F>,
}

impl<F> LoadRequest<F> {
    pub fn new(locator: impl Into<Locator<F>>, base_path: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            base_path: base_path.into(),
            resources: FileMap::default(),
        }
    }

    /// Attach an auxiliary resource
    pub fn with_resource(mut self, name: impl Into<String>, file: F) -> Self {
        self.resources.insert(name.into(), file);
        self
    }
}
