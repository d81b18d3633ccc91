// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application settings

use crate::query::QueryParams;

/// Asset shown on startup, resolved relative to the page
pub const DEFAULT_ASSET: &str = "gold_dress.glb";

/// Selector of the loading spinner inside the root element
pub const SPINNER_SELECTOR: &str = ".spinner";

/// Selector of the container the viewer surface is mounted in
pub const CONTENT_SELECTOR: &str = ".dropzone";

/// Fixed settings for one viewer instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub default_asset: String,
    pub default_base_path: String,
    pub spinner_selector: String,
    pub content_selector: String,
    /// Verbose logging (`?debug=1`)
    pub debug: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_asset: DEFAULT_ASSET.to_string(),
            default_base_path: String::new(),
            spinner_selector: SPINNER_SELECTOR.to_string(),
            content_selector: CONTENT_SELECTOR.to_string(),
            debug: false,
        }
    }
}

impl ViewerConfig {
    /// Default settings with the debug flag taken from a URL search string
    pub fn from_search(search: &str) -> Self {
        Self {
            debug: debug_requested(search),
            ..Self::default()
        }
    }
}

/// Whether the search string asks for debug logging (`debug=1` or `debug=true`)
pub fn debug_requested(search: &str) -> bool {
    matches!(QueryParams::parse(search).get("debug"), Some("1" | "true"))
}
