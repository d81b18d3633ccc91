// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for viewer setup and model loading

use std::fmt;
use thiserror::Error;

/// Result type alias for setup operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that prevent the viewer from starting
///
/// These are structural: the page is missing something the viewer cannot
/// work without. Load failures are [`Failure`]s instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No global `window` (not running in a browser page)
    #[error("No window object")]
    NoWindow,

    /// No `document` on the window
    #[error("No document object")]
    NoDocument,

    /// A required element is not inside the root element
    #[error("Required element not found: {selector}")]
    MissingElement { selector: String },

    /// A JavaScript call threw during setup
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl AppError {
    /// Create a missing element error
    pub fn missing_element(selector: impl Into<String>) -> Self {
        AppError::MissingElement {
            selector: selector.into(),
        }
    }

    /// Create a JavaScript error
    pub fn js(msg: impl Into<String>) -> Self {
        AppError::Js(msg.into())
    }
}

/// A failure reported by the rendering library or the page
///
/// This is the raw shape of whatever was thrown: an optional `message`
/// field, the value's string conversion, and the `src` of the image element
/// it targets when the failure is an image load event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Failure {
    pub message: Option<String>,
    pub description: String,
    pub image_src: Option<String>,
}

impl Failure {
    /// Failure carrying a message
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            description: message.clone(),
            message: Some(message),
            image_src: None,
        }
    }

    /// Failure of an `<img>` load, as raised for a missing texture
    pub fn image(src: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: None,
            description: description.into(),
            image_src: Some(src.into()),
        }
    }

    /// Failure without a `message` field, only a string conversion
    pub fn opaque(description: impl Into<String>) -> Self {
        Self {
            message: None,
            description: description.into(),
            image_src: None,
        }
    }

    /// Text used for matching: the message, else the string conversion
    pub fn text(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => &self.description,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::error::Error for Failure {}

/// Classified load failure; `Display` is the text shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The file could not be fetched
    #[error("Unable to retrieve this file. Check JS console and browser network tab.")]
    Network,

    /// The file was fetched but its content is not valid
    #[error("Unable to parse file content. Verify that this file is valid. Error: \"{message}\"")]
    Parse { message: String },

    /// A texture referenced by the model could not be loaded
    #[error("Missing texture: {file}")]
    MissingTexture { file: String },

    /// Anything else, shown verbatim
    #[error("{0}")]
    Other(String),
}

impl ViewError {
    /// Map a raw failure to a user-facing error
    ///
    /// Rules are checked in order and the first match wins:
    /// 1. `ProgressEvent` in the text: network failure
    /// 2. `Unexpected token` in the text: parse failure
    /// 3. the failure targets an image element: missing texture
    /// 4. otherwise the failure's own text
    pub fn classify(failure: &Failure) -> Self {
        let text = failure.text();

        if text.contains("ProgressEvent") {
            ViewError::Network
        } else if text.contains("Unexpected token") {
            ViewError::Parse {
                message: text.to_string(),
            }
        } else if let Some(src) = failure.image_src.as_deref() {
            ViewError::MissingTexture {
                file: last_path_segment(src).to_string(),
            }
        } else {
            ViewError::Other(text.to_string())
        }
    }

    /// Short category name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ViewError::Network => "network",
            ViewError::Parse { .. } => "parse",
            ViewError::MissingTexture { .. } => "missing-texture",
            ViewError::Other(_) => "unclassified",
        }
    }
}

impl From<&Failure> for ViewError {
    fn from(failure: &Failure) -> Self {
        ViewError::classify(failure)
    }
}

/// Everything after the last `/`
fn last_path_segment(src: &str) -> &str {
    src.rsplit('/').next().unwrap_or(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_event_is_network() {
        let error = ViewError::classify(&Failure::new("ProgressEvent error"));
        assert_eq!(error, ViewError::Network);
        assert!(error.to_string().contains("Unable to retrieve this file"));
    }

    #[test]
    fn test_progress_event_in_string_conversion() {
        let error = ViewError::classify(&Failure::opaque("[object ProgressEvent]"));
        assert_eq!(error, ViewError::Network);
    }

    #[test]
    fn test_unexpected_token_is_parse() {
        let error = ViewError::classify(&Failure::new("Unexpected token }"));
        let text = error.to_string();
        assert!(text.contains("Unable to parse"));
        assert!(text.contains("Unexpected token }"));
        assert_eq!(error.kind(), "parse");
    }

    #[test]
    fn test_image_target_is_missing_texture() {
        let failure = Failure::image("http://x/y/tex.png", "[object Event]");
        let error = ViewError::classify(&failure);
        assert_eq!(error.to_string(), "Missing texture: tex.png");
    }

    #[test]
    fn test_message_rules_win_over_image() {
        let mut failure = Failure::image("http://x/y/tex.png", "");
        failure.message = Some("ProgressEvent".to_string());
        assert_eq!(ViewError::classify(&failure), ViewError::Network);
    }

    #[test]
    fn test_unmatched_uses_message() {
        let error = ViewError::classify(&Failure::new("custom failure"));
        assert_eq!(error.to_string(), "custom failure");
        assert_eq!(error.kind(), "unclassified");
    }

    #[test]
    fn test_unmatched_without_message_uses_string_conversion() {
        let error = ViewError::classify(&Failure::opaque("boom"));
        assert_eq!(error, ViewError::Other("boom".to_string()));
    }

    #[test]
    fn test_empty_message_falls_back_to_description() {
        let failure = Failure {
            message: Some(String::new()),
            description: "TypeError".to_string(),
            image_src: None,
        };
        assert_eq!(failure.text(), "TypeError");
    }

    #[test]
    fn test_app_error_messages() {
        let error = AppError::missing_element(".spinner");
        assert_eq!(error.to_string(), "Required element not found: .spinner");
        assert_eq!(AppError::js("oops").to_string(), "JavaScript error: oops");
    }
}
