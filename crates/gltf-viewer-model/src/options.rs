// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display options read from the page URL fragment

use crate::query::QueryParams;
use serde::Serialize;

/// Fragment keys understood by the viewer
pub mod keys {
    pub const KIOSK: &str = "kiosk";
    pub const MODEL: &str = "model";
    pub const PRESET: &str = "preset";
    pub const CAMERA_POSITION: &str = "cameraPosition";
}

/// Viewer options
///
/// Built once at startup and never mutated afterwards. Serializes with the
/// same field names the JavaScript `Viewer` constructor expects.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Options {
    /// Display-only mode: validation is skipped
    #[serde(rename = "kiosk")]
    pub kiosk_mode: bool,
    /// Model path from the fragment (not used by the default load)
    #[serde(rename = "model")]
    pub model_path: String,
    /// Environment/lighting preset name
    #[serde(rename = "preset")]
    pub preset_name: String,
    /// Initial camera position; components that fail to parse are NaN
    #[serde(rename = "cameraPosition")]
    pub camera_position: Option<Vec<f64>>,
}

impl Options {
    /// Parse options from a location fragment such as `#kiosk=1&preset=studio`
    ///
    /// Never fails: unknown keys are ignored and missing keys take defaults.
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.is_empty() {
            return Self::default();
        }
        Self::from_params(&QueryParams::parse(fragment))
    }

    /// Build options from already parsed parameters
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            kiosk_mode: params.flag(keys::KIOSK),
            model_path: params.get(keys::MODEL).unwrap_or_default().to_string(),
            preset_name: params.get(keys::PRESET).unwrap_or_default().to_string(),
            camera_position: params
                .get(keys::CAMERA_POSITION)
                .filter(|v| !v.is_empty())
                .map(parse_camera_position),
        }
    }

    /// Camera position as an `[x, y, z]` triple, if exactly three components were given
    pub fn camera_triple(&self) -> Option<[f64; 3]> {
        match self.camera_position.as_deref() {
            Some(&[x, y, z]) => Some([x, y, z]),
            _ => None,
        }
    }
}

/// Split a comma-separated vector and parse every component
fn parse_camera_position(raw: &str) -> Vec<f64> {
    raw.split(',').map(parse_number).collect()
}

/// Lenient number parsing
///
/// Follows browser `Number()` coercion for the cases that matter here:
/// whitespace is trimmed, an empty component is `0`, `Infinity` is accepted,
/// unsigned `0x`/`0o`/`0b` literals are read in their radix and anything else
/// unparseable becomes NaN.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(s) {
        return value;
    }
    // Rust accepts "inf"/"nan" spellings that the browser does not
    if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x1F`, `0o17`, `0b101`; `Some(NaN)` for a prefix with bad digits
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
