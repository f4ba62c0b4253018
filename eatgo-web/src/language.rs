//! Interface text bundled into the client.

use std::collections::HashMap;

/// Language the interface is rendered in.
pub const DEFAULT_LANGUAGE: &str = "ko";

const KOREAN: &str = include_str!("../translations/ko.json");

/// Translation tables keyed by language code.
pub fn translations() -> HashMap<&'static str, &'static str> {
    HashMap::from([(DEFAULT_LANGUAGE, KOREAN)])
}
