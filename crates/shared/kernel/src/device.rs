//! Device classification from the runtime-reported client identity (user agent).
//!
//! Matching is plain ASCII case-insensitive containment: any identity that contains one of
//! [`MOBILE_TOKENS`] anywhere is mobile, so a custom agent like `"MyApp-webOS-bridge"` is
//! classified as mobile too.

use shelf_domain::device::{DeviceClass, DevicePreference};

/// Substrings that mark a known mobile platform.
pub const MOBILE_TOKENS: &[&str] =
    &["Android", "iPhone", "iPad", "iPod", "Windows Phone", "webOS", "BlackBerry"];

/// Classifies an identity string. Absent or empty identities are desktop.
#[must_use]
pub fn classify(identity: Option<&str>) -> DeviceClass {
    if identity.and_then(matched_token).is_some() {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Returns the first of [`MOBILE_TOKENS`] contained in `identity`, ignoring ASCII case.
#[must_use]
pub fn matched_token(identity: &str) -> Option<&'static str> {
    MOBILE_TOKENS.iter().copied().find(|token| contains_ignore_ascii_case(identity, token))
}

/// Applies a configured preference on top of detection.
#[must_use]
pub fn resolve_device(preference: DevicePreference, identity: Option<&str>) -> DeviceClass {
    preference.forced().unwrap_or_else(|| classify(identity))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    haystack.as_bytes().windows(needle.len()).any(|window| window.eq_ignore_ascii_case(needle))
}
