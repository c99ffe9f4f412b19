use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Binary classification of the client the application runs on.
///
/// Computed once at startup from the runtime-reported identity string and never persisted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Identifier of a top-level view bundle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RootViewId {
    Desktop,
    Mobile,
}

impl From<DeviceClass> for RootViewId {
    fn from(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Mobile => Self::Mobile,
            DeviceClass::Desktop => Self::Desktop,
        }
    }
}

/// Configured override for device detection.
///
/// `Auto` defers to the identity string; the other variants pin the class regardless of it.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreference {
    #[default]
    Auto,
    Mobile,
    Desktop,
}

impl DevicePreference {
    /// The forced class, if any.
    #[must_use]
    pub const fn forced(self) -> Option<DeviceClass> {
        match self {
            Self::Auto => None,
            Self::Mobile => Some(DeviceClass::Mobile),
            Self::Desktop => Some(DeviceClass::Desktop),
        }
    }
}
