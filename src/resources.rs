//! Localized string lookup.

use serde::{Deserialize, Serialize};

/// Keys for every user-facing message the form produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKey {
    EnterPhoneNumber,
    InvalidPhoneNumber,
}

/// String resource boundary; hosts plug in their localization layer.
pub trait ResourceProvider: Send + Sync {
    fn string(&self, key: StringKey) -> String;
}

/// English fallback resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticResources;

impl StaticResources {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceProvider for StaticResources {
    fn string(&self, key: StringKey) -> String {
        match key {
            StringKey::EnterPhoneNumber => "Enter phone number".to_string(),
            StringKey::InvalidPhoneNumber => "Invalid phone number".to_string(),
        }
    }
}
