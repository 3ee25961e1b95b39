use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ActionReference;
use crate::serializer::ScriptError;

/// Trait for turning controller/action pairs into URLs
///
/// The serializer treats the resolver as authoritative: it neither
/// caches results nor retries failures.
pub trait UrlResolver {
    fn resolve(&self, action: &ActionReference) -> Result<String, ScriptError>;
}

/// Trait for accessing localized widget messages
pub trait LocalizationProvider {
    /// Whether the current locale is the built-in language pack
    ///
    /// When this is true the serializer emits no localization at all.
    fn is_default(&self) -> bool;

    /// Every message key with its localized text, in emission order
    fn all(&self) -> Result<IndexMap<String, String>, ScriptError>;
}

// Stand-in implementations for tests and the command line

/// URL resolver substituting `{controller}` and `{action}` into a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternUrlResolver {
    pattern: String,
}

impl Default for PatternUrlResolver {
    fn default() -> Self {
        Self::new("{controller}/{action}")
    }
}

impl PatternUrlResolver {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl UrlResolver for PatternUrlResolver {
    fn resolve(&self, action: &ActionReference) -> Result<String, ScriptError> {
        Ok(self
            .pattern
            .replace("{controller}", &action.controller_name)
            .replace("{action}", &action.action_name))
    }
}

/// Localization provider for the built-in language pack
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalization;

impl LocalizationProvider for DefaultLocalization {
    fn is_default(&self) -> bool {
        true
    }

    fn all(&self) -> Result<IndexMap<String, String>, ScriptError> {
        Ok(IndexMap::new())
    }
}

/// Fixed set of messages
///
/// Also the shape of a localization file:
/// ```json
/// { "isDefault": false, "messages": { "Remove": "Entfernen" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticLocalization {
    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub messages: IndexMap<String, String>,
}

impl StaticLocalization {
    pub fn new(is_default: bool) -> Self {
        Self {
            is_default,
            messages: IndexMap::new(),
        }
    }

    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }
}

impl LocalizationProvider for StaticLocalization {
    fn is_default(&self) -> bool {
        self.is_default
    }

    fn all(&self) -> Result<IndexMap<String, String>, ScriptError> {
        Ok(self.messages.clone())
    }
}
