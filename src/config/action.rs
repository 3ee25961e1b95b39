use serde::{Deserialize, Serialize};

use super::default_true;

/// A controller/action pair resolved to a URL by a [`UrlResolver`](crate::serializer::traits::UrlResolver)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReference {
    pub controller_name: String,
    pub action_name: String,
}

impl ActionReference {
    pub fn new(controller_name: impl Into<String>, action_name: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            action_name: action_name.into(),
        }
    }
}

/// Asynchronous upload settings
///
/// Nothing in here is emitted unless `save` is configured: a remove
/// endpoint or an auto-upload flag is meaningless without a save endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncConfig {
    /// Action receiving uploaded files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<ActionReference>,

    /// Action removing previously uploaded files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<ActionReference>,

    /// Form field name the files are posted under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_field: Option<String>,

    /// Whether selected files upload immediately
    #[serde(default = "default_true")]
    pub auto_upload: bool,
}

impl Default for AsyncConfig {
    fn default() -> Self {
        Self {
            save: None,
            remove: None,
            save_field: None,
            auto_upload: true,
        }
    }
}

impl AsyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_save(mut self, action: ActionReference) -> Self {
        self.save = Some(action);
        self
    }

    pub fn with_remove(mut self, action: ActionReference) -> Self {
        self.remove = Some(action);
        self
    }

    pub fn with_save_field(mut self, field: impl Into<String>) -> Self {
        self.save_field = Some(field.into());
        self
    }

    pub fn with_auto_upload(mut self, auto_upload: bool) -> Self {
        self.auto_upload = auto_upload;
        self
    }
}
