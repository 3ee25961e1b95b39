use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{default_true, AsyncConfig, ClientEvent, EventHandlerSet};

/// Root configuration of an upload widget
///
/// Every boolean defaults to `true`; the serializer only emits the
/// settings that differ from these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// DOM element identifier (rendered as `#<name>`)
    pub name: String,

    /// Whether the widget accepts input
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether more than one file may be selected
    #[serde(default = "default_true")]
    pub multiple: bool,

    /// Whether the list of selected files is displayed
    #[serde(default = "default_true")]
    pub show_file_list: bool,

    /// Asynchronous upload settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#async: Option<AsyncConfig>,

    /// Client-side event handler bindings
    #[serde(default)]
    pub client_events: EventHandlerSet,

    /// Messages overriding the provider's localized text for this widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization: Option<IndexMap<String, String>>,
}

impl WidgetConfig {
    /// Create a widget with every setting at its default
    ///
    /// # Example
    /// ```
    /// use widget_script::config::{ActionReference, AsyncConfig, ClientEvent, WidgetConfig};
    ///
    /// let widget = WidgetConfig::new("Upload")
    ///     .with_multiple(false)
    ///     .with_async(AsyncConfig::new().with_save(ActionReference::new("Home", "Save")))
    ///     .with_event(ClientEvent::Success, "onSuccess");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            multiple: true,
            show_file_list: true,
            r#async: None,
            client_events: EventHandlerSet::default(),
            localization: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_show_file_list(mut self, show_file_list: bool) -> Self {
        self.show_file_list = show_file_list;
        self
    }

    pub fn with_async(mut self, settings: AsyncConfig) -> Self {
        self.r#async = Some(settings);
        self
    }

    /// Bind a handler name to one of the client events
    pub fn with_event(mut self, event: ClientEvent, handler: impl Into<String>) -> Self {
        self.client_events.set(event, handler);
        self
    }

    /// Override one localized message for this widget
    pub fn with_localization(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.localization
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), text.into());
        self
    }
}
