use serde::{Deserialize, Serialize};

/// Client-side lifecycle events an upload widget raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientEvent {
    Load,
    Select,
    Upload,
    Success,
    Error,
    Complete,
    Cancel,
    Remove,
}

impl ClientEvent {
    /// Every event, in the order bindings are emitted
    pub const ALL: [ClientEvent; 8] = [
        ClientEvent::Load,
        ClientEvent::Select,
        ClientEvent::Upload,
        ClientEvent::Success,
        ClientEvent::Error,
        ClientEvent::Complete,
        ClientEvent::Cancel,
        ClientEvent::Remove,
    ];

    /// Key used for the binding in the options literal
    pub fn key(self) -> &'static str {
        match self {
            ClientEvent::Load => "load",
            ClientEvent::Select => "select",
            ClientEvent::Upload => "upload",
            ClientEvent::Success => "success",
            ClientEvent::Error => "error",
            ClientEvent::Complete => "complete",
            ClientEvent::Cancel => "cancel",
            ClientEvent::Remove => "remove",
        }
    }
}

/// Handler names bound to client events
///
/// A slot that is `None` (or holds an empty name) is unbound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHandlerSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_load: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_select: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_upload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_complete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_cancel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_remove: Option<String>,
}

impl EventHandlerSet {
    fn slot(&self, event: ClientEvent) -> &Option<String> {
        match event {
            ClientEvent::Load => &self.on_load,
            ClientEvent::Select => &self.on_select,
            ClientEvent::Upload => &self.on_upload,
            ClientEvent::Success => &self.on_success,
            ClientEvent::Error => &self.on_error,
            ClientEvent::Complete => &self.on_complete,
            ClientEvent::Cancel => &self.on_cancel,
            ClientEvent::Remove => &self.on_remove,
        }
    }

    fn slot_mut(&mut self, event: ClientEvent) -> &mut Option<String> {
        match event {
            ClientEvent::Load => &mut self.on_load,
            ClientEvent::Select => &mut self.on_select,
            ClientEvent::Upload => &mut self.on_upload,
            ClientEvent::Success => &mut self.on_success,
            ClientEvent::Error => &mut self.on_error,
            ClientEvent::Complete => &mut self.on_complete,
            ClientEvent::Cancel => &mut self.on_cancel,
            ClientEvent::Remove => &mut self.on_remove,
        }
    }

    /// Handler bound to `event`, if any
    pub fn handler(&self, event: ClientEvent) -> Option<&str> {
        self.slot(event).as_deref().filter(|name| !name.is_empty())
    }

    pub fn set(&mut self, event: ClientEvent, handler: impl Into<String>) {
        *self.slot_mut(event) = Some(handler.into());
    }

    pub fn clear(&mut self, event: ClientEvent) {
        *self.slot_mut(event) = None;
    }
}
