/// Configuration types for widget-script
///
/// This module contains the in-memory widget configuration tree and
/// the options controlling how the initialization statement is shaped.

mod action;
mod events;
mod script;
mod widget;

pub use action::{ActionReference, AsyncConfig};
pub use events::{ClientEvent, EventHandlerSet};
pub use script::{CallStyle, ScriptOptions};
pub use widget::WidgetConfig;

pub(crate) fn default_true() -> bool {
    true
}
