/// widget-script - Initialization scripts for configurable upload widgets
///
/// This library turns a server-side widget configuration into the
/// client-side statement that initializes the widget, emitting only the
/// settings that differ from their defaults.

pub mod config;
pub mod serializer;

// Re-export commonly used types
pub use config::{ActionReference, AsyncConfig, ClientEvent, ScriptOptions, WidgetConfig};
pub use serializer::traits::{LocalizationProvider, UrlResolver};
pub use serializer::{ScriptError, Serializer};
