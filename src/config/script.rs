use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Shape of the initialization call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallStyle {
    /// `initialize('#Upload', {...});`
    #[default]
    Function,
    /// `jQuery('#Upload').kendoUpload({...});`
    JQueryPlugin,
}

/// Options controlling the emitted statement around the options literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOptions {
    #[serde(default)]
    pub style: CallStyle,

    /// Function (or jQuery plugin) name to call
    #[validate(length(min = 1), custom(function = "validate_identifier"))]
    #[serde(default = "default_function")]
    pub function: String,
}

fn default_function() -> String {
    "initialize".to_string()
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            style: CallStyle::Function,
            function: default_function(),
        }
    }
}

impl ScriptOptions {
    /// Plain function call, e.g. `initialize('#Upload');`
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            style: CallStyle::Function,
            function: name.into(),
        }
    }

    /// jQuery plugin call, e.g. `jQuery('#Upload').kendoUpload();`
    pub fn jquery_plugin(plugin: impl Into<String>) -> Self {
        Self {
            style: CallStyle::JQueryPlugin,
            function: plugin.into(),
        }
    }

    /// Opening of the call up to (and excluding) the options argument
    pub(crate) fn call_prefix(&self, element: &str) -> String {
        match self.style {
            CallStyle::Function => format!("{}('#{}'", self.function, element),
            CallStyle::JQueryPlugin => format!("jQuery('#{}').{}(", element, self.function),
        }
    }

    /// Separator placed between the prefix and a non-empty options literal
    pub(crate) fn argument_separator(&self) -> &'static str {
        match self.style {
            CallStyle::Function => ", ",
            CallStyle::JQueryPlugin => "",
        }
    }
}

fn validate_identifier(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.');

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(ValidationError::new("identifier"))
    }
}
