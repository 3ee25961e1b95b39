use std::fmt;

/// Errors that can occur while rendering an initialization script
///
/// The serializer raises none of these on its own: they come from the
/// collaborators, the output sink, or from loading configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// An action could not be turned into a URL
    UrlResolution {
        controller: String,
        action: String,
        message: String,
    },

    /// Localized messages could not be loaded
    Localization {
        message: String,
    },

    /// Configuration could not be parsed or failed validation
    Config {
        message: String,
        errors: Vec<String>,
    },

    /// Writing to the output sink failed
    Write {
        message: String,
    },
}

impl ScriptError {
    /// Create a UrlResolution error
    pub fn url_resolution(
        controller: impl Into<String>,
        action: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::UrlResolution {
            controller: controller.into(),
            action: action.into(),
            message: message.into(),
        }
    }

    /// Create a Localization error
    pub fn localization(message: impl Into<String>) -> Self {
        Self::Localization {
            message: message.into(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::Config {
            message: message.into(),
            errors,
        }
    }

    /// Create a Write error
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UrlResolution {
                controller,
                action,
                message,
            } => {
                write!(f, "Cannot resolve URL for {}/{}: {}", controller, action, message)
            }
            ScriptError::Localization { message } => {
                write!(f, "Localization error: {}", message)
            }
            ScriptError::Config { message, errors } => {
                write!(f, "Configuration error: {}", message)?;
                if !errors.is_empty() {
                    write!(f, "\n  Errors:")?;
                    for error in errors {
                        write!(f, "\n    - {}", error)?;
                    }
                }
                Ok(())
            }
            ScriptError::Write { message } => {
                write!(f, "Write error: {}", message)
            }
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<fmt::Error> for ScriptError {
    fn from(err: fmt::Error) -> Self {
        Self::write(err.to_string())
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        Self::write(err.to_string())
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::config("Invalid JSON document", vec![err.to_string()])
    }
}

impl From<validator::ValidationErrors> for ScriptError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(move |e| format!("{}: {}", field, e.code))
            })
            .collect();
        messages.sort();
        Self::config("Invalid script options", messages)
    }
}
