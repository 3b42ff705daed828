//! Errors raised while loading settings.
//!
//! Only a handful of conditions are fatal. Everything else (an absent optional
//! variable, an optional value that does not parse) is absorbed by falling
//! back to the documented default.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable with no default is absent from the environment.
    #[error("required setting `{name}` is not set")]
    MissingRequiredSetting { name: String },

    /// The list parser was handed arguments it cannot split with.
    #[error("malformed list input: {reason}")]
    MalformedListInput { reason: String },

    /// A required variable is present but its value has the wrong shape.
    #[error("setting `{name}` has invalid value `{value}` (expected {expected})")]
    InvalidSetting {
        name: String,
        value: String,
        expected: &'static str,
    },

    /// A trusted origin was given without a URL scheme.
    #[error("trusted origin `{origin}` must include a scheme, e.g. `https://{origin}`")]
    InvalidOrigin { origin: String },

    /// A `.env` file exists but could not be read.
    #[error("failed to read env file {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingRequiredSetting { name: name.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedListInput {
            reason: reason.into(),
        }
    }

    /// Name of the variable this error is about, if any.
    pub fn setting_name(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredSetting { name } | Self::InvalidSetting { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_variable() {
        let err = ConfigError::missing("EMAIL_HOST_USER");
        assert_eq!(err.to_string(), "required setting `EMAIL_HOST_USER` is not set");
        assert_eq!(err.setting_name(), Some("EMAIL_HOST_USER"));
    }

    #[test]
    fn test_invalid_origin_message_suggests_scheme() {
        let err = ConfigError::InvalidOrigin {
            origin: "example.com".to_string(),
        };
        assert!(err.to_string().contains("https://example.com"));
        assert_eq!(err.setting_name(), None);
    }

    #[test]
    fn test_env_file_message_leaves_cause_to_source() {
        use std::error::Error as _;

        let source = dotenvy::from_read_iter("BROKEN=two words\n".as_bytes())
            .find_map(Result::err)
            .unwrap();
        let err = ConfigError::EnvFile {
            path: PathBuf::from("/srv/app/.env"),
            source,
        };

        assert_eq!(err.to_string(), "failed to read env file /srv/app/.env");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_list_input() {
        let err = ConfigError::malformed("separator must not be empty");
        assert!(matches!(err, ConfigError::MalformedListInput { .. }));
        assert!(err.to_string().contains("separator must not be empty"));
    }
}
