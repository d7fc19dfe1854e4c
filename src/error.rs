//! Error types for Roster-GUI
//!
//! Infrastructure errors (settings file, platform directories). User-facing
//! validation problems are not errors here; they travel as
//! [`Notice`](crate::states::Notice) values.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings file, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_converts() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("selectable = ");
        let err: Error = parse.expect_err("broken toml must fail").into();
        assert!(matches!(err, Error::TomlDe { .. }));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn test_invalid_display() {
        let err = Error::Invalid {
            message: "no home".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid: no home");
    }
}
