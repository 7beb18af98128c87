//! Constructors attaching field context to [`EnvError`].

use super::{BoxError, EnvError, ParseError};

impl EnvError {
    /// Builds a [`EnvError::MissingRequiredField`].
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::{EnvError, ErrorKind};
    /// let err = EnvError::missing("database.host", Some("DB_HOST"));
    /// assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    /// assert_eq!(err.key(), Some("DB_HOST"));
    /// ```
    #[must_use]
    pub fn missing(field: impl Into<String>, key: Option<&str>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            key: key.map(str::to_owned),
        }
    }

    /// Builds a [`EnvError::InvalidValue`] from a built-in parse failure.
    #[must_use]
    pub fn invalid(field: impl Into<String>, key: impl Into<String>, source: ParseError) -> Self {
        Self::InvalidValue {
            field: field.into(),
            key: key.into(),
            source,
        }
    }

    /// Builds a [`EnvError::Custom`] wrapping a user error verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::{EnvError, ErrorKind};
    /// let err = EnvError::custom("port", "PORT", "port must be below 65536");
    /// assert_eq!(err.kind(), ErrorKind::CustomParserError);
    /// assert!(err.to_string().ends_with("port must be below 65536"));
    /// ```
    #[must_use]
    pub fn custom(
        field: impl Into<String>,
        key: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Custom {
            field: field.into(),
            key: key.into(),
            source: source.into(),
        }
    }
}
