//! Error types for the mechanical counter.

/// Result type alias for counter operations.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Errors that can occur while configuring or laying out a counter.
///
/// None of these describe runtime failures of the animation itself: ticking,
/// cancelling and overflowing the displayed columns never fail. They signal
/// programming errors (bad configuration, geometry queried too early) and
/// unreadable attribute sources.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// A configuration value violates an invariant.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// Geometry was requested before glyph measurements were supplied.
    #[error("glyph metrics not available, measure the digit glyphs first")]
    MetricsUnavailable,

    /// A measured glyph box is unusable.
    #[error("invalid glyph metrics for digit {digit}: {width}x{height}")]
    InvalidMetrics { digit: u8, width: f32, height: f32 },

    /// An attribute source could not be parsed.
    #[error("failed to parse counter attributes: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl CounterError {
    /// Create a configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Check whether this error reports a configuration problem.
    ///
    /// Missing or invalid glyph metrics count as configuration problems: the
    /// host failed to set the counter up before drawing it.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::ConfigParse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = CounterError::invalid_config("column_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'column_count': must be at least 1"
        );
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_metrics_errors_are_configuration_errors() {
        assert!(CounterError::MetricsUnavailable.is_configuration_error());
        let err = CounterError::InvalidMetrics {
            digit: 7,
            width: -1.0,
            height: 10.0,
        };
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("digit 7"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("goal = = 3").unwrap_err();
        let err: CounterError = parse_err.into();
        assert!(matches!(err, CounterError::ConfigParse(_)));
        assert!(!err.is_configuration_error());
    }
}
