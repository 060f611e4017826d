use thiserror::Error;

/// Errors raised by trajectory integration and angle optimization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BallisticsError {
    /// A parameter that would make the computation meaningless or endless.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Landing interpolation needs the two samples straddling the ground.
    #[error("landing interpolation needs at least 2 trajectory samples, got {samples}")]
    InsufficientTrajectory { samples: usize },

    /// The last two samples share an x position, so the slope is infinite.
    #[error("final trajectory segment is vertical at x = {x} m; landing slope is undefined")]
    VerticalLandingSegment { x: f64 },

    #[error("trajectory at {angle_deg}° did not return to the ground within {limit} steps")]
    StepLimitExceeded { limit: usize, angle_deg: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl BallisticsError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        BallisticsError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

impl From<String> for BallisticsError {
    fn from(msg: String) -> Self {
        BallisticsError::Config(msg)
    }
}

impl From<&str> for BallisticsError {
    fn from(msg: &str) -> Self {
        BallisticsError::Config(msg.to_string())
    }
}

impl From<std::io::Error> for BallisticsError {
    fn from(err: std::io::Error) -> Self {
        BallisticsError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BallisticsError {
    fn from(err: serde_json::Error) -> Self {
        BallisticsError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_the_parameter() {
        let err = BallisticsError::invalid("time_step", 0.0, "must be positive");
        let msg = err.to_string();
        assert!(msg.contains("time_step"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_from_str_maps_to_config() {
        let err: BallisticsError = "missing file".into();
        assert_eq!(err, BallisticsError::Config("missing file".to_string()));
    }

    #[test]
    fn test_json_error_maps_to_config() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err = BallisticsError::from(parse.unwrap_err());
        assert!(matches!(err, BallisticsError::Config(_)));
    }
}
