use thiserror::Error;

/// Errors raised while building a generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No calls were supplied; a generator needs at least one slot
    #[error("a Voss generator needs at least one call")]
    EmptyCalls,
}

/// Errors raised when a step value is not a usable integer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// No step was supplied
    #[error("missing step value")]
    Missing,
    /// Text that does not parse as an integer
    #[error("step {0:?} is not a number")]
    NotANumber(String),
    /// NaN or infinity
    #[error("step {0} is not finite")]
    NotFinite(f64),
    /// A float with a fractional part
    #[error("step {0} is not an integer")]
    NotIntegral(f64),
    /// Outside the range of `i64`
    #[error("step {0} is out of range")]
    OutOfRange(String),
}

/// Any error produced by this crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VossError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigurationError::EmptyCalls.to_string(),
            "a Voss generator needs at least one call"
        );
        assert_eq!(
            InvalidInputError::NotANumber("abc".into()).to_string(),
            "step \"abc\" is not a number"
        );
        assert_eq!(
            InvalidInputError::NotIntegral(2.5).to_string(),
            "step 2.5 is not an integer"
        );
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: VossError = InvalidInputError::Missing.into();
        assert!(matches!(err, VossError::InvalidInput(InvalidInputError::Missing)));
        assert_eq!(err.to_string(), "invalid input: missing step value");

        let err: VossError = ConfigurationError::EmptyCalls.into();
        assert!(matches!(err, VossError::Configuration(_)));
    }
}
