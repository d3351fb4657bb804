//! Validated retry configuration: delay bounds, jitter ranges, attempt budget.

use thiserror::Error;

/// Upper bound for every delay-shaped value, in seconds (one non-leap year).
/// Keeps any computed sleep within the range the platform sleep primitives
/// can represent.
pub const MAX_DELAY: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Malformed or out-of-range configuration value.
///
/// Raised while parsing flag values, before any attempt is made.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("delay must be a number between 0 and {MAX_DELAY} seconds, got {0:?}")]
    DelayOutOfRange(String),
    #[error("jitter range must contain no more than one comma")]
    JitterExtraComma,
    #[error("jitter minimum {min} exceeds maximum {max}")]
    JitterInverted { min: f64, max: f64 },
    #[error("backoff multiplier must be a finite number >= 0, got {0:?}")]
    BackoffOutOfRange(String),
}

/// Inclusive bounds for the uniform random delay added to every wait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterBounds {
    pub min: f64,
    pub max: f64,
}

/// Immutable retry parameters, constructed once from validated flag values.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Growth factor applied to the fixed delay per failed attempt.
    pub backoff: f64,
    /// Constant or initial exponential delay in seconds.
    pub delay: f64,
    /// Ceiling on the fixed/exponential delay component in seconds.
    pub max_delay: f64,
    /// Bounds for the independent random delay.
    pub jitter: JitterBounds,
    /// Attempt budget; negative means unbounded.
    pub tries: i64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            backoff: 1.0,
            delay: 0.0,
            max_delay: 24.0 * 60.0 * 60.0,
            jitter: JitterBounds { min: 0.0, max: 0.0 },
            tries: 3,
        }
    }
}

impl RetryConfig {
    pub fn is_unbounded(&self) -> bool {
        self.tries < 0
    }
}

/// Parse a delay-shaped flag value, accepting `[0, MAX_DELAY]` seconds.
pub fn parse_delay(arg: &str) -> Result<f64, ConfigError> {
    let value: f64 = arg
        .trim()
        .parse()
        .map_err(|_| ConfigError::DelayOutOfRange(arg.to_string()))?;

    if !value.is_finite() || value < 0.0 || value > MAX_DELAY {
        return Err(ConfigError::DelayOutOfRange(arg.to_string()));
    }

    Ok(value)
}

/// Parse the backoff multiplier: any finite number >= 0. Zero is legal and
/// collapses later delays through the schedule formula, not a special case.
pub fn parse_backoff(arg: &str) -> Result<f64, ConfigError> {
    let value: f64 = arg
        .trim()
        .parse()
        .map_err(|_| ConfigError::BackoffOutOfRange(arg.to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::BackoffOutOfRange(arg.to_string()));
    }

    Ok(value)
}

/// Parse a jitter flag value: `"MAX"` means `(0, MAX)`, `"MIN,MAX"` gives the
/// range verbatim. Each bound must be a valid delay and `MIN <= MAX`.
pub fn parse_jitter(arg: &str) -> Result<JitterBounds, ConfigError> {
    let mut parts = arg.splitn(3, ',');
    let head = parts.next().unwrap_or_default();
    let (min, max) = match (parts.next(), parts.next()) {
        (None, _) => ("0", head),
        (Some(tail), None) => (head, tail),
        (Some(_), Some(_)) => return Err(ConfigError::JitterExtraComma),
    };

    let min = parse_delay(min)?;
    let max = parse_delay(max)?;
    if min > max {
        return Err(ConfigError::JitterInverted { min, max });
    }

    Ok(JitterBounds { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_accepts_zero_and_cap() {
        assert_eq!(parse_delay("0"), Ok(0.0));
        assert_eq!(parse_delay("31536000"), Ok(MAX_DELAY));
    }

    #[test]
    fn delay_rejects_above_cap() {
        assert!(parse_delay("31536001").is_err());
    }

    #[test]
    fn delay_rejects_negative_and_garbage() {
        assert!(parse_delay("-1").is_err());
        assert!(parse_delay("nan").is_err());
        assert!(parse_delay("inf").is_err());
        assert!(parse_delay("five").is_err());
    }

    #[test]
    fn jitter_single_value_means_zero_to_max() {
        assert_eq!(
            parse_jitter("5"),
            Ok(JitterBounds { min: 0.0, max: 5.0 })
        );
    }

    #[test]
    fn jitter_range() {
        assert_eq!(
            parse_jitter("2,5"),
            Ok(JitterBounds { min: 2.0, max: 5.0 })
        );
    }

    #[test]
    fn jitter_rejects_two_commas() {
        assert_eq!(parse_jitter("1,2,3"), Err(ConfigError::JitterExtraComma));
    }

    #[test]
    fn jitter_rejects_inverted_range() {
        assert_eq!(
            parse_jitter("5,2"),
            Err(ConfigError::JitterInverted { min: 5.0, max: 2.0 })
        );
    }

    #[test]
    fn jitter_bounds_are_validated_as_delays() {
        assert!(parse_jitter("0,31536001").is_err());
        assert!(parse_jitter("-1,5").is_err());
    }

    #[test]
    fn backoff_accepts_zero_and_fractions() {
        assert_eq!(parse_backoff("0"), Ok(0.0));
        assert_eq!(parse_backoff("0.5"), Ok(0.5));
        assert_eq!(parse_backoff("2"), Ok(2.0));
    }

    #[test]
    fn backoff_rejects_negative_and_non_finite() {
        assert!(parse_backoff("-1").is_err());
        assert!(parse_backoff("inf").is_err());
        assert!(parse_backoff("nan").is_err());
    }
}
