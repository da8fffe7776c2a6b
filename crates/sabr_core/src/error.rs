use thiserror::Error;

/// Errors surfaced by the metrics engine and its JSON facade.
///
/// Sparse data never errors: any ratio whose data-derived denominator is
/// zero or negative resolves to the 0.0 sentinel instead. Only bad caller
/// configuration and malformed requests fail.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A caller-supplied calibration parameter (park factor, league
    /// baseline) that would make the formulas meaningless.
    #[error("invalid calibration parameter {name}: {value} (must be > 0)")]
    Misconfiguration { name: &'static str, value: f64 },

    #[error("unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fail-fast check for caller-controlled divisors.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(MetricsError::Misconfiguration { name, value })
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
