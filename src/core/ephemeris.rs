use crate::domain::model::{Body, EclipticLongitude, JulianDay};
use crate::domain::ports::{CalcFlags, EphemerisOracle, OracleOutput};
use crate::utils::error::{OracleError, Result};
use std::sync::Arc;

/// Default request: Swiss-ephemeris-file method with daily speeds.
pub const DEFAULT_FLAGS: CalcFlags = CalcFlags::from_bits(CalcFlags::SWIEPH.bits() | CalcFlags::SPEED.bits());

/// Turns raw oracle answers into longitudes or typed failures.
#[derive(Clone)]
pub struct EphemerisAdapter {
    oracle: Arc<dyn EphemerisOracle>,
    flags: CalcFlags,
}

impl EphemerisAdapter {
    pub fn new(oracle: Arc<dyn EphemerisOracle>) -> Self {
        Self {
            oracle,
            flags: DEFAULT_FLAGS,
        }
    }

    pub fn with_flags(mut self, flags: CalcFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Tropical ecliptic longitude of `body` at `jd`, not yet wrapped into [0, 360).
    pub async fn longitude(&self, jd: JulianDay, body: Body) -> Result<EclipticLongitude> {
        tracing::debug!("Querying ephemeris for {} at JD {} (flags {})", body, jd, self.flags.bits());
        let output = self.oracle.calc_ut(jd, body, self.flags).await;
        check_output(&output)?;

        let longitude = output.coordinates[0];
        if !longitude.is_finite() {
            tracing::error!("❌ Ephemeris returned non-finite longitude for {} at JD {}", body, jd);
            return Err(OracleError::EphemerisFailure {
                status: OracleOutput::ERR,
                message: format!("non-finite longitude {}", longitude),
            });
        }

        tracing::debug!("{} ecliptic longitude: {:.6}°", body, longitude);
        Ok(EclipticLongitude(longitude))
    }
}

fn check_output(output: &OracleOutput) -> Result<()> {
    if !output.is_error() {
        return Ok(());
    }
    // C-style oracles hand back NUL-padded buffers
    let text = output.error_text.trim_end_matches('\0').trim();
    let message = if text.is_empty() {
        "unknown ephemeris error".to_string()
    } else {
        text.to_string()
    };
    tracing::error!("❌ Ephemeris error (status {}): {}", output.status, message);
    Err(OracleError::EphemerisFailure {
        status: output.status,
        message,
    })
}
