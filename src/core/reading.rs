use crate::core::catalog::Catalog;
use crate::core::ephemeris::EphemerisAdapter;
use crate::core::{civil_time, julian, position};
use crate::domain::model::{Body, BirthInput, Reading};
use crate::domain::ports::{AscendantSource, CalcFlags, EphemerisOracle};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Rounds half away from zero to two decimals (17.125 -> 17.13).
pub fn round_degree(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Runs normalizer -> Julian Day -> ephemeris -> resolver -> catalog for one
/// birth. Holds no per-request state, so one engine serves all requests.
#[derive(Clone)]
pub struct ReadingEngine {
    ephemeris: EphemerisAdapter,
    ascendant: Arc<dyn AscendantSource>,
    catalog: Arc<Catalog>,
    body: Body,
}

impl ReadingEngine {
    pub fn new(
        oracle: Arc<dyn EphemerisOracle>,
        ascendant: Arc<dyn AscendantSource>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            ephemeris: EphemerisAdapter::new(oracle),
            ascendant,
            catalog,
            body: Body::Chiron,
        }
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_flags(mut self, flags: CalcFlags) -> Self {
        self.ephemeris = self.ephemeris.with_flags(flags);
        self
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub async fn compute(&self, input: &BirthInput) -> Result<Reading> {
        input.validate()?;

        let instant = civil_time::to_utc(input)?;
        let jd = julian::julian_day(&instant);
        tracing::debug!("Birth instant {} -> JD {}", instant, jd);

        let longitude = self.ephemeris.longitude(jd, self.body).await?;

        let ascendant = self.ascendant.ascendant_sign(input, jd);
        let placement = position::resolve(longitude, ascendant);
        tracing::debug!(
            "{} at {:.4}° {} (house {}, ascendant {})",
            self.body,
            placement.degree_in_sign,
            placement.sign,
            placement.house,
            ascendant
        );

        let text = self.catalog.lookup(placement.sign, placement.house);

        let reading = Reading {
            sign: placement.sign,
            degree_in_sign: round_degree(placement.degree_in_sign),
            house: placement.house,
            wound_text: text.wound.to_string(),
            strength_text: text.strength.to_string(),
            timestamp: instant.timestamp(),
        };

        tracing::info!(
            "✨ Reading: {} {:.2}° house {}",
            reading.sign,
            reading.degree_in_sign,
            reading.house
        );
        Ok(reading)
    }
}
