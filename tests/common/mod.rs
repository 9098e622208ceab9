#![allow(dead_code)]

use async_trait::async_trait;
use chiron_oracle::domain::model::{Body, JulianDay};
use chiron_oracle::domain::ports::{CalcFlags, EphemerisOracle, OracleOutput};
use chiron_oracle::{BirthInput, Catalog, FixedAscendant, ReadingEngine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Oracle that always answers with the same longitude, or the same error.
pub struct StubOracle {
    longitude: Option<f64>,
    error_text: String,
    calls: AtomicUsize,
}

impl StubOracle {
    pub fn at(longitude: f64) -> Self {
        Self {
            longitude: Some(longitude),
            error_text: String::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error_text: &str) -> Self {
        Self {
            longitude: None,
            error_text: error_text.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EphemerisOracle for StubOracle {
    async fn calc_ut(&self, _jd: JulianDay, _body: Body, flags: CalcFlags) -> OracleOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.longitude {
            Some(longitude) => OracleOutput::success([longitude, 0.0, 17.4, 0.05, 0.0, 0.0], flags),
            None => OracleOutput::failure(self.error_text.clone()),
        }
    }
}

/// Engine with the default Scorpio ascendant.
pub fn engine_with(oracle: Arc<StubOracle>) -> ReadingEngine {
    ReadingEngine::new(
        oracle,
        Arc::new(FixedAscendant::default()),
        Catalog::shared().unwrap(),
    )
}

/// 1990-05-12 14:00 in Kolkata, i.e. 08:30 UTC.
pub fn kolkata_birth() -> BirthInput {
    BirthInput {
        year: 1990,
        month: 5,
        day: 12,
        hour: 14.0,
        latitude: 9.93,
        longitude: 76.26,
        timezone: "Asia/Kolkata".to_string(),
    }
}
