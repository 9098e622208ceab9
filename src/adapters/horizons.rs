use crate::domain::model::{Body, JulianDay};
use crate::domain::ports::{CalcFlags, EphemerisOracle, OracleOutput};
use crate::utils::error::{OracleError, Result};
use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

/// Flags this oracle can honour. The ephemeris-source bits are accepted and
/// ignored since Horizons always uses its own integrations.
const SUPPORTED_FLAGS: u32 = CalcFlags::JPLEPH.bits()
    | CalcFlags::SWIEPH.bits()
    | CalcFlags::MOSEPH.bits()
    | CalcFlags::SPEED.bits();

/// Ephemeris oracle backed by the JPL Horizons observer-table API.
///
/// Requests geocentric (`500@399`) ecliptic-of-date longitude/latitude
/// (quantity 31) and range (quantity 20). Daily speeds are derived from a
/// second sample one day later when [`CalcFlags::SPEED`] is set.
#[derive(Debug, Clone)]
pub struct HorizonsOracle {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct HorizonsResponse {
    result: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    longitude: f64,
    latitude: f64,
    distance: f64,
}

impl HorizonsOracle {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OracleError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch(&self, jd: JulianDay, body: Body, with_speed: bool) -> anyhow::Result<Vec<Sample>> {
        let tlist = if with_speed {
            format!("'{:.9} {:.9}'", jd.value(), jd.value() + 1.0)
        } else {
            format!("'{:.9}'", jd.value())
        };
        let command = format!("'{}'", body.horizons_command());

        tracing::debug!("Making Horizons request to: {} (COMMAND={}, TLIST={})", self.endpoint, command, tlist);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "json"),
                ("COMMAND", command.as_str()),
                ("OBJ_DATA", "'NO'"),
                ("MAKE_EPHEM", "'YES'"),
                ("EPHEM_TYPE", "'OBSERVER'"),
                ("CENTER", "'500@399'"),
                ("TLIST", tlist.as_str()),
                ("TLIST_TYPE", "'JD'"),
                ("TIME_TYPE", "'UT'"),
                ("QUANTITIES", "'20,31'"),
                ("CSV_FORMAT", "'YES'"),
                ("ANG_FORMAT", "'DEG'"),
                ("EXTRA_PREC", "'YES'"),
            ])
            .send()
            .await
            .context("Horizons request failed")?;

        let status = response.status();
        tracing::debug!("Horizons response status: {}", status);
        let text = response.text().await.context("Failed to read Horizons response")?;

        let parsed: Option<HorizonsResponse> = serde_json::from_str(&text).ok();
        if let Some(message) = parsed.as_ref().and_then(|r| r.error.as_deref()) {
            bail!("Horizons error: {}", message.trim());
        }
        if !status.is_success() {
            bail!("Horizons returned HTTP {}", status);
        }

        let result = parsed
            .and_then(|r| r.result)
            .ok_or_else(|| anyhow!("Horizons response has no result"))?;

        let samples = parse_observer_table(&result)?;
        let expected = if with_speed { 2 } else { 1 };
        if samples.len() < expected {
            bail!("Horizons returned {} rows, expected {}", samples.len(), expected);
        }
        Ok(samples)
    }
}

#[async_trait]
impl EphemerisOracle for HorizonsOracle {
    async fn calc_ut(&self, jd: JulianDay, body: Body, flags: CalcFlags) -> OracleOutput {
        let unsupported = flags.bits() & !SUPPORTED_FLAGS;
        if unsupported != 0 {
            return OracleOutput::failure(format!("unsupported calculation flags {:#x}", unsupported));
        }

        let with_speed = flags.contains(CalcFlags::SPEED);
        match self.fetch(jd, body, with_speed).await {
            Ok(samples) => OracleOutput::success(coordinates(&samples, with_speed), flags),
            Err(e) => {
                tracing::warn!("Horizons lookup for {} at JD {} failed: {:#}", body, jd, e);
                OracleOutput::failure(format!("{:#}", e))
            }
        }
    }
}

fn coordinates(samples: &[Sample], with_speed: bool) -> [f64; 6] {
    let first = samples[0];
    let (lon_speed, lat_speed, dist_speed) = match samples.get(1) {
        Some(next) if with_speed => (
            wrap_180(next.longitude - first.longitude),
            next.latitude - first.latitude,
            next.distance - first.distance,
        ),
        _ => (0.0, 0.0, 0.0),
    };
    [
        first.longitude,
        first.latitude,
        first.distance,
        lon_speed,
        lat_speed,
        dist_speed,
    ]
}

/// Wraps an angle difference into (-180, 180].
fn wrap_180(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Pulls the rows between `$$SOE` and `$$EOE` out of a CSV observer table,
/// locating columns by header name.
fn parse_observer_table(text: &str) -> anyhow::Result<Vec<Sample>> {
    let lines: Vec<&str> = text.lines().collect();
    let soe = lines.iter().position(|l| l.trim() == "$$SOE");
    let eoe = lines.iter().position(|l| l.trim() == "$$EOE");

    let (soe, eoe) = match (soe, eoe) {
        (Some(soe), Some(eoe)) if soe < eoe => (soe, eoe),
        _ => bail!("{}", summarize_failure(text)),
    };

    let header = lines[..soe]
        .iter()
        .rev()
        .find(|l| l.contains("Date"))
        .ok_or_else(|| anyhow!("observer table has no column header"))?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let column = |name: &str| {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| anyhow!("observer table has no '{}' column", name))
    };
    let lon_col = column("ObsEcLon")?;
    let lat_col = column("ObsEcLat")?;
    let dist_col = column("delta")?;

    lines[soe + 1..eoe]
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|row| {
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            let value = |index: usize, name: &str| -> anyhow::Result<f64> {
                fields
                    .get(index)
                    .ok_or_else(|| anyhow!("row is missing '{}': {}", name, row.trim()))?
                    .parse::<f64>()
                    .with_context(|| format!("bad '{}' value in row: {}", name, row.trim()))
            };
            Ok(Sample {
                longitude: value(lon_col, "ObsEcLon")?,
                latitude: value(lat_col, "ObsEcLat")?,
                distance: value(dist_col, "delta")?,
            })
        })
        .collect()
}

/// Horizons reports lookup problems as free text instead of an ephemeris block.
fn summarize_failure(text: &str) -> String {
    let meaningful = |l: &&str| {
        let t = l.trim();
        !t.is_empty() && !t.starts_with('*')
    };
    let hint = text.lines().filter(meaningful).find(|l| {
        let lower = l.to_ascii_lowercase();
        ["no ephemeris", "error", "unknown", "cannot", "no matches", "outside"]
            .iter()
            .any(|needle| lower.contains(needle))
    });
    match hint.or_else(|| text.lines().find(meaningful)) {
        Some(line) => format!("no ephemeris data: {}", line.trim()),
        None => "no ephemeris data in Horizons response".to_string(),
    }
}
