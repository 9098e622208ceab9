use crate::domain::model::{Body, BirthInput, JulianDay, ZodiacSign};
use async_trait::async_trait;
use std::ops::BitOr;

/// Calculation flag bitmask passed through to the ephemeris oracle.
/// Values follow the Swiss Ephemeris `SEFLG_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalcFlags(u32);

impl CalcFlags {
    pub const JPLEPH: CalcFlags = CalcFlags(1);
    pub const SWIEPH: CalcFlags = CalcFlags(2);
    pub const MOSEPH: CalcFlags = CalcFlags(4);
    pub const SPEED: CalcFlags = CalcFlags(256);
    pub const EQUATORIAL: CalcFlags = CalcFlags(2048);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        CalcFlags(bits)
    }

    pub const fn contains(self, other: CalcFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CalcFlags {
    type Output = CalcFlags;

    fn bitor(self, rhs: CalcFlags) -> CalcFlags {
        CalcFlags(self.0 | rhs.0)
    }
}

/// Raw answer of an ephemeris oracle.
///
/// `coordinates` is `[longitude, latitude, distance, lon_speed, lat_speed,
/// dist_speed]`. A negative `status` means the computation failed and
/// `error_text` explains why; `coordinates` is meaningless in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleOutput {
    pub coordinates: [f64; 6],
    pub status: i32,
    pub error_text: String,
}

impl OracleOutput {
    pub const ERR: i32 = -1;

    pub fn success(coordinates: [f64; 6], flags: CalcFlags) -> Self {
        Self {
            coordinates,
            status: flags.bits() as i32,
            error_text: String::new(),
        }
    }

    pub fn failure(error_text: impl Into<String>) -> Self {
        Self {
            coordinates: [0.0; 6],
            status: Self::ERR,
            error_text: error_text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status < 0
    }
}

/// External ephemeris engine: Julian Day (UT) + body -> tropical ecliptic coordinates.
///
/// Implementations may block on I/O. Dropping the returned future must abandon
/// any in-flight request.
#[async_trait]
pub trait EphemerisOracle: Send + Sync {
    async fn calc_ut(&self, jd: JulianDay, body: Body, flags: CalcFlags) -> OracleOutput;
}

/// Supplies the ascendant sign that anchors whole-sign house numbering.
pub trait AscendantSource: Send + Sync {
    fn ascendant_sign(&self, input: &BirthInput, jd: JulianDay) -> ZodiacSign;
}
