use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Absolute birth instant after timezone resolution.
pub type Instant = DateTime<Utc>;

/// Civil birth data as received from a caller.
///
/// `hour` is a fractional hour of the local day (14.5 is 14:30). JSON field
/// names follow the public API: `year, month, day, hour, lat, lon, timezone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: f64,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub timezone: String,
}

/// Continuous day count since -4712-01-01 12:00 (proleptic Julian calendar).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(pub f64);

impl JulianDay {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.9}", self.0)
    }
}

/// Tropical ecliptic longitude in degrees, exactly as the oracle returned it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EclipticLongitude(pub f64);

impl EclipticLongitude {
    /// Wraps the raw value into `[0, 360)`.
    pub fn normalized(self) -> f64 {
        let wrapped = self.0.rem_euclid(360.0);
        // rem_euclid rounds tiny negatives up to 360.0 and keeps -0.0
        if wrapped >= 360.0 || wrapped == 0.0 {
            0.0
        } else {
            wrapped
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// 0 = Aries .. 11 = Pisces.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown zodiac sign '{}'", s))
    }
}

/// Bodies the ephemeris oracle can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
}

impl Body {
    /// Target designation understood by the JPL Horizons `COMMAND` parameter.
    pub fn horizons_command(self) -> &'static str {
        match self {
            Body::Sun => "10",
            Body::Moon => "301",
            Body::Mercury => "199",
            Body::Venus => "299",
            Body::Mars => "499",
            Body::Jupiter => "599",
            Body::Saturn => "699",
            Body::Uranus => "799",
            Body::Neptune => "899",
            Body::Pluto => "999",
            // small-body record number; the trailing ';' forces a small-body lookup
            Body::Chiron => "2060;",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Sign, in-sign degree and whole-sign house of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub sign: ZodiacSign,
    /// Always within `[0, 30)`.
    pub degree_in_sign: f64,
    /// Always within `1..=12`.
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationEntry {
    pub wound: String,
    pub strength: String,
}

/// Final output of the pipeline, one per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub sign: ZodiacSign,
    /// Degree within the sign, rounded to two decimals.
    ///
    /// The unrounded value is in `[0, 30)` and decides `sign`; rounding can
    /// lift it to `30.0` (29.996° Aries reads as Aries 30.00°).
    #[serde(rename = "degree")]
    pub degree_in_sign: f64,
    pub house: u8,
    #[serde(rename = "traditional_wound")]
    pub wound_text: String,
    #[serde(rename = "lhp_strength")]
    pub strength_text: String,
    /// Unix seconds of the birth instant.
    pub timestamp: i64,
}
