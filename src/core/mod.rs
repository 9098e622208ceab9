pub mod catalog;
pub mod civil_time;
pub mod ephemeris;
pub mod julian;
pub mod position;
pub mod reading;

pub use crate::domain::model::{BirthInput, Position, Reading};
pub use crate::domain::ports::{AscendantSource, CalcFlags, EphemerisOracle, OracleOutput};
pub use crate::utils::error::Result;
