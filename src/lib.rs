pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "http-server")]
pub mod http;
pub mod utils;

pub use adapters::{FixedAscendant, HorizonsOracle};
pub use config::AppConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{catalog::Catalog, reading::ReadingEngine};
pub use domain::model::{BirthInput, Body, Reading, ZodiacSign};
pub use utils::error::{OracleError, Result};
