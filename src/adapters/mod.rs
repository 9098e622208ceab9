// Adapters layer: concrete implementations of the domain ports.

pub mod ascendant;
pub mod horizons;

pub use ascendant::FixedAscendant;
pub use horizons::HorizonsOracle;
