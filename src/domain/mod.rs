// Domain layer: birth data, celestial positions and readings, plus the ports
// (oracle and ascendant provider) the core pipeline depends on.

pub mod model;
pub mod ports;
