// Domain layer: wire models and ports (interfaces).

pub mod model;
pub mod ports;
