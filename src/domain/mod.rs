// Domain layer: the pattern vocabulary and the demo port. No I/O here.

pub mod model;
pub mod ports;
