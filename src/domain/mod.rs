// Domain layer: the dog model and the Canine capability. No I/O.

pub mod model;
pub mod ports;
