// Adapters layer: concrete implementations of the domain ports.

pub mod rng;
pub mod storage;
