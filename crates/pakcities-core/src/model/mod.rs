// crates/pakcities-core/src/model/mod.rs
pub mod city;
pub mod convert;

pub use city::City;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
