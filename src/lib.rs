//! pakcities-rs
//! ============
//!
//! Umbrella crate for the workspace. Re-exports [`pakcities_core`] so the demos
//! under `demos/` can `use pakcities_rs::prelude::*`.

pub use pakcities_core::*;

pub mod prelude {
    pub use pakcities_core::prelude::*;
}
