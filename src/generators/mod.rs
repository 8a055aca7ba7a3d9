// src/generators/mod.rs
pub mod enhancer;
pub mod random;

pub use enhancer::PasswordEnhancer;
pub use random::{RandomSource, RngSource};
