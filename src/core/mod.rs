// src/core/mod.rs
pub mod config;
pub mod meter;
pub mod policy;
pub mod rules;

pub use meter::PasswordMeter;
pub use policy::PolicyMode;
