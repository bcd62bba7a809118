//! Petshop Engine - configuration and composition root
//!
//! Reads the TOML configuration, initializes logging, loads seed fixtures
//! into the in-memory stores and hands out a ready `PetService`.

pub mod config;
pub mod engine;

pub use config::PetshopConfig;
pub use engine::Engine;
