//! Composition root
//!
//! ## Logging Ownership
//!
//! The engine logs its own startup as the `engine_init` operation. Each
//! `update_pet_details` call is logged by the core service.

use std::time::Instant;

use petshop_core::errors::Result;
use petshop_core::logging_facility;
use petshop_core::{log_op_end, log_op_error, log_op_start, PetService};
use petshop_store::seed::{load_seed, parse_seed_file};
use petshop_store::InMemoryStores;

use crate::config::PetshopConfig;

/// In-memory stores plus the service wired to them
#[derive(Clone)]
pub struct Engine {
    stores: InMemoryStores,
    service: PetService,
}

impl Engine {
    /// Build an engine from configuration
    ///
    /// Initializes logging for the configured profile (a no-op if logging is
    /// already initialized), loads the seed if one is configured and wires a
    /// [`PetService`] with the configured lookup strategy.
    ///
    /// # Errors
    ///
    /// `Io` or `InvalidSeed` if the configured seed cannot be loaded
    pub fn from_config(config: &PetshopConfig) -> Result<Self> {
        logging_facility::init(config.logging.profile);

        log_op_start!("engine_init");
        let start = Instant::now();

        let stores = match &config.seed.path {
            Some(path) => {
                let seed = parse_seed_file(path).map_err(|e| {
                    log_op_error!(
                        "engine_init",
                        e.clone(),
                        duration_ms = start.elapsed().as_millis() as u64
                    );
                    e
                })?;
                load_seed(&seed)
            }
            None => InMemoryStores::new(),
        };

        let service = stores
            .pet_service()
            .with_lookup_strategy(config.service.lookup);

        log_op_end!(
            "engine_init",
            duration_ms = start.elapsed().as_millis() as u64,
            pets = stores.pets.len()
        );

        Ok(Self { stores, service })
    }

    pub fn service(&self) -> &PetService {
        &self.service
    }

    pub fn stores(&self) -> &InMemoryStores {
        &self.stores
    }
}
