//! YAML seed fixtures (`schema_version: 0`)
//!
//! [`parse_seed_file`] reads and validates a document, [`load_seed`] turns it
//! into a fresh [`InMemoryStores`](crate::InMemoryStores).

pub mod format_v0;
pub mod importer;
pub mod parser;

pub use format_v0::{SeedMicrochip, SeedOwner, SeedPet, SeedV0};
pub use importer::load_seed;
pub use parser::{parse_seed_file, parse_seed_str};
