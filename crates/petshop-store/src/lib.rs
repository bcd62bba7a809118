//! In-memory implementations of the petshop store traits, plus YAML seed
//! fixtures to populate them.
//!
//! The pet store enforces its own update rules and answers violations with
//! `UpdatePetFailure::IllegalUpdate`.

pub mod errors;
pub mod memory;
pub mod seed;

pub use errors::Result;
pub use memory::{InMemoryMicrochipStore, InMemoryOwnerStore, InMemoryPetStore, InMemoryStores};
