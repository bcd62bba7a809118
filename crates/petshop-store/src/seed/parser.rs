//! Seed parsing
//!
//! Checks the schema version and that ids are unique per entity kind. Links between
//! records are not validated: an inconsistent microchip is a legitimate
//! fixture for the update workflow.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{io_error, seed_duplicate, seed_validation, Result};
use crate::seed::format_v0::SeedV0;

const SUPPORTED_SCHEMA_VERSION: u32 = 0;

/// Read, parse and validate the seed at `path`
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| io_error("seed_read", e).with_entity_id(path.display().to_string()))?;

    parse_seed_str(&content)
}

pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;
    Ok(seed)
}

fn first_duplicate<'a, I>(ids: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected {}",
            seed.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }

    if let Some(id) = first_duplicate(seed.owners.iter().map(|o| o.id.as_str())) {
        return Err(seed_duplicate("owner", id));
    }
    if let Some(id) = first_duplicate(seed.pets.iter().map(|p| p.id.as_str())) {
        return Err(seed_duplicate("pet", id));
    }
    if let Some(id) = first_duplicate(seed.microchips.iter().map(|m| m.id.as_str())) {
        return Err(seed_duplicate("microchip", id));
    }

    Ok(())
}
