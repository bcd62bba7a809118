use crate::memory::InMemoryStores;
use crate::seed::format_v0::SeedV0;

/// Fill a fresh set of in-memory stores from a validated seed
pub fn load_seed(seed: &SeedV0) -> InMemoryStores {
    let stores = InMemoryStores::new();

    for owner in &seed.owners {
        stores.owners.insert_owner(owner.into());
    }
    for pet in &seed.pets {
        stores.pets.insert_pet(pet.into());
    }
    for microchip in &seed.microchips {
        stores.microchips.insert_microchip(microchip.into());
    }

    tracing::debug!(
        owners = seed.owners.len(),
        pets = seed.pets.len(),
        microchips = seed.microchips.len(),
        "Seed loaded"
    );

    stores
}
