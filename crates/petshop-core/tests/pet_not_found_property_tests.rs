#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use petshop_core::{Microchip, MicrochipId, Owner, OwnerId, PetId, UpdatePetDetailsFailure};
use proptest::prelude::*;

proptest! {
    /// Whatever the owner and microchip stores hold, a pet id missing from the
    /// pet store is reported as PetNotFound and nothing is mutated.
    #[test]
    fn prop_absent_pet_always_pet_not_found(
        pet in "[a-z0-9]{1,12}",
        owner in "[a-z0-9]{1,12}",
        owner_present in any::<bool>(),
        chip_present in any::<bool>(),
        other_pets in prop::collection::vec("[A-Z]{1,6}", 0..4),
        concurrent in any::<bool>(),
        name in ".{0,16}",
    ) {
        let fixture = Fixture::empty();
        // Stored pets use upper-case ids, the queried id is lower-case
        for other in &other_pets {
            fixture.pets.insert(test_pet(other, "chip"));
        }
        if owner_present {
            fixture.owners.insert(Owner::new(OwnerId::new(owner.clone()), "Someone"));
        }
        if chip_present {
            fixture.microchips.insert(Microchip::new(
                MicrochipId::new("chip"),
                OwnerId::new(owner.clone()),
                PetId::new(pet.clone()),
            ));
        }

        let lookup = if concurrent { STRATEGIES[1] } else { STRATEGIES[0] };
        let service = fixture.service_with(lookup);
        let result = futures::executor::block_on(
            service.update_pet_details(&pet_id(&pet), &owner_id(&owner), &rename(&name)),
        );

        prop_assert_eq!(result, Err(UpdatePetDetailsFailure::PetNotFound));
        prop_assert_eq!(fixture.pets.update_count(), 0);
    }
}
