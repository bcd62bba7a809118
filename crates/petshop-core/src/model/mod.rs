pub mod ids;
pub mod microchip;
pub mod owner;
pub mod patch;
pub mod pet;
pub mod pet_update;

pub use ids::{MicrochipId, OwnerId, PetId};
pub use microchip::Microchip;
pub use owner::Owner;
pub use patch::Patch;
pub use pet::{Pet, PetGender, PetType};
pub use pet_update::PetUpdate;
