//! Pure checks run by the update workflow between lookup and mutation

pub mod consistency;
pub mod validation;

pub use consistency::check_microchip_link;
pub use validation::{check_name_policy, validate_pet_update};
