#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use petshop_core::{MicrochipId, Patch, PetGender, PetType, PetUpdate};

#[test]
fn test_missing_fields_deserialize_as_unset() {
    let update: PetUpdate = serde_json::from_str(r#"{"name": "Rex"}"#).unwrap();

    assert_eq!(update.name, Patch::Set("Rex".to_string()));
    assert!(update.microchip_id.is_unset());
    assert!(update.birth_date.is_unset());
    assert!(update.pet_type.is_unset());
    assert!(update.breed.is_unset());
    assert!(update.gender.is_unset());
}

#[test]
fn test_empty_object_is_empty_update() {
    let update: PetUpdate = serde_json::from_str("{}").unwrap();
    assert!(update.is_empty());
    assert_eq!(update, PetUpdate::new());
}

#[test]
fn test_empty_string_is_set_not_unset() {
    let update: PetUpdate = serde_json::from_str(r#"{"breed": ""}"#).unwrap();
    assert_eq!(update.breed, Patch::Set(String::new()));
    assert!(!update.is_empty());
}

#[test]
fn test_explicit_null_is_rejected() {
    let result = serde_json::from_str::<PetUpdate>(r#"{"name": null}"#);
    assert!(result.is_err(), "null must not be read as absence");
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = serde_json::from_str::<PetUpdate>(r#"{"id": "P2"}"#);
    assert!(result.is_err());
}

#[test]
fn test_all_fields_deserialize() {
    let update: PetUpdate = serde_json::from_str(
        r#"{
            "microchip_id": "M9",
            "name": "Tom",
            "birth_date": "2021-05-04",
            "pet_type": "cat",
            "breed": "Siamese",
            "gender": "female"
        }"#,
    )
    .unwrap();

    assert_eq!(
        update,
        PetUpdate::new()
            .with_microchip_id(MicrochipId::new("M9"))
            .with_name("Tom")
            .with_birth_date(NaiveDate::from_ymd_opt(2021, 5, 4).unwrap())
            .with_pet_type(PetType::Cat)
            .with_breed("Siamese")
            .with_gender(PetGender::Female)
    );
}

#[test]
fn test_unset_fields_are_skipped_on_serialize() {
    let json = serde_json::to_value(PetUpdate::new().with_name("Rex")).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Rex" }));

    let empty = serde_json::to_value(PetUpdate::new()).unwrap();
    assert_eq!(empty, serde_json::json!({}));
}
