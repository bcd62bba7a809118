#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use petshop_core::errors::PsErrorKind;
use petshop_core::logging_facility::Profile;
use petshop_core::{LookupStrategy, OwnerId, PetId, PetUpdate};
use petshop_core_types::RequestContext;
use petshop_engine::{Engine, PetshopConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_resolves_seed_relative_to_config() {
    let config = PetshopConfig::load(&fixture("petshop.toml")).unwrap();

    assert_eq!(config.logging.profile, Profile::Test);
    assert_eq!(config.service.lookup, LookupStrategy::Concurrent);
    assert_eq!(config.seed.path, Some(fixture("seed.yaml")));
}

#[test]
fn test_load_rejects_misspelled_section() {
    let err = PetshopConfig::load(&fixture("petshop_typo.toml")).unwrap_err();

    assert_eq!(err.kind(), PsErrorKind::InvalidConfig);
    assert!(err.entity_id().unwrap().ends_with("petshop_typo.toml"));
}

#[test]
fn test_load_missing_config_is_io_error() {
    let err = PetshopConfig::load(&fixture("absent.toml")).unwrap_err();
    assert_eq!(err.kind(), PsErrorKind::Io);
}

#[test]
fn test_engine_with_missing_seed_fails() {
    let config = PetshopConfig::load(&fixture("petshop_missing_seed.toml")).unwrap();

    let err = Engine::from_config(&config).err().expect("seed must be required");

    assert_eq!(err.kind(), PsErrorKind::Io);
}

#[test]
fn test_engine_without_seed_has_empty_stores() {
    let config = PetshopConfig::from_toml_str("[logging]\nprofile = \"test\"").unwrap();

    let engine = Engine::from_config(&config).unwrap();

    assert!(engine.stores().pets.is_empty());
    assert_eq!(engine.service().lookup_strategy(), LookupStrategy::Sequential);
}

#[tokio::test]
async fn test_engine_serves_seeded_update() {
    let config = PetshopConfig::load(&fixture("petshop.toml")).unwrap();
    let engine = Engine::from_config(&config).unwrap();

    assert_eq!(engine.service().lookup_strategy(), LookupStrategy::Concurrent);
    assert_eq!(engine.stores().owners.len(), 2);

    let pet = engine
        .service()
        .update_pet_details(
            &PetId::new("P1"),
            &OwnerId::new("O1"),
            &PetUpdate::new().with_name("Rex"),
        )
        .await
        .unwrap();
    assert_eq!(pet.name, "Rex");
}

#[tokio::test]
async fn test_engine_context_error_for_wrong_owner() {
    let config = PetshopConfig::load(&fixture("petshop.toml")).unwrap();
    let engine = Engine::from_config(&config).unwrap();
    let ctx = RequestContext::new();

    let err = engine
        .service()
        .update_pet_details_in(
            &ctx,
            &PetId::new("P1"),
            &OwnerId::new("O2"),
            &PetUpdate::new().with_name("Rex"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), PsErrorKind::OwnerMismatch);
    assert_eq!(err.entity_id(), Some("O2"));
    assert_eq!(err.request_id(), Some(&ctx.request_id));
}

#[test]
fn test_config_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("petshop.toml");
    std::fs::write(&path, "[service]\nlookup = \"sequential\"\n").unwrap();

    let config = PetshopConfig::load(&path).unwrap();

    assert_eq!(config.service.lookup, LookupStrategy::Sequential);
    assert_eq!(config.logging.profile, Profile::Development);
}
