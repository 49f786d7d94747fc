use crate::catalog::{CatalogError, CatalogProvider, HaloCatalog};
use crate::fake::FakeProvider;

#[test]
fn fake_catalog_is_deterministic() {
    let a = HaloCatalog::fake(42, 200);
    let b = HaloCatalog::fake(42, 200);
    assert_eq!(a, b);

    let c = HaloCatalog::fake(43, 200);
    assert_ne!(a, c);
}

#[test]
fn fake_catalog_masses_within_bounds() {
    let catalog = HaloCatalog::fake(42, 500);
    for halo in catalog.halos() {
        assert!(halo.mvir >= 1.0e10, "mvir {} below floor", halo.mvir);
        assert!(halo.mvir <= 1.0e15, "mvir {} above ceiling", halo.mvir);
    }
}

#[test]
fn fake_catalog_straddles_default_completeness_bound() {
    let catalog = HaloCatalog::fake(42, 500);
    let bound = catalog.particle_mass() * 300.0;

    let below = catalog.halos().iter().filter(|h| h.mvir < bound).count();
    let above = catalog.halos().iter().filter(|h| h.mvir > bound).count();
    assert!(below > 0, "Expected some halos below the 300-particle bound");
    assert!(above > 0, "Expected some halos above the 300-particle bound");
}

#[test]
fn fake_catalog_positions_within_box() {
    let catalog = HaloCatalog::fake(42, 500);
    let lbox = catalog.lbox();
    for halo in catalog.halos() {
        for coord in halo.position.iter() {
            assert!(*coord >= 0.0 && *coord < lbox);
        }
    }
}

#[test]
fn fake_catalog_validates_cleanly() {
    let catalog = HaloCatalog::fake(42, 500);
    assert!(catalog.validate().is_ok());
}

#[test]
fn fake_catalog_halos_are_hosts() {
    let catalog = HaloCatalog::fake(42, 100);
    assert!(catalog.halos().iter().all(|h| h.is_host()));
}

#[test]
fn fake_at_redshift_changes_only_identity() {
    let base = HaloCatalog::fake(42, 100);
    let shifted = HaloCatalog::fake_at_redshift(42, 100, 2.0);
    assert_eq!(shifted.identity().redshift, 2.0);
    assert_eq!(shifted.identity().simname, base.identity().simname);
    assert_eq!(shifted.halos(), base.halos());
}

#[test]
fn provider_serves_matching_identity() {
    let provider = FakeProvider::default();
    let catalog = provider
        .load("fake", 0.0, "rockstar", "alpha_version0")
        .unwrap();
    assert_eq!(catalog.len(), provider.num_halos);
    assert_eq!(catalog.identity().simname, "fake");
}

#[test]
fn provider_rejects_unknown_identity() {
    let provider = FakeProvider::default();
    match provider.load("bolshoi", 0.0, "rockstar", "alpha_version0") {
        Err(CatalogError::NotFound { simname, .. }) => assert_eq!(simname, "bolshoi"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}
