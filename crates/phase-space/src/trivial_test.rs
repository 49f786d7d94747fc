use halo_catalog::Halo;
use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::profile::PhaseSpaceComponent;
use crate::trivial::TrivialProfile;

fn test_halo() -> Halo {
    Halo {
        halo_id: 0,
        upid: -1,
        mvir: 1.0e13,
        rvir: 0.43,
        conc: 7.0,
        vmax: 300.0,
        position: Point3::new(50.0, 100.0, 150.0),
        velocity: Vector3::new(-120.0, 40.0, 310.0),
    }
}

#[test]
fn trivial_profile_offsets_are_zero() {
    let profile = TrivialProfile::new("centrals");
    let mut rng = ChaChaRng::seed_from_u64(42);
    let points = profile.mc_pos_vel(&test_halo(), 10, &mut rng);

    assert_eq!(points.len(), 10);
    for point in points {
        assert_eq!(point.position, Vector3::zeros());
        assert_eq!(point.velocity, Vector3::zeros());
    }
}

#[test]
fn trivial_profile_respects_count() {
    let profile = TrivialProfile::new("centrals");
    let mut rng = ChaChaRng::seed_from_u64(42);
    assert!(profile.mc_pos_vel(&test_halo(), 0, &mut rng).is_empty());
    assert_eq!(profile.mc_pos_vel(&test_halo(), 3, &mut rng).len(), 3);
}

#[test]
fn trivial_profile_reports_gal_type() {
    let profile = TrivialProfile::new("centrals");
    assert_eq!(profile.gal_type(), "centrals");
}
