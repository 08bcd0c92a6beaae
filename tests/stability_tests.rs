//! Validation tests for stable states, phase classification, and the
//! energy barrier.
//!
//! Reference configurations:
//! - default unit `n=6, a=1, b=2, c=3, beta=1.5` (bistable)
//! - bilayer layer `b1=1.0371, b2=0.4715, c=1.0, beta=1.5130, n=6`
//!   (from the curvature-programming example)

use kresling_sim::{
    config::UnitParameters,
    geometry::KreslingUnit,
    mechanics::Phase,
};

fn default_unit() -> KreslingUnit {
    KreslingUnit::default()
}

/// The bilayer example layer: bottom edge b1, top edge b2.
fn bilayer_unit() -> KreslingUnit {
    KreslingUnit::new(&UnitParameters {
        n: 6,
        a: 0.4715,
        b: 1.0371,
        c: 1.0,
        beta: 1.5130,
        ea: 1.0,
    })
    .unwrap()
}

// ============================================================================
// Stable states
// ============================================================================

#[test]
fn test_default_unit_stable_states() {
    let unit = default_unit();

    // lambda = ((b - 2c cos(beta)) / a) sin(pi/n)
    let expected_lambda = ((2.0 - 6.0 * 1.5f64.cos()) / 1.0) * 0.5;
    assert!((unit.lambda() - expected_lambda).abs() < 1e-12);
    assert!(unit.lambda().abs() <= 1.0);

    let states = unit.stable_states();
    assert!(states.is_bistable(), "default unit must be bistable");

    let (s1, s2) = (states.state1.unwrap(), states.state2.unwrap());
    assert!((s1.phi - 0.383611).abs() < 1e-5);
    assert!((s1.h - 2.776558).abs() < 1e-5);
    assert!((s2.phi - 1.710784).abs() < 1e-5);
    assert!((s2.h - 1.855230).abs() < 1e-5);
}

#[test]
fn test_bilayer_unit_two_distinct_states() {
    let unit = bilayer_unit();
    let states = unit.stable_states();

    assert!(states.is_bistable());
    let (s1, s2) = (states.state1.unwrap(), states.state2.unwrap());

    assert!(s1.phi < s2.phi, "states must be distinct in twist");
    assert!(s1.h > 0.0 && s2.h > 0.0, "both heights must be positive");
    assert!((s1.h - 0.599601).abs() < 1e-5);
    // The second root sits barely off the flat-folded plane.
    assert!((s2.h - 0.021524).abs() < 1e-5);
    assert!((s1.h - s2.h).abs() > 0.1, "states must be distinct in height");
}

#[test]
fn test_states_at_local_energy_minimum() {
    // Perturbing phi around each stable state must not lower the energy
    // beyond numeric tolerance.
    let unit = default_unit();
    let states = unit.stable_states();

    for state in [states.state1.unwrap(), states.state2.unwrap()] {
        let e0 = unit.energy(state.h, state.phi);
        for dphi in [-0.02, -0.005, 0.005, 0.02] {
            let e = unit.energy(state.h, state.phi + dphi);
            assert!(
                e + 1e-9 >= e0,
                "E({}, {}) = {e} undercuts stable-state energy {e0}",
                state.h,
                state.phi + dphi
            );
        }
    }
}

#[test]
fn test_monostable_when_lambda_exceeds_one() {
    let unit = KreslingUnit::new(&UnitParameters {
        a: 0.2,
        ..UnitParameters::default()
    })
    .unwrap();
    assert!(unit.lambda().abs() > 1.0);

    let states = unit.stable_states();
    assert!(states.state1.is_none());
    assert!(states.state2.is_none());
    assert!(!unit.is_bistable());
    assert_eq!(unit.phase(), Phase::Monostable);
}

// ============================================================================
// Cache behavior
// ============================================================================

#[test]
fn test_cache_stable_across_repeated_calls() {
    let unit = default_unit();
    let first = unit.stable_states();
    let second = unit.stable_states();
    assert_eq!(first, second);
}

#[test]
fn test_cache_invalidated_by_each_geometry_setter() {
    let baseline = default_unit().stable_states();

    let mut unit = default_unit();
    let _ = unit.stable_states();
    unit.set_a(1.2).unwrap();
    assert_ne!(unit.stable_states(), baseline, "stale cache after set_a");

    let mut unit = default_unit();
    let _ = unit.stable_states();
    unit.set_b(1.8).unwrap();
    assert_ne!(unit.stable_states(), baseline, "stale cache after set_b");

    let mut unit = default_unit();
    let _ = unit.stable_states();
    unit.set_c(2.5).unwrap();
    assert_ne!(unit.stable_states(), baseline, "stale cache after set_c");

    let mut unit = default_unit();
    let _ = unit.stable_states();
    unit.set_beta(1.2).unwrap();
    assert_ne!(unit.stable_states(), baseline, "stale cache after set_beta");

    let mut unit = default_unit();
    let _ = unit.stable_states();
    unit.set_n(8).unwrap();
    assert_ne!(unit.stable_states(), baseline, "stale cache after set_n");
}

// ============================================================================
// Phase classification and barrier
// ============================================================================

#[test]
fn test_phase_is_one_of_three_labels() {
    let configs = [
        UnitParameters::default(),
        UnitParameters {
            a: 0.2,
            ..UnitParameters::default()
        },
        UnitParameters {
            n: 6,
            a: 0.4715,
            b: 1.0371,
            c: 1.0,
            beta: 1.5130,
            ea: 1.0,
        },
        UnitParameters {
            n: 9,
            a: 1.1,
            b: 0.9,
            c: 1.4,
            beta: 0.8,
            ea: 2.0,
        },
    ];

    for params in configs {
        let unit = KreslingUnit::new(&params).unwrap();
        let label = unit.phase().as_str();
        assert!(
            ["monostable", "bistable-zero-energy", "bistable-nonzero-energy"].contains(&label),
            "unexpected phase label {label}"
        );
    }
}

#[test]
fn test_default_unit_zero_energy_phase() {
    // c = 3 exceeds the saddle fold span, so the default unit folds
    // between its states without strain.
    assert_eq!(default_unit().phase(), Phase::BistableZeroEnergy);
}

#[test]
fn test_barrier_approximation_value() {
    // The barrier keeps the mountain crease at rest, so it is pure valley
    // strain at the saddle angle phi0 = pi/2 - pi/n.
    let unit = default_unit();
    let barrier = unit.energy_barrier();
    assert!(barrier.is_finite() && barrier >= 0.0);

    let phi0 = std::f64::consts::PI / 2.0 - std::f64::consts::PI / 6.0;
    let h0 = (unit.c() * unit.c() - unit.r() * unit.r() - unit.R() * unit.R()
        + 2.0 * unit.r() * unit.R() * (std::f64::consts::PI / 6.0).sin())
    .sqrt();
    assert!((barrier - unit.energy(h0, phi0)).abs() < 1e-12);

    let lengths = unit.crease_lengths(h0, phi0);
    let valley_strain = lengths.d_tilde - unit.d();
    let expected = 6.0 * unit.kv() * valley_strain * valley_strain / 2.0;
    assert!((barrier - expected).abs() < 1e-12);
}

#[test]
fn test_barrier_scales_with_stiffness() {
    let mut unit = default_unit();
    let barrier = unit.energy_barrier();
    unit.set_ea(4.0).unwrap();
    assert!((unit.energy_barrier() - 4.0 * barrier).abs() < 1e-10);
}
