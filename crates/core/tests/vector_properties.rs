//! Algebraic properties of `Vector` checked over seeded random samples
use approx::assert_relative_eq;
use fluid_dynamics_core::{Vector, VectorError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

#[ctor::ctor]
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn random_vector(rng: &mut StdRng) -> Vector {
    Vector::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn samples(seed: u64) -> Vec<(Vector, Vector)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| (random_vector(&mut rng), random_vector(&mut rng)))
        .collect()
}

#[test]
fn test_identities() {
    for (v, _) in samples(1) {
        assert_eq!(v + Vector::ZERO, v);
        assert_eq!(v * Vector::ONE, v);
        assert_eq!(v - v, Vector::ZERO);
        assert_eq!(v * 1.0, v);
        assert_eq!(v.negated().negated(), v);
    }
}

#[test]
fn test_normalized_has_unit_length() {
    for (v, _) in samples(2) {
        if v.length() == 0.0 {
            continue;
        }
        let mut n = v;
        n.normalize();
        assert!((n.length() - 1.0).abs() < 1e-9, "|{n}| = {}", n.length());

        let checked = v.try_normalized().unwrap();
        assert_relative_eq!(checked, n, epsilon = 1e-12);
    }
}

#[test]
fn test_cross_is_orthogonal() {
    for (a, b) in samples(3) {
        let c = a.cross(b);
        let tolerance = 1e-9 * a.length() * a.length() * b.length();
        assert!(c.dot(a).abs() <= tolerance, "cross({a}, {b}) . a = {}", c.dot(a));
        let tolerance = 1e-9 * a.length() * b.length() * b.length();
        assert!(c.dot(b).abs() <= tolerance, "cross({a}, {b}) . b = {}", c.dot(b));
    }
}

#[test]
fn test_cross_is_anticommutative() {
    for (a, b) in samples(4) {
        assert_eq!(a.cross(b), -b.cross(a));
    }
}

#[test]
fn test_dot_is_commutative() {
    for (a, b) in samples(5) {
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[test]
fn test_distance_is_symmetric() {
    for (a, b) in samples(6) {
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
        assert_eq!(a.distance(a), 0.0);
        assert_relative_eq!(a.distance(b), (a - b).length(), epsilon = 1e-12);
    }
}

#[test]
fn test_interpolate_endpoints() {
    for (a, b) in samples(7) {
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_relative_eq!(a.interpolate(b, 1.0), b, epsilon = 1e-12);
        let mid = a.interpolate(b, 0.5);
        assert_relative_eq!(mid.distance(a), mid.distance(b), epsilon = 1e-9);
    }
}

#[test]
fn test_reflect_preserves_length() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let incident = random_vector(&mut rng);
        let Ok(normal) = random_vector(&mut rng).try_normalized() else {
            continue;
        };
        let reflected = Vector::reflect(incident, normal);
        assert_relative_eq!(reflected.length(), incident.length(), epsilon = 1e-9);
        // Tangential part unchanged, normal part flipped
        assert_relative_eq!(reflected.dot(normal), -incident.dot(normal), epsilon = 1e-9);
    }
}

#[test]
fn test_clamp_stays_inside_bounds() {
    let lo = Vector::splat(-10.0);
    let hi = Vector::splat(10.0);
    for (v, _) in samples(9) {
        let c = v.clamped(lo, hi);
        assert!((lo.x..=hi.x).contains(&c.x));
        assert!((lo.y..=hi.y).contains(&c.y));
        assert!((lo.z..=hi.z).contains(&c.z));
        if v.within(lo, hi) {
            assert_eq!(c, v);
        }
    }
}

#[test]
fn test_mutators_match_companions() {
    for (a, b) in samples(10) {
        let mut m = a;
        m.floor();
        assert_eq!(m, a.floored());

        let mut m = a;
        m.round();
        assert_eq!(m, a.rounded());

        let mut m = a;
        m.min(b);
        assert_eq!(m, a.component_min(b));

        let mut m = a;
        m.max(b);
        assert_eq!(m, a.component_max(b));

        let mut m = a;
        m.negate();
        assert_eq!(m, -a);
    }
}

#[test]
fn test_ordering_is_axis_wise() {
    for (a, b) in samples(11) {
        let less = a.x < b.x && a.y < b.y && a.z < b.z;
        let greater = a.x > b.x && a.y > b.y && a.z > b.z;
        assert_eq!(a < b, less);
        assert_eq!(a > b, greater);
        assert!(!b.without(a, a));
    }
}

#[test]
fn test_degenerate_inputs_never_panic() {
    let zero = Vector::ZERO;
    let nan = Vector::splat(f64::NAN);

    assert!(zero.normalized().is_nan());
    assert!((Vector::ONE / zero).x.is_infinite());
    assert!(nan.clamped(Vector::ZERO, Vector::ONE).is_nan());
    assert!(nan.cross(Vector::UP).is_nan());
    assert!(nan != Vector::splat(f64::NAN));
    assert_eq!(zero.try_normalized(), Err(VectorError::ZeroLength));
    assert_eq!(Vector::UP.checked_div(0.0), Err(VectorError::DivideByZero));
}
