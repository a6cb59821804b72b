//! Optional trait impls for the `approx` and `nalgebra` crates.
//!
//! `approx` lets consumers write `assert_relative_eq!(a, b)` on vectors;
//! the tolerance applies to each component independently. `nalgebra`
//! conversions let solver code built on `Vector3<f64>` exchange values.

use super::vector::Vector;

#[cfg(feature = "approx")]
mod approx_impls {
    use super::Vector;
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    impl AbsDiffEq for Vector {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            self.x.abs_diff_eq(&other.x, epsilon)
                && self.y.abs_diff_eq(&other.y, epsilon)
                && self.z.abs_diff_eq(&other.z, epsilon)
        }
    }

    impl RelativeEq for Vector {
        fn default_max_relative() -> f64 {
            f64::default_max_relative()
        }

        fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
            self.x.relative_eq(&other.x, epsilon, max_relative)
                && self.y.relative_eq(&other.y, epsilon, max_relative)
                && self.z.relative_eq(&other.z, epsilon, max_relative)
        }
    }

    impl UlpsEq for Vector {
        fn default_max_ulps() -> u32 {
            f64::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
            self.x.ulps_eq(&other.x, epsilon, max_ulps)
                && self.y.ulps_eq(&other.y, epsilon, max_ulps)
                && self.z.ulps_eq(&other.z, epsilon, max_ulps)
        }
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f64>> for Vector {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Vector> for nalgebra::Vector3<f64> {
    fn from(v: Vector) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
