//! Three-component double-precision vector for positions, directions,
//! velocities and normals.
//!
//! # Design Philosophy
//! - Plain `Copy` aggregate of three `f64` components with public fields
//! - Verbs mutate in place (`normalize`, `negate`, `floor`, `round`, `min`,
//!   `max`, `clamp`); each has a value-returning companion (`normalized`,
//!   `negated`, `floored`, `rounded`, `component_min`, `component_max`,
//!   `clamped`)
//! - Failures are silent IEEE-754 results (NaN/inf), never panics. The
//!   `try_normalized` and `checked_div` variants report them as
//!   [`VectorError`] instead
//! - `<` and `>` are axis-wise strict comparisons: every component must
//!   satisfy the relation
//! - Equality and hashing both cover all three components
//!
//! # Usage
//! ```
//! use fluid_dynamics_core::Vector;
//!
//! let sum = Vector::new(1.0, 2.0, 3.0) + Vector::new(4.0, 5.0, 6.0);
//! assert_eq!(sum, Vector::new(5.0, 7.0, 9.0));
//!
//! let mut dir = Vector::new(3.0, 4.0, 0.0);
//! assert_eq!(dir.length(), 5.0);
//! dir.normalize();
//! assert!((dir.length() - 1.0).abs() < 1e-12);
//!
//! assert_eq!(Vector::RIGHT.cross(Vector::UP), Vector::BACKWARD);
//! assert_eq!(Vector::new(1.0, 2.5, -3.0).to_string(), "X:1, Y:2.5, Z:-3");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::trace;

use super::error::VectorError;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Minimum that returns NaN when either input is NaN
#[inline]
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Maximum that returns NaN when either input is NaN
#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[inline]
fn lerp(from: f64, to: f64, amount: f64) -> f64 {
    from + (to - from) * amount
}

/// Bit pattern used for hashing; `-0.0` and `0.0` compare equal so they share one
#[inline]
fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

// ============================================================================
// VECTOR
// ============================================================================

/// 3D vector of `f64` components.
///
/// No validation is performed: any finite or non-finite value is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Alias for callers that prefer the dimension in the name.
pub type Vector3 = Vector;

impl Vector {
    /// (0, 0, 0)
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);
    /// (1, 1, 1)
    pub const ONE: Vector = Vector::new(1.0, 1.0, 1.0);
    /// (0, 1, 0)
    pub const UP: Vector = Vector::new(0.0, 1.0, 0.0);
    /// (0, -1, 0)
    pub const DOWN: Vector = Vector::new(0.0, -1.0, 0.0);
    /// (-1, 0, 0)
    pub const LEFT: Vector = Vector::new(-1.0, 0.0, 0.0);
    /// (1, 0, 0)
    pub const RIGHT: Vector = Vector::new(1.0, 0.0, 0.0);
    /// (0, 0, -1)
    pub const FORWARD: Vector = Vector::new(0.0, 0.0, -1.0);
    /// (0, 0, 1)
    pub const BACKWARD: Vector = Vector::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Create a vector in the XY plane (z = 0)
    #[inline]
    pub const fn new_xy(x: f64, y: f64) -> Self {
        Vector::new(x, y, 0.0)
    }

    /// Create a vector with all three components set to `value`
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Vector::new(value, value, value)
    }

    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True if no component is NaN or infinite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True if any component is NaN
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Strict containment in the open box: `self > a && self < b`.
    ///
    /// `a` is expected to be the lesser corner. If it is not, the box is
    /// empty and this is always false.
    pub fn within(self, a: Vector, b: Vector) -> bool {
        self > a && self < b
    }

    /// `self < a && self > b`.
    ///
    /// This is containment in the box with the corners swapped, not the
    /// complement of [`Vector::within`]. A point outside `within(a, b)` is
    /// generally not `without(a, b)`.
    pub fn without(self, a: Vector, b: Vector) -> bool {
        self < a && self > b
    }

    fn all_less(&self, other: &Vector) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    // ------------------------------------------------------------------------
    // Restrictions (mutating)
    // ------------------------------------------------------------------------

    pub fn floor(&mut self) {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self.z = self.z.floor();
    }

    /// Round each component to the nearest integer, ties to even
    /// (`0.5 -> 0`, `1.5 -> 2`, `-2.5 -> -2`).
    pub fn round(&mut self) {
        self.x = self.x.round_ties_even();
        self.y = self.y.round_ties_even();
        self.z = self.z.round_ties_even();
    }

    /// Per-component minimum against `other`. NaN in either operand yields NaN.
    pub fn min(&mut self, other: Vector) {
        self.x = nan_min(self.x, other.x);
        self.y = nan_min(self.y, other.y);
        self.z = nan_min(self.z, other.z);
    }

    /// Per-component maximum against `other`. NaN in either operand yields NaN.
    pub fn max(&mut self, other: Vector) {
        self.x = nan_max(self.x, other.x);
        self.y = nan_max(self.y, other.y);
        self.z = nan_max(self.z, other.z);
    }

    /// Per-component clamp into `[lo, hi]`.
    ///
    /// Bounds are not validated. An axis with `lo > hi` ends up at `hi`.
    /// Unlike [`f64::clamp`] this never panics.
    pub fn clamp(&mut self, lo: Vector, hi: Vector) {
        self.max(lo);
        self.min(hi);
    }

    pub fn floored(mut self) -> Self {
        self.floor();
        self
    }

    pub fn rounded(mut self) -> Self {
        self.round();
        self
    }

    pub fn component_min(mut self, other: Vector) -> Self {
        self.min(other);
        self
    }

    pub fn component_max(mut self, other: Vector) -> Self {
        self.max(other);
        self
    }

    pub fn clamped(mut self, lo: Vector, hi: Vector) -> Self {
        self.clamp(lo, hi);
        self
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(self) -> f64 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// Scale to unit length in place.
    ///
    /// Unguarded: a zero vector becomes NaN in every component. Use
    /// [`Vector::try_normalized`] when the input may be degenerate.
    pub fn normalize(&mut self) {
        let factor = 1.0 / self.length();
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;

        if !self.is_finite() {
            trace!(result = %self, "normalize produced non-finite components");
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Unit vector in the same direction, or an error for degenerate input.
    ///
    /// Components are first divided by the largest magnitude so vectors
    /// whose squared length would overflow or underflow still normalize.
    ///
    /// # Errors
    /// [`VectorError::NonFinite`] if any component is NaN or infinite,
    /// [`VectorError::ZeroLength`] if every component is zero.
    pub fn try_normalized(self) -> Result<Self, VectorError> {
        if !self.is_finite() {
            return Err(VectorError::NonFinite { vector: self });
        }

        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if largest == 0.0 {
            return Err(VectorError::ZeroLength);
        }

        // Direct division: the reciprocal of a subnormal overflows
        let scaled = Vector::new(self.x / largest, self.y / largest, self.z / largest);
        Ok(scaled.normalized())
    }

    pub fn negate(&mut self) {
        *self = -*self;
    }

    pub fn negated(self) -> Self {
        -self
    }

    /// Right-handed cross product `self x other`.
    pub fn cross(self, other: Vector) -> Vector {
        let x = (self.y * other.z) - (other.y * self.z);
        let y = -((self.x * other.z) - (other.x * self.z));
        let z = (self.x * other.y) - (other.x * self.y);
        Vector::new(x, y, z)
    }

    pub fn dot(self, other: Vector) -> f64 {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Reflect `incident` about the plane with normal `normal`:
    /// `incident - 2 * normal * dot(incident, normal)`.
    ///
    /// `normal` is expected to be unit length; it is not normalized here.
    pub fn reflect(incident: Vector, normal: Vector) -> Vector {
        let d = incident.dot(normal);
        Vector::new(
            incident.x - 2.0 * normal.x * d,
            incident.y - 2.0 * normal.y * d,
            incident.z - 2.0 * normal.z * d,
        )
    }

    /// Linear interpolation towards `target`. `amount` is not clamped, so
    /// values outside `[0, 1]` extrapolate.
    pub fn interpolate(self, target: Vector, amount: f64) -> Vector {
        Vector::new(
            lerp(self.x, target.x, amount),
            lerp(self.y, target.y, amount),
            lerp(self.z, target.z, amount),
        )
    }

    pub fn distance(self, target: Vector) -> f64 {
        self.distance_squared(target).sqrt()
    }

    pub fn distance_squared(self, target: Vector) -> f64 {
        let dx = self.x - target.x;
        let dy = self.y - target.y;
        let dz = self.z - target.z;
        (dx * dx) + (dy * dy) + (dz * dz)
    }

    /// Divide by `factor`, rejecting a zero factor or a non-finite result.
    ///
    /// # Errors
    /// [`VectorError::DivideByZero`] if `factor` is zero,
    /// [`VectorError::NonFinite`] if the quotient has a NaN or infinite component.
    pub fn checked_div(self, factor: f64) -> Result<Self, VectorError> {
        if factor == 0.0 {
            return Err(VectorError::DivideByZero);
        }
        let quotient = self / factor;
        if quotient.is_finite() {
            Ok(quotient)
        } else {
            Err(VectorError::NonFinite { vector: quotient })
        }
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

/// Product order: `Less`/`Greater` only when every axis agrees strictly.
/// Mixed or NaN comparisons are unordered.
impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.all_less(other) {
            Some(Ordering::Less)
        } else if other.all_less(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.all_less(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.all_less(self)
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.x).hash(state);
        hash_bits(self.y).hash(state);
        hash_bits(self.z).hash(state);
    }
}

// ============================================================================
// ARITHMETIC
// ============================================================================

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul for Vector {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div for Vector {
    type Output = Vector;
    fn div(self, rhs: Vector) -> Vector {
        Vector::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

/// Multiplies by the reciprocal of `factor`, so results can differ from
/// per-component division in the last bit.
impl Div<f64> for Vector {
    type Output = Vector;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, factor: f64) -> Vector {
        self * (1.0 / factor)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector {
    fn mul_assign(&mut self, rhs: Vector) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl DivAssign for Vector {
    fn div_assign(&mut self, rhs: Vector) {
        *self = *self / rhs;
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, factor: f64) {
        *self = *self / factor;
    }
}

// ============================================================================
// CONVERSIONS & DISPLAY
// ============================================================================

impl From<[f64; 3]> for Vector {
    fn from(v: [f64; 3]) -> Self {
        Vector::new(v[0], v[1], v[2])
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> [f64; 3] {
        v.to_array()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{}, Y:{}, Z:{}", self.x, self.y, self.z)
    }
}
