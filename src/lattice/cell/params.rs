use crate::errors::{Error, Result};

use cellmetric_array_types::V3;
use std::f64::consts::PI;

pub(crate) const LENGTH_NAMES: [&str; 3] = ["a", "b", "c"];
pub(crate) const ANGLE_NAMES: [&str; 3] = ["alpha", "beta", "gamma"];

/// The six parameters of a unit cell.
///
/// Lengths are in a consistent unit (nanometres throughout this crate's
/// examples), angles are in radians.  `alpha` is the angle between the `b`
/// and `c` edges, `beta` between `a` and `c`, and `gamma` between `a` and `b`.
///
/// Construction does not validate anything; see [`validate`].
///
/// [`validate`]: #method.validate
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CellParams {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self
    { CellParams { a, b, c, alpha, beta, gamma } }

    /// Same as `new`, but with angles in degrees.
    pub fn from_degrees(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self
    { Self::new(a, b, c, alpha.to_radians(), beta.to_radians(), gamma.to_radians()) }

    #[inline]
    pub fn lengths(&self) -> [f64; 3]
    { [self.a, self.b, self.c] }

    #[inline]
    pub fn angles(&self) -> [f64; 3]
    { [self.alpha, self.beta, self.gamma] }

    /// `[cos alpha, cos beta, cos gamma]`
    #[inline]
    pub fn cosines(&self) -> V3
    { V3(self.angles()).map(f64::cos) }

    /// `[sin alpha, sin beta, sin gamma]`
    #[inline]
    pub fn sines(&self) -> V3
    { V3(self.angles()).map(f64::sin) }

    /// `1 - cos²α - cos²β - cos²γ + 2 cosα cosβ cosγ`
    ///
    /// This is the squared volume of a cell with unit edges; it is
    /// positive exactly when the angles describe a three-dimensional cell.
    pub fn volume_factor(&self) -> f64 {
        let V3([ca, cb, cg]) = self.cosines();
        1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg
    }

    /// Volume of the cell.
    pub fn volume(&self) -> f64
    { self.a * self.b * self.c * self.volume_factor().max(0.0).sqrt() }

    /// Check that the parameters describe a three-dimensional unit cell.
    ///
    /// * Every length is finite and positive.
    /// * Every angle is finite and strictly between 0 and π.
    /// * Every angle is strictly less than the sum of the other two, and
    ///   strictly greater than their absolute difference.
    /// * The three angles sum to strictly less than 2π.
    ///
    /// The first violation found is reported as `Error::InvalidParameter`.
    pub fn validate(&self) -> Result<()> {
        for (&name, &length) in izip!(&LENGTH_NAMES, &self.lengths()) {
            if !length.is_finite() {
                return Err(Error::invalid(name, length, "edge lengths must be finite"));
            }
            if !(length > 0.0) {
                return Err(Error::invalid(name, length, "edge lengths must be positive"));
            }
        }

        let angles = self.angles();
        for (&name, &angle) in izip!(&ANGLE_NAMES, &angles) {
            if !angle.is_finite() {
                return Err(Error::invalid(name, angle, "angles must be finite"));
            }
            if !(0.0 < angle && angle < PI) {
                return Err(Error::invalid(name, angle, "angles must lie strictly between 0 and pi"));
            }
        }

        for k in 0..3 {
            let angle = angles[k];
            let p = angles[(k + 1) % 3];
            let q = angles[(k + 2) % 3];
            if !(angle < p + q) {
                return Err(Error::invalid(
                    ANGLE_NAMES[k], angle,
                    "each angle must be less than the sum of the other two",
                ));
            }
            if !(angle > (p - q).abs()) {
                return Err(Error::invalid(
                    ANGLE_NAMES[k], angle,
                    "each angle must exceed the difference of the other two",
                ));
            }
        }

        let sum = angles.iter().sum::<f64>();
        if !(sum < 2.0 * PI) {
            return Err(Error::invalid("angles", sum, "the angles must sum to less than 2 pi"));
        }
        Ok(())
    }
}
