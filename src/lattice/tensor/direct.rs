//! Direct metric tensors.
//!
//! Angles fixed at 90° by a lattice system give exact zeros here, rather
//! than whatever `cos(PI / 2)` happens to round to.

use crate::cell::params::CellParams;
use crate::tensor::MetricTensor;

/// The general rule, valid for any cell.
///
/// `G_ii = len_i²`, and each off-diagonal entry is the product of two
/// lengths and the cosine of the angle between them.
pub fn general(params: &CellParams) -> MetricTensor {
    let &CellParams { a, b, c, .. } = params;
    let [cos_alpha, cos_beta, cos_gamma] = params.cosines().0;
    MetricTensor::symmetric(
        [a * a, b * b, c * c],
        [a * b * cos_gamma, a * c * cos_beta, b * c * cos_alpha],
    )
}

pub fn cubic(a: f64) -> MetricTensor
{ MetricTensor::diagonal_only([a * a; 3]) }

pub fn tetragonal(a: f64, c: f64) -> MetricTensor
{ MetricTensor::diagonal_only([a * a, a * a, c * c]) }

pub fn orthorhombic(a: f64, b: f64, c: f64) -> MetricTensor
{ MetricTensor::diagonal_only([a * a, b * b, c * c]) }

/// `gamma = 120°`, so `G01 = a² cos 120° = -a²/2`.
pub fn hexagonal(a: f64, c: f64) -> MetricTensor {
    let a2 = a * a;
    MetricTensor::symmetric([a2, a2, c * c], [-0.5 * a2, 0.0, 0.0])
}

/// Unique axis b; only `G02` is off-diagonal.
pub fn monoclinic(a: f64, b: f64, c: f64, beta: f64) -> MetricTensor
{ MetricTensor::symmetric([a * a, b * b, c * c], [0.0, a * c * beta.cos(), 0.0]) }

pub fn rhombohedral(a: f64, alpha: f64) -> MetricTensor {
    let a2 = a * a;
    let off = a2 * alpha.cos();
    MetricTensor::symmetric([a2; 3], [off; 3])
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn general_cell() {
        let params = CellParams::from_degrees(1.0, 2.0, 3.0, 60.0, 90.0, 120.0);
        let g = general(&params);
        assert_close!(abs=1e-14, g.diagonal().0, [1.0, 4.0, 9.0]);
        assert_close!(abs=1e-14, g.get(0, 1), -1.0);
        assert_close!(abs=1e-14, g.get(0, 2), 0.0);
        assert_close!(abs=1e-14, g.get(1, 2), 3.0);
        assert_close!(g.det(), params.volume().powi(2));
    }

    #[test]
    fn right_angles_are_exact() {
        assert_eq!(tetragonal(0.5, 1.0), MetricTensor::diagonal_only([0.25, 0.25, 1.0]));
        assert_eq!(orthorhombic(1.0, 2.0, 3.0).get(0, 2), 0.0);
        assert_eq!(hexagonal(2.0, 3.0).get(0, 1), -2.0);
        assert_eq!(hexagonal(2.0, 3.0).get(1, 2), 0.0);

        let m = monoclinic(1.0, 2.0, 3.0, 2.0 * PI / 3.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 2), 0.0);
        assert_close!(m.get(2, 0), -1.5);
    }

    #[test]
    fn rhombohedral_at_right_angle_is_cubic() {
        assert_close!(abs=1e-15, rhombohedral(0.5, PI / 2.0), cubic(0.5));
    }
}
