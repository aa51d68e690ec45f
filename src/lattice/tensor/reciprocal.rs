//! Reciprocal metric tensors.
//!
//! Every rule here produces the inverse of the matching rule in
//! [`direct`](../direct/index.html).  The two rules whose normalizer can
//! vanish for a valid-looking input (rhombohedral and triclinic) check it
//! against `Thresholds::degeneracy` and fail with `DegenerateCell` instead
//! of dividing by something near zero.

use crate::cell::params::CellParams;
use crate::cell::system::SystemKind;
use crate::errors::{Error, Result};
use crate::tensor::MetricTensor;
use crate::thresholds::Thresholds;

/// `cos a cos b - cos g`, the numerator shared by the off-diagonal
/// entries of the triclinic rule.
#[inline]
pub fn mixed_cosine(a: f64, b: f64, g: f64) -> f64
{ a.cos() * b.cos() - g.cos() }

/// `W = a² (1 + cos α - 2 cos² α)`
#[inline]
pub fn rhombohedral_normalizer(a: f64, alpha: f64) -> f64 {
    let c = alpha.cos();
    a * a * (1.0 + c - 2.0 * c * c)
}

/// `ω² = (abc)² (1 - cos²α - cos²β - cos²γ + 2 cosα cosβ cosγ)`, the
/// squared cell volume.
#[inline]
pub fn omega_squared(params: &CellParams) -> f64 {
    let abc = params.a * params.b * params.c;
    abc * abc * params.volume_factor()
}

fn check_normalizer(system: SystemKind, normalizer: &'static str, value: f64, thresholds: &Thresholds) -> Result<()> {
    // `value` is always scaled to a unit cell, so a fixed threshold applies at any size
    if !(value > thresholds.degeneracy) {
        trace!("{} normalizer {} = {:e} is below {:e}", system, normalizer, value, thresholds.degeneracy);
        return Err(Error::DegenerateCell { system, normalizer, value });
    }
    Ok(())
}

pub fn cubic(a: f64) -> MetricTensor
{ MetricTensor::diagonal_only([1.0 / (a * a); 3]) }

pub fn tetragonal(a: f64, c: f64) -> MetricTensor {
    let inv_a2 = 1.0 / (a * a);
    MetricTensor::diagonal_only([inv_a2, inv_a2, 1.0 / (c * c)])
}

pub fn orthorhombic(a: f64, b: f64, c: f64) -> MetricTensor
{ MetricTensor::diagonal_only([1.0 / (a * a), 1.0 / (b * b), 1.0 / (c * c)]) }

/// `a*` and `b*` meet at 60°, so `G*01` is positive.
pub fn hexagonal(a: f64, c: f64) -> MetricTensor {
    let d = 4.0 / (3.0 * a * a);
    MetricTensor::symmetric([d, d, 1.0 / (c * c)], [d / 2.0, 0.0, 0.0])
}

pub fn monoclinic(a: f64, b: f64, c: f64, beta: f64) -> MetricTensor {
    let sin2 = beta.sin().powi(2);
    MetricTensor::symmetric(
        [1.0 / (a * a * sin2), 1.0 / (b * b), 1.0 / (c * c * sin2)],
        [0.0, -beta.cos() / (a * c * sin2), 0.0],
    )
}

/// Fails when `W / a²` is at most `thresholds.degeneracy`, which happens
/// as `alpha` approaches 120°.
pub fn rhombohedral(a: f64, alpha: f64, thresholds: &Thresholds) -> Result<MetricTensor> {
    let w = rhombohedral_normalizer(a, alpha);
    check_normalizer(SystemKind::Rhombohedral, "W", w / (a * a), thresholds)?;

    // (1 - tan²(α/2)) / 2 = cos α / (1 + cos α)
    let numer = 1.0 + alpha.cos();
    let half_angle = (1.0 - (alpha / 2.0).tan().powi(2)) / 2.0;
    let diag = numer / w;
    let off = -numer * half_angle / w;
    Ok(MetricTensor::symmetric([diag; 3], [off; 3]))
}

/// The rule for an arbitrary cell.
///
/// Fails when the volume factor (`ω² / (abc)²`) is at most
/// `thresholds.degeneracy`.
pub fn general(params: &CellParams, thresholds: &Thresholds) -> Result<MetricTensor> {
    let &CellParams { a, b, c, alpha, beta, gamma } = params;
    check_normalizer(SystemKind::Triclinic, "omega", params.volume_factor(), thresholds)?;

    let omega2 = omega_squared(params);
    let [sin_alpha, sin_beta, sin_gamma] = params.sines().0;
    Ok(MetricTensor::symmetric(
        [
            (b * c * sin_alpha).powi(2) / omega2,
            (a * c * sin_beta).powi(2) / omega2,
            (a * b * sin_gamma).powi(2) / omega2,
        ],
        [
            a * b * c * c * mixed_cosine(alpha, beta, gamma) / omega2,
            a * b * b * c * mixed_cosine(alpha, gamma, beta) / omega2,
            a * a * b * c * mixed_cosine(beta, gamma, alpha) / omega2,
        ],
    ))
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::tensor::direct;
    use cellmetric_array_types::M33;
    use std::f64::consts::PI;

    fn assert_inverse(direct: &MetricTensor, reciprocal: &MetricTensor) {
        assert_close!(abs=1e-12, rel=1e-9, direct * reciprocal, M33::eye());
        assert_close!(abs=1e-12, rel=1e-9, reciprocal * direct, M33::eye());
    }

    fn random_triclinic() -> CellParams {
        let length = || 0.2 + 1.8 * ::rand::random::<f64>();
        let angle = || (70.0 + 40.0 * ::rand::random::<f64>()).to_radians();
        CellParams::new(length(), length(), length(), angle(), angle(), angle())
    }

    #[test]
    fn inverse_of_direct() {
        let tol = Thresholds::default();
        assert_inverse(&direct::cubic(0.36), &cubic(0.36));
        assert_inverse(&direct::tetragonal(0.5, 1.0), &tetragonal(0.5, 1.0));
        assert_inverse(&direct::orthorhombic(0.4, 0.5, 0.6), &orthorhombic(0.4, 0.5, 0.6));
        assert_inverse(&direct::hexagonal(0.25, 0.4), &hexagonal(0.25, 0.4));
        assert_inverse(&direct::monoclinic(0.4, 0.5, 0.6, 1.9), &monoclinic(0.4, 0.5, 0.6, 1.9));
        for &alpha in &[0.3, 1.2, PI / 2.0, 1.9, 2.05] {
            assert_inverse(&direct::rhombohedral(0.3, alpha), &rhombohedral(0.3, alpha, &tol).unwrap());
        }
    }

    #[test]
    fn inverse_of_random_triclinic() {
        let tol = Thresholds::default();
        for _ in 0..100 {
            let params = random_triclinic();
            let reciprocal = general(&params, &tol).unwrap();
            assert_inverse(&direct::general(&params), &reciprocal);
            assert!(reciprocal.matrix().is_symmetric());
        }
    }

    #[test]
    fn reference_values() {
        assert_eq!(tetragonal(0.5, 1.0), MetricTensor::diagonal_only([4.0, 4.0, 1.0]));

        let h = hexagonal(1.0, 2.0);
        assert_close!(h.get(0, 0), 4.0 / 3.0);
        assert_close!(h.get(0, 1), 2.0 / 3.0);
        assert_close!(h.get(2, 2), 0.25);

        let m = monoclinic(1.0, 2.0, 3.0, 2.0 * PI / 3.0);
        assert_close!(m.get(0, 0), 4.0 / 3.0);
        assert_close!(m.get(1, 1), 0.25);
        assert_close!(m.get(0, 2), 2.0 / 9.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn continuity_at_right_angles() {
        let tol = Thresholds::default();
        let near = PI / 2.0 + 1e-9;
        assert_close!(abs=1e-8, monoclinic(0.4, 0.5, 0.6, near), orthorhombic(0.4, 0.5, 0.6));
        assert_close!(abs=1e-8, rhombohedral(0.5, near, &tol).unwrap(), cubic(0.5));
        let params = CellParams::new(0.4, 0.5, 0.6, near, near, near);
        assert_close!(abs=1e-8, general(&params, &tol).unwrap(), orthorhombic(0.4, 0.5, 0.6));
    }

    #[test]
    fn degenerate_rhombohedral() {
        let alpha = 2.0 * PI / 3.0 - 1e-12;
        match rhombohedral(0.3, alpha, &Thresholds::default()) {
            Err(Error::DegenerateCell { system, normalizer, value }) => {
                assert_eq!(system, SystemKind::Rhombohedral);
                assert_eq!(normalizer, "W");
                assert!(value.abs() < 1e-10);
            },
            r => panic!("unexpected result {:?}", r),
        }

        // a looser threshold lets it through
        let loose = Thresholds { degeneracy: 0.0, ..Thresholds::default() };
        assert!(rhombohedral(0.3, 2.0 * PI / 3.0 - 1e-6, &loose).is_ok());
    }

    #[test]
    fn degenerate_triclinic() {
        let params = CellParams::new(1.0, 1.0, 1.0, PI / 3.0, PI / 3.0, 2.0 * PI / 3.0 - 1e-12);
        match general(&params, &Thresholds::default()) {
            Err(Error::DegenerateCell { system, normalizer, .. }) => {
                assert_eq!(system, SystemKind::Triclinic);
                assert_eq!(normalizer, "omega");
            },
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn normalizers() {
        assert_close!(rhombohedral_normalizer(2.0, PI / 2.0) / 4.0, 1.0);
        assert_close!(abs=1e-15, mixed_cosine(PI / 2.0, 0.0, PI / 2.0), 0.0);
        let params = CellParams::new(1.0, 2.0, 3.0, PI / 2.0, PI / 2.0, PI / 2.0);
        assert_close!(omega_squared(&params), 36.0);
    }
}
