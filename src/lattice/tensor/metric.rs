use cellmetric_array_types::{V3, M3, M33};
use cellmetric_assert_close::{CheckClose, CheckCloseError, Tolerances};

use std::ops::Mul;

/// A symmetric 3x3 matrix of inner products of basis vectors.
///
/// For the direct tensor, entry `(i, j)` is the inner product of cell
/// edges `i` and `j`; the reciprocal tensor is its inverse.  Vectors
/// are expressed in fractional coordinates of the matching basis.
///
/// Symmetry holds by construction: the only way to build one is from a
/// diagonal and the three upper off-diagonal entries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MetricTensor(M33);

impl MetricTensor {
    /// Build from the diagonal `[G00, G11, G22]` and the off-diagonal
    /// entries `[G01, G02, G12]`.
    pub fn symmetric(diag: [f64; 3], [g01, g02, g12]: [f64; 3]) -> Self {
        let [g00, g11, g22] = diag;
        MetricTensor(M3([
            V3([g00, g01, g02]),
            V3([g01, g11, g12]),
            V3([g02, g12, g22]),
        ]))
    }

    /// Build from a diagonal alone.
    pub fn diagonal_only(diag: [f64; 3]) -> Self
    { Self::symmetric(diag, [0.0; 3]) }

    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.0 }

    #[inline]
    pub fn into_matrix(self) -> M33
    { self.0 }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// If either index is not less than 3.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64
    { self.0[i][j] }

    /// `[G00, G11, G22]`, the squared lengths of the basis vectors.
    #[inline]
    pub fn diagonal(&self) -> V3
    { self.0.diagonal() }

    /// `p · G · q`
    ///
    /// Each off-diagonal entry is applied to the symmetrized product
    /// `p_i q_j + p_j q_i`, so swapping `p` and `q` gives a bitwise
    /// identical result.
    pub fn bilinear(&self, p: &V3, q: &V3) -> f64 {
        let g = &self.0;
        let (p, q) = (&p.0, &q.0);
        let cross = |i: usize, j: usize| p[i] * q[j] + p[j] * q[i];

        g[0][0] * p[0] * q[0]
            + g[1][1] * p[1] * q[1]
            + g[2][2] * p[2] * q[2]
            + g[0][1] * cross(0, 1)
            + g[0][2] * cross(0, 2)
            + g[1][2] * cross(1, 2)
    }

    /// The determinant; for a direct tensor this is the squared cell volume.
    #[inline]
    pub fn det(&self) -> f64
    { self.0.det() }
}

impl From<MetricTensor> for M33 {
    fn from(tensor: MetricTensor) -> M33
    { tensor.0 }
}

/// Matrix product; the product of a direct tensor with its reciprocal is the identity.
impl<'a, 'b> Mul<&'b MetricTensor> for &'a MetricTensor {
    type Output = M33;

    fn mul(self, other: &'b MetricTensor) -> M33
    { &self.0 * &other.0 }
}

impl Mul<MetricTensor> for MetricTensor {
    type Output = M33;

    fn mul(self, other: MetricTensor) -> M33
    { &self * &other }
}

impl CheckClose for MetricTensor {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { self.0.check_close(&other.0, tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use cellmetric_array_types::mat;

    #[test]
    fn layout() {
        let g = MetricTensor::symmetric([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        assert_eq!(g.into_matrix(), mat::from_array([
            [1.0, 4.0, 5.0],
            [4.0, 2.0, 6.0],
            [5.0, 6.0, 3.0],
        ]));
        assert!(g.matrix().is_symmetric());
        assert_eq!(g.get(2, 1), 6.0);
        assert_eq!(g.diagonal(), V3([1.0, 2.0, 3.0]));
    }

    #[test]
    fn bilinear() {
        let g = MetricTensor::diagonal_only([0.25, 0.25, 1.0]);
        let d = V3([0.0, -0.5, 0.5]);
        assert_close!(g.bilinear(&d, &d), 5.0 / 16.0);
        assert_close!(g.bilinear(&V3([1.0, 2.0, 0.0]), &V3([3.0, 1.0, 1.0])), 1.25);
        assert_close!(g.det(), 1.0 / 16.0);
    }

    #[test]
    fn bilinear_is_exactly_symmetric() {
        // triclinic cell 0.41/0.52/0.63 at 80/95/103 degrees
        let (a, b, c) = (0.41, 0.52, 0.63);
        let (ca, cb, cg) = (80f64.to_radians().cos(), 95f64.to_radians().cos(), 103f64.to_radians().cos());
        let g = MetricTensor::symmetric([a * a, b * b, c * c], [a * b * cg, a * c * cb, b * c * ca]);

        let p = V3([-1.629, -0.926, -0.223]);
        let q = V3([0.48, 1.183, 1.886]);
        assert_eq!(g.bilinear(&p, &q), g.bilinear(&q, &p));
        assert_close!(g.bilinear(&p, &q), p.dot(&(g.matrix() * &q)));

        // a fixed walk over many pairs
        let mut x = 0.0f64;
        let mut next = || { x = (x + 0.7548776662466927) % 1.0; 4.0 * x - 2.0 };
        for _ in 0..1000 {
            let p = V3([next(), next(), next()]);
            let q = V3([next(), next(), next()]);
            assert_eq!(g.bilinear(&p, &q), g.bilinear(&q, &p), "{:?} {:?}", p, q);
        }
    }

    #[test]
    fn product() {
        let g = MetricTensor::diagonal_only([0.25, 0.25, 1.0]);
        let inv = MetricTensor::diagonal_only([4.0, 4.0, 1.0]);
        assert_eq!(&g * &inv, M33::eye());
        assert_eq!(inv * g, M33::eye());
    }
}
