/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types, compatible with `V2`/`V3`.

use crate::types::*;

use cellmetric_assert_close::{CheckClose, CheckCloseError, Tolerances};
use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a 2D array (of rows).
///
/// The signature is such that type inference works in the forward
/// direction (deciding the output matrix shape from the input array).
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Implementation detail of `from_array`.
pub trait IntoMatrix {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

// General rectangular.
//
// Each shape is described by its row container and row vector, along with
// the container and vector for the transposed shape.
macro_rules! impl_m_methods {
    ($(
        $Mr:ident<$Vc:ident> [$r:tt x $c:tt] ~ $Mc:ident<$Vr:ident>;
    )+) => {$(
        impl<X> $Mr<$Vc<X>> {
            /// Construct a matrix from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(mut f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { $Mr(std::array::from_fn(|r| $Vc(std::array::from_fn(|c| f(r, c))))) }

            /// Map each scalar element of a matrix.
            #[inline(always)]
            pub fn map<B, F>(self, mut f: F) -> $Mr<$Vc<B>>
            where F: FnMut(X) -> B,
            { $Mr(self.0.map(|row| row.map(&mut f))) }

            /// Cast into a plain `[[T; c]; r]`.
            #[inline(always)]
            pub fn into_array(self) -> [[X; $c]; $r]
            { self.0.map(|row| row.0) }
        }

        impl<X: Copy> $Mr<$Vc<X>> {
            /// Matrix transpose.
            #[inline]
            pub fn t(&self) -> $Mc<$Vr<X>>
            { <$Mc<$Vr<X>>>::from_fn(|r, c| self[c][r]) }
        }

        impl $Mr<$Vc> {
            /// Construct the zero matrix.
            #[inline(always)]
            pub fn zero() -> Self
            { Zero::zero() }

            /// Test that all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool
            { self.iter().all(|row| row.is_finite()) }
        }

        impl Zero for $Mr<$Vc> {
            #[inline(always)]
            fn zero() -> Self
            { $Mr([$Vc::zero(); $r]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|row| row.is_zero()) }
        }

        impl IntoMatrix for [[f64; $c]; $r] {
            type Matrix = $Mr<$Vc>;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mr(self.map($Vc)) }
        }

        impl CheckClose for $Mr<$Vc> {
            type Scalar = f64;

            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
            { self.0.check_close(&other.0, tol) }
        }
    )+};
}

impl_m_methods! {
    M2<V2> [2 x 2] ~ M2<V2>;
    M3<V3> [3 x 3] ~ M3<V3>;
    M2<V3> [2 x 3] ~ M3<V2>;
    M3<V2> [3 x 2] ~ M2<V3>;
}

// Square matrices
macro_rules! impl_square_methods {
    ($($Mn:ident<$Vn:ident> $n:tt;)+) => {$(
        impl $Mn<$Vn> {
            /// Construct the identity matrix.
            #[inline(always)]
            pub fn eye() -> Self
            { One::one() }

            /// Sum of the diagonal.
            #[inline]
            pub fn trace(&self) -> f64
            { (0..$n).map(|k| self[k][k]).sum() }

            /// The diagonal, as a vector.
            #[inline]
            pub fn diagonal(&self) -> $Vn
            { $Vn::from_fn(|k| self[k][k]) }

            /// Test whether the matrix equals its own transpose exactly.
            #[inline]
            pub fn is_symmetric(&self) -> bool
            { self == &self.t() }
        }

        impl One for $Mn<$Vn> {
            #[inline(always)]
            fn one() -> Self
            { Self::from_fn(|r, c| if r == c { 1.0 } else { 0.0 }) }
        }
    )+};
}

impl_square_methods! {
    M2<V2> 2;
    M3<V3> 3;
}

impl M22 {
    /// Matrix determinant.
    #[inline]
    pub fn det(&self) -> f64
    { self[0][0] * self[1][1] - self[0][1] * self[1][0] }
}

impl M33 {
    /// Matrix determinant.
    #[inline]
    pub fn det(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

// -------------------------- END PUBLIC API ---------------------------------
