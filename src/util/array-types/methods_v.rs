/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::types::*;

use cellmetric_assert_close::{CheckClose, CheckCloseError, Tolerances};
use num_traits::Zero;

/// Inner product of two vectors.
///
/// This is the plain Euclidean inner product of the components; it knows
/// nothing about the basis they are expressed in.
#[inline(always)]
pub fn dot<V: Dot>(a: &V, b: &V) -> f64
{ a.dot(b) }

/// Implementation detail of `dot`.
pub trait Dot {
    fn dot(&self, other: &Self) -> f64;
}

macro_rules! impl_v_methods {
    ($($Vn:ident $n:tt;)+) => {$(
        impl<X> $Vn<X> {
            /// Construct a fixed-size vector from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { $Vn(std::array::from_fn(f)) }

            /// Map each element of the vector.
            #[inline(always)]
            pub fn map<B, F>(self, f: F) -> $Vn<B>
            where F: FnMut(X) -> B,
            { $Vn(self.0.map(f)) }

            /// Cast into a plain array.
            #[inline(always)]
            pub fn into_array(self) -> [X; $n]
            { self.0 }
        }

        impl $Vn {
            /// Get a zero vector.
            #[inline(always)]
            pub fn zero() -> Self
            { Zero::zero() }

            /// Get the inner product of two vectors.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> f64
            { Dot::dot(self, other) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqnorm(&self) -> f64
            { self.dot(self) }

            /// Get the vector's magnitude.
            #[inline(always)]
            pub fn norm(&self) -> f64
            { self.sqnorm().sqrt() }

            /// Test that all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool
            { self.iter().all(|x| x.is_finite()) }
        }

        impl Dot for $Vn {
            #[inline]
            fn dot(&self, other: &Self) -> f64
            { (0..$n).map(|k| self[k] * other[k]).sum() }
        }

        impl Zero for $Vn {
            #[inline(always)]
            fn zero() -> Self
            { $Vn([0.0; $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|&x| x == 0.0) }
        }

        impl CheckClose for $Vn {
            type Scalar = f64;

            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
            { self.0.check_close(&other.0, tol) }
        }
    )+};
}

impl_v_methods! {
    V2 2;
    V3 3;
}
