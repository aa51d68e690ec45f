/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// A 2-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct V2<X=f64>(pub [X; 2]);

/// A 3-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct V3<X=f64>(pub [X; 3]);

// ---------------------------------------------------------------------------

/// A linear algebra dense matrix with 2 rows and fixed width.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct M2<V>(pub [V; 2]);

/// A linear algebra dense matrix with 3 rows and fixed width.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct M3<V>(pub [V; 3]);

/// A square dense 2x2 matrix.
pub type M22<X=f64> = M2<V2<X>>;
/// A square dense 3x3 matrix.
pub type M33<X=f64> = M3<V3<X>>;
/// Two row vectors of length 3, stacked.
pub type M23<X=f64> = M2<V3<X>>;
/// Three row vectors of length 2, stacked. (the transpose of an `M23`)
pub type M32<X=f64> = M3<V2<X>>;

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

macro_rules! impl_array_like {
    ($($Cn:ident $T:ident $n:tt;)+) => {$(
        impl<$T> Deref for $Cn<$T> {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<$T> DerefMut for $Cn<$T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        impl<'a, $T> IntoIterator for &'a $Cn<$T> {
            type Item = &'a $T;
            type IntoIter = std::slice::Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        // Debug output without the surrounding "V3(...)", so that it reads
        // as a plain nested list (valid JSON and Python).
        impl<$T: fmt::Debug> fmt::Debug for $Cn<$T> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    )+};
}

impl_array_like! {
    V2 X 2;
    V3 X 3;
    M2 V 2;
    M3 V 3;
}

impl<X> From<[X; 3]> for V3<X> {
    #[inline(always)]
    fn from(arr: [X; 3]) -> Self { V3(arr) }
}

impl<X> From<[X; 2]> for V2<X> {
    #[inline(always)]
    fn from(arr: [X; 2]) -> Self { V2(arr) }
}
