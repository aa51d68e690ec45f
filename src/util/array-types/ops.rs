/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Neg, Mul, Div};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use crate::types::*;

// ---------------------------------------------------------------------------
// vector ops

macro_rules! impl_v_ops {
    ($($Vn:ident;)+) => {$(
        // vector + vector
        impl Add<$Vn> for $Vn {
            type Output = $Vn;

            #[inline]
            fn add(self, other: $Vn) -> $Vn
            { $Vn::from_fn(|k| self[k] + other[k]) }
        }
        forward_ref_binop!{ impl Add<$Vn> for $Vn, add -> $Vn }

        // vector - vector
        impl Sub<$Vn> for $Vn {
            type Output = $Vn;

            #[inline]
            fn sub(self, other: $Vn) -> $Vn
            { $Vn::from_fn(|k| self[k] - other[k]) }
        }
        forward_ref_binop!{ impl Sub<$Vn> for $Vn, sub -> $Vn }

        // vector * scalar
        impl Mul<f64> for $Vn {
            type Output = $Vn;

            #[inline]
            fn mul(self, scalar: f64) -> $Vn
            { $Vn::from_fn(|k| self[k] * scalar) }
        }
        forward_ref_binop!{ impl Mul<f64> for $Vn, mul -> $Vn }

        // scalar * vector
        impl Mul<$Vn> for f64 {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, vector: $Vn) -> $Vn
            { vector * self }
        }
        forward_ref_binop!{ impl Mul<$Vn> for f64, mul -> $Vn }

        // vector / scalar
        impl Div<f64> for $Vn {
            type Output = $Vn;

            #[inline]
            fn div(self, scalar: f64) -> $Vn
            { $Vn::from_fn(|k| self[k] / scalar) }
        }
        forward_ref_binop!{ impl Div<f64> for $Vn, div -> $Vn }

        // -vector
        impl Neg for $Vn {
            type Output = $Vn;

            #[inline]
            fn neg(self) -> $Vn
            { $Vn::from_fn(|k| -self[k]) }
        }

        impl<'a> Neg for &'a $Vn {
            type Output = $Vn;

            #[inline(always)]
            fn neg(self) -> $Vn
            { -*self }
        }

        impl AddAssign<$Vn> for $Vn {
            #[inline(always)]
            fn add_assign(&mut self, other: $Vn)
            { *self = *self + other; }
        }

        impl<'b> AddAssign<&'b $Vn> for $Vn {
            #[inline(always)]
            fn add_assign(&mut self, other: &'b $Vn)
            { *self = *self + *other; }
        }

        impl SubAssign<$Vn> for $Vn {
            #[inline(always)]
            fn sub_assign(&mut self, other: $Vn)
            { *self = *self - other; }
        }

        impl<'b> SubAssign<&'b $Vn> for $Vn {
            #[inline(always)]
            fn sub_assign(&mut self, other: &'b $Vn)
            { *self = *self - *other; }
        }

        impl MulAssign<f64> for $Vn {
            #[inline(always)]
            fn mul_assign(&mut self, scalar: f64)
            { *self = *self * scalar; }
        }

        impl DivAssign<f64> for $Vn {
            #[inline(always)]
            fn div_assign(&mut self, scalar: f64)
            { *self = *self / scalar; }
        }
    )+};
}

impl_v_ops! {
    V2;
    V3;
}

// ---------------------------------------------------------------------------
// elementwise matrix ops

macro_rules! impl_m_elementwise_ops {
    ($($Mr:ident<$Vc:ident>;)+) => {$(
        impl Add<$Mr<$Vc>> for $Mr<$Vc> {
            type Output = $Mr<$Vc>;

            #[inline]
            fn add(self, other: $Mr<$Vc>) -> $Mr<$Vc>
            { <$Mr<$Vc>>::from_fn(|r, c| self[r][c] + other[r][c]) }
        }
        forward_ref_binop!{ impl Add<$Mr<$Vc>> for $Mr<$Vc>, add -> $Mr<$Vc> }

        impl Sub<$Mr<$Vc>> for $Mr<$Vc> {
            type Output = $Mr<$Vc>;

            #[inline]
            fn sub(self, other: $Mr<$Vc>) -> $Mr<$Vc>
            { <$Mr<$Vc>>::from_fn(|r, c| self[r][c] - other[r][c]) }
        }
        forward_ref_binop!{ impl Sub<$Mr<$Vc>> for $Mr<$Vc>, sub -> $Mr<$Vc> }

        impl Mul<f64> for $Mr<$Vc> {
            type Output = $Mr<$Vc>;

            #[inline]
            fn mul(self, scalar: f64) -> $Mr<$Vc>
            { self.map(|x| x * scalar) }
        }
        forward_ref_binop!{ impl Mul<f64> for $Mr<$Vc>, mul -> $Mr<$Vc> }

        impl Mul<$Mr<$Vc>> for f64 {
            type Output = $Mr<$Vc>;

            #[inline(always)]
            fn mul(self, matrix: $Mr<$Vc>) -> $Mr<$Vc>
            { matrix * self }
        }
        forward_ref_binop!{ impl Mul<$Mr<$Vc>> for f64, mul -> $Mr<$Vc> }

        impl Div<f64> for $Mr<$Vc> {
            type Output = $Mr<$Vc>;

            #[inline]
            fn div(self, scalar: f64) -> $Mr<$Vc>
            { self.map(|x| x / scalar) }
        }
        forward_ref_binop!{ impl Div<f64> for $Mr<$Vc>, div -> $Mr<$Vc> }

        impl Neg for $Mr<$Vc> {
            type Output = $Mr<$Vc>;

            #[inline]
            fn neg(self) -> $Mr<$Vc>
            { self.map(|x| -x) }
        }
    )+};
}

impl_m_elementwise_ops! {
    M2<V2>;
    M2<V3>;
    M3<V2>;
    M3<V3>;
}

// ---------------------------------------------------------------------------
// matrix-matrix products
//
// (r x k) * (k x c) -> (r x c)

macro_rules! impl_m_m_mul {
    ($($Mr:ident<$Vk:ident> * $Mk:ident<$Vc:ident> [$k:tt];)+) => {$(
        impl Mul<$Mk<$Vc>> for $Mr<$Vk> {
            type Output = $Mr<$Vc>;

            #[inline]
            fn mul(self, other: $Mk<$Vc>) -> $Mr<$Vc> {
                <$Mr<$Vc>>::from_fn(|r, c| {
                    (0..$k).map(|t| self[r][t] * other[t][c]).sum()
                })
            }
        }
        forward_ref_binop!{ impl Mul<$Mk<$Vc>> for $Mr<$Vk>, mul -> $Mr<$Vc> }
    )+};
}

impl_m_m_mul! {
    M3<V3> * M3<V3> [3];
    M2<V2> * M2<V2> [2];
    M2<V3> * M3<V3> [3];
    M2<V3> * M3<V2> [3];
    M3<V2> * M2<V3> [2];
    M3<V3> * M3<V2> [3];
}

// ---------------------------------------------------------------------------
// matrix-vector products

macro_rules! impl_m_v_mul {
    ($($Mr:ident<$Vc:ident> ~ $Vr:ident;)+) => {$(
        // matrix * column vector
        impl Mul<$Vc> for $Mr<$Vc> {
            type Output = $Vr;

            #[inline]
            fn mul(self, vector: $Vc) -> $Vr
            { $Vr::from_fn(|r| self[r].dot(&vector)) }
        }
        forward_ref_binop!{ impl Mul<$Vc> for $Mr<$Vc>, mul -> $Vr }

        // row vector * matrix
        impl Mul<$Mr<$Vc>> for $Vr {
            type Output = $Vc;

            #[inline]
            fn mul(self, matrix: $Mr<$Vc>) -> $Vc {
                $Vc::from_fn(|c| {
                    (0..self.len()).map(|r| self[r] * matrix[r][c]).sum()
                })
            }
        }
        forward_ref_binop!{ impl Mul<$Mr<$Vc>> for $Vr, mul -> $Vc }
    )+};
}

impl_m_v_mul! {
    M3<V3> ~ V3;
    M2<V2> ~ V2;
    M2<V3> ~ V2;
    M3<V2> ~ V3;
}
