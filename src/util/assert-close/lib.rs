/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate comparison of floating point data.
//!
//! ```
//! #[macro_use] extern crate cellmetric_assert_close;
//! # fn main() {
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-8, 1e-12, 0.0);
//! assert_close!(rel=1e-3, abs=1e-8, [1.0, 2.0], [1.0005, 2.0]);
//! # }
//! ```

#[macro_use]
extern crate failure;

use std::fmt;

/// Relative tolerance used when none is given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{
            @parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]
        }
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut tol = $crate::Tolerances { abs: 0.0, rel: 0.0 };
            $(
                $crate::assert_close_impl!{@stmt::assign tol $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
                panic!(
                    "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                    format!($($fmt)*), tol.rel, tol.abs, a, b, e,
                );
            }
        }
    };
    (@stmt::assign $tol:ident [@abs $value:expr]) => { $tol.abs = $value; };
    (@stmt::assign $tol:ident [@rel $value:expr]) => { $tol.rel = $value; };
}

/// Test two scalars for approximate equality.
///
/// Semantics follow Python's `math.isclose`: the values are close if
/// their difference is within `abs`, or within `rel` times the larger
/// magnitude. Infinities are only close to themselves, and NaN is close
/// to nothing.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T,
}

impl Tolerances {
    /// Purely relative tolerance.
    pub fn rel(rel: f64) -> Self { Tolerances { abs: 0.0, rel } }

    /// Purely absolute tolerance.
    pub fn abs(abs: f64) -> Self { Tolerances { abs, rel: 0.0 } }
}

/// `rel = DEFAULT_NONZERO_TOL`, `abs = 0`.
impl Default for Tolerances {
    fn default() -> Self { Tolerances::rel(DEFAULT_NONZERO_TOL) }
}

#[derive(Debug, Fail)]
pub struct CheckCloseError<T: fmt::Debug + Send + Sync + 'static = f64> {
    pub values: (T, T),
    pub tol: Tolerances<T>,
}

impl<T: fmt::Debug + Send + Sync + 'static> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (ref left, ref right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: fmt::Debug + Send + Sync + 'static;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>> {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<A, B> CheckClose for (A, B)
where
    A: CheckClose,
    B: CheckClose<Scalar = A::Scalar>,
{
    type Scalar = A::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>> {
        self.0.check_close(&other.0, tol)?;
        self.1.check_close(&other.1, tol)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
        assert_close!(1.0, 1.0, "{} {}", "with", "message");
    }

    #[test]
    fn containers() {
        assert_close!([1.0, 2.0, 3.0], [1.0, 2.0, 3.0 * (1.0 + 1e-12)]);
        assert_close!(vec![[0.25, 0.0], [0.0, 1.0]], vec![[0.25, 0.0], [0.0, 1.0]]);
        assert_close!((0.5, [1.0]), (0.5, [1.0]));
    }

    #[test]
    fn python_semantics() {
        let tol = Tolerances::default();
        assert!(is_close(::std::f64::INFINITY, ::std::f64::INFINITY, tol));
        assert!(!is_close(::std::f64::INFINITY, -::std::f64::INFINITY, tol));
        assert!(!is_close(::std::f64::NAN, ::std::f64::NAN, tol));
        // a purely relative tolerance never accepts a nonzero value against zero
        assert!(!is_close(1e-300, 0.0, tol));
        assert!(is_close(1e-300, 0.0, Tolerances::abs(1e-200)));
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
