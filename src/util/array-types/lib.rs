/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vectors and matrices for 3x3 metric tensor work.
//!
//! This library uses a row-based formalism; matrices are containers of
//! row-vectors, so `V3 * M33` treats the vector as a row and `M33 * V3`
//! treats it as a column.
//!
//! Only `f64` arithmetic is provided. The types are generic over the
//! element type purely so that they can hold other data (e.g. integer
//! indices) without conversion.

#[macro_use]
extern crate cellmetric_assert_close;

#[macro_use]
mod macros;
mod types;
mod ops;
mod methods_v;
mod methods_m;

pub use crate::types::*;
pub use crate::methods_v::dot;

/// Functions for constructing matrices.
pub mod mat {
    pub use crate::methods_m::{from_array, IntoMatrix};

    use crate::types::{M22, M33};

    /// The 3x3 identity.
    #[inline(always)]
    pub fn eye() -> M33 { M33::eye() }

    /// The 2x2 identity.
    #[inline(always)]
    pub fn eye2() -> M22 { M22::eye() }
}
