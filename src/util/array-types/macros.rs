/* ************************************************************************ **
** This file is part of cellmetric, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Generates impls of a binary operator for the three reference forms,
// given an impl for two owned `Copy` operands.
macro_rules! forward_ref_binop {
    (impl $Op:ident<$Rhs:ty> for $Lhs:ty, $method:ident -> $Out:ty) => {
        impl<'b> $Op<&'b $Rhs> for $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $method(self, other: &'b $Rhs) -> $Out
            { $Op::$method(self, *other) }
        }

        impl<'a> $Op<$Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $method(self, other: $Rhs) -> $Out
            { $Op::$method(*self, other) }
        }

        impl<'a, 'b> $Op<&'b $Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $method(self, other: &'b $Rhs) -> $Out
            { $Op::$method(*self, *other) }
        }
    };
}
