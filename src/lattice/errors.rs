use crate::cell::system::SystemKind;
use cellmetric_array_types::V3;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Failures of the metric engine.
///
/// Every error is detected by the operation that returns it; there is no
/// partial result.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum Error {
    /// A cell parameter (or combination of angles) does not describe a
    /// three-dimensional unit cell.
    #[fail(display = "invalid cell parameter `{}` = {}: {}", name, value, reason)]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The normalizer of a reciprocal tensor formula is too close to zero.
    #[fail(display = "degenerate {} cell: normalizer `{}` = {:e} is too close to zero", system, normalizer, value)]
    DegenerateCell {
        system: SystemKind,
        normalizer: &'static str,
        value: f64,
    },

    #[fail(display = "the angle to the zero-length vector {:?} is undefined", vector)]
    UndefinedAngle {
        vector: V3,
    },

    #[fail(display = "vector {:?} has a negative squared length ({:e})", vector, sqnorm)]
    NegativeNorm {
        vector: V3,
        sqnorm: f64,
    },
}

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
#[fail(display = "unknown lattice system: {:?}", _0)]
pub struct UnknownSystemError(pub String);

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self
    { Error::InvalidParameter { name, value, reason } }
}
