//! Metric tensors of crystal lattices.
//!
//! A [`Crystal`] is built from one of the seven [`LatticeSystem`]s, which
//! carries only the independent cell parameters of that system.  The
//! crystal validates the expanded [`CellParams`] up front and then holds
//! both its direct and reciprocal [`MetricTensor`]s, each computed by the
//! closed-form rule of its lattice system.
//!
//! Lengths and angles between lattice vectors (given in fractional
//! coordinates) are computed by the functions in [`geometry`], which work
//! in either direct or reciprocal space through the [`Metric`] trait.
//!
//! [`Crystal`]: struct.Crystal.html
//! [`LatticeSystem`]: enum.LatticeSystem.html
//! [`CellParams`]: struct.CellParams.html
//! [`MetricTensor`]: struct.MetricTensor.html
//! [`geometry`]: geometry/index.html
//! [`Metric`]: geometry/trait.Metric.html

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate itertools;
#[macro_use] extern crate serde_derive;
#[cfg(test)] #[macro_use] extern crate cellmetric_assert_close;
#[cfg(test)] extern crate rand;

mod errors;
mod thresholds;
mod cell;
pub mod tensor;
pub mod geometry;

//---------------------------
// public reexports; API

pub use crate::errors::{Error, Result, UnknownSystemError};
pub use crate::thresholds::Thresholds;
pub use crate::cell::params::CellParams;
pub use crate::cell::system::{LatticeSystem, SystemKind};
pub use crate::cell::crystal::{Crystal, Reciprocal};
pub use crate::tensor::MetricTensor;
pub use crate::geometry::Metric;

pub use cellmetric_array_types::V3;
