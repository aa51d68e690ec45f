//! Metric tensors and the closed-form rules that produce them.
//!
//! Each lattice system has one rule in [`direct`] and one in [`reciprocal`].
//! The triclinic rules are fully general and double as a reference for the
//! others.
//!
//! [`direct`]: direct/index.html
//! [`reciprocal`]: reciprocal/index.html

mod metric;
pub mod direct;
pub mod reciprocal;

pub use self::metric::MetricTensor;
