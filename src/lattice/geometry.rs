//! Lengths and angles of lattice vectors.
//!
//! Vectors are in fractional coordinates of whichever basis the [`Metric`]
//! describes: the cell edges for a `Crystal`, or the reciprocal basis for
//! `Crystal::reciprocal()`.
//!
//! [`Metric`]: trait.Metric.html

use crate::errors::{Error, Result};
use crate::tensor::MetricTensor;
use crate::thresholds::Thresholds;

use cellmetric_array_types::{V3, M2, M22, M23};

/// Anything that supplies a metric tensor for vector geometry.
pub trait Metric {
    fn metric_tensor(&self) -> &MetricTensor;

    fn thresholds(&self) -> &Thresholds;
}

impl<'a, M: Metric + ?Sized> Metric for &'a M {
    fn metric_tensor(&self) -> &MetricTensor
    { (**self).metric_tensor() }

    fn thresholds(&self) -> &Thresholds
    { (**self).thresholds() }
}

/// `p · G · q`, in squared length units.
pub fn dot_product<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3) -> f64
{ metric.metric_tensor().bilinear(p, q) }

/// `sqrt(p · G · p)`
pub fn length<M: Metric + ?Sized>(metric: &M, p: &V3) -> Result<f64>
{ distance(metric, p, p) }

/// `sqrt(p · G · q)`.
///
/// This takes a difference vector twice, as in `distance(metric, d, d)`;
/// see [`distance_points`] for the distance between two points.
///
/// [`distance_points`]: fn.distance_points.html
pub fn distance<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3) -> Result<f64> {
    let sq = dot_product(metric, p, q);
    checked_sqrt(metric, p, q, sq)
}

/// Distance between the points `p` and `q`.
pub fn distance_points<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3) -> Result<f64> {
    let d = p - q;
    distance(metric, &d, &d)
}

/// The angle between `p` and `q`, in radians, from the ratio
/// `p·G·q / (|p| |q|)`.
pub fn angle_rad<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3) -> Result<f64> {
    let len_p = nonzero_length(metric, p, length(metric, p)?)?;
    let len_q = nonzero_length(metric, q, length(metric, q)?)?;
    let cos = dot_product(metric, p, q) / (len_p * len_q);
    Ok(clamp_cosine(cos).acos())
}

/// The angle between `p` and `q`, in radians, read off the Gram matrix of
/// `p` and `q` stacked as rows.
///
/// Agrees with [`angle_rad`] to within rounding.
///
/// [`angle_rad`]: fn.angle_rad.html
pub fn angle2_rad<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3) -> Result<f64> {
    let g = metric.metric_tensor().matrix();
    let stacked: M23 = M2([*p, *q]);
    let gram: M22 = &stacked * &(g * &stacked.t());

    let len_p = nonzero_length(metric, p, checked_sqrt(metric, p, p, gram[0][0])?)?;
    let len_q = nonzero_length(metric, q, checked_sqrt(metric, q, q, gram[1][1])?)?;
    let cos = gram[0][1] / (len_p * len_q);
    Ok(clamp_cosine(cos).acos())
}

/// `angle_rad`, in degrees.
pub fn angle_deg<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3) -> Result<f64>
{ angle_rad(metric, p, q).map(f64::to_degrees) }

//------------------------------------------------------------------

// Sum of the magnitudes of the terms of `p · G · q`.
fn term_magnitude(g: &MetricTensor, p: &V3, q: &V3) -> f64 {
    iproduct!(0..3, 0..3)
        .map(|(i, j)| (g.get(i, j) * p[i] * q[j]).abs())
        .sum()
}

fn checked_sqrt<M: Metric + ?Sized>(metric: &M, p: &V3, q: &V3, sq: f64) -> Result<f64> {
    if sq >= 0.0 {
        return Ok(sq.sqrt());
    }
    let scale = term_magnitude(metric.metric_tensor(), p, q);
    if sq < -metric.thresholds().negative_norm * scale || sq.is_nan() {
        return Err(Error::NegativeNorm { vector: *p, sqnorm: sq });
    }
    Ok(0.0)
}

fn nonzero_length<M: Metric + ?Sized>(metric: &M, p: &V3, len: f64) -> Result<f64> {
    match len > metric.thresholds().zero_norm {
        true => Ok(len),
        false => Err(Error::UndefinedAngle { vector: *p }),
    }
}

fn clamp_cosine(cos: f64) -> f64 {
    if cos.abs() > 1.0 + 1e-9 {
        warn!("cosine {} is well outside [-1, 1]; clamping", cos);
    }
    cos.max(-1.0).min(1.0)
}
