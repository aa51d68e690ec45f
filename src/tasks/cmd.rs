//! The work behind each subcommand.
//!
//! Reports are built as strings so that the entry points only have to
//! print them.

use crate::FailResult;

use cellmetric_array_types::{V3, M33};
use cellmetric_config::{AngleUnit, Output};
use cellmetric_lattice::{geometry, Crystal, LatticeSystem, Metric, SystemKind};
use itertools::Itertools;
use std::fmt::{self, Write};

/// Build a system from the values typed on the command line, where angles
/// are in degrees.
pub fn system_from_cli_values(kind: SystemKind, values: &[f64]) -> FailResult<LatticeSystem> {
    let names = kind.param_names();
    if values.len() != names.len() {
        bail!(
            "{} takes {} parameters ({}), but {} were given",
            kind, names.len(), names.join(" "), values.len(),
        );
    }

    let radians: Vec<f64> = {
        names.iter().zip(values)
            .map(|(&name, &value)| match is_angle(name) {
                true => value.to_radians(),
                false => value,
            })
            .collect()
    };
    match LatticeSystem::from_values(kind, &radians) {
        Some(system) => Ok(system),
        None => bail!("wrong number of parameters for {}", kind),
    }
}

fn is_angle(name: &str) -> bool {
    match name {
        "alpha" | "beta" | "gamma" => true,
        _ => false,
    }
}

/// Expanded parameters, volume, both tensors, and their product.
pub fn tensor_report(crystal: &Crystal, output: &Output) -> FailResult<String> {
    let prec = output.precision;
    let unit = output.angle_unit;
    let params = crystal.params();
    let mut s = String::new();

    writeln!(s, "system: {} ({})", crystal.name(), crystal.symbol())?;
    writeln!(
        s, "a = {:.*}  b = {:.*}  c = {:.*}",
        prec, params.a, prec, params.b, prec, params.c,
    )?;
    writeln!(
        s, "alpha = {:.*}  beta = {:.*}  gamma = {:.*}  ({})",
        prec, unit.from_radians(params.alpha),
        prec, unit.from_radians(params.beta),
        prec, unit.from_radians(params.gamma),
        unit.suffix(),
    )?;
    writeln!(s, "volume: {:.*}", prec, crystal.volume())?;

    writeln!(s, "direct metric tensor:")?;
    write_matrix(&mut s, crystal.direct_tensor().matrix(), prec)?;
    writeln!(s, "reciprocal metric tensor:")?;
    write_matrix(&mut s, crystal.reciprocal_tensor().matrix(), prec)?;
    writeln!(s, "direct * reciprocal:")?;
    write_matrix(&mut s, &(crystal.direct_tensor() * crystal.reciprocal_tensor()), prec)?;
    Ok(s)
}

/// Length of `p` and, if `q` is given, everything relating `p` and `q`.
///
/// With `reciprocal`, the vectors are in the reciprocal basis.
pub fn geometry_report(
    crystal: &Crystal,
    output: &Output,
    p: &V3,
    q: Option<&V3>,
    reciprocal: bool,
) -> FailResult<String> {
    match reciprocal {
        true => {
            trace!("measuring in reciprocal space");
            geometry_report_in(&crystal.reciprocal(), output, p, q)
        },
        false => geometry_report_in(crystal, output, p, q),
    }
}

fn geometry_report_in<M: Metric>(metric: &M, output: &Output, p: &V3, q: Option<&V3>) -> FailResult<String> {
    let prec = output.precision;
    let mut s = String::new();
    writeln!(s, "|p| = {:.*}", prec, geometry::length(metric, p)?)?;

    if let Some(q) = q {
        let angle = |rad: f64| format_angle(output.angle_unit, prec, rad);

        writeln!(s, "|q| = {:.*}", prec, geometry::length(metric, q)?)?;
        writeln!(s, "p . q = {:.*}", prec, geometry::dot_product(metric, p, q))?;
        writeln!(s, "distance(p, q) = {:.*}", prec, geometry::distance_points(metric, p, q)?)?;
        writeln!(s, "angle(p, q) = {}", angle(geometry::angle_rad(metric, p, q)?))?;
        writeln!(s, "angle(p, q) from Gram matrix = {}", angle(geometry::angle2_rad(metric, p, q)?))?;
    }
    Ok(s)
}

fn format_angle(unit: AngleUnit, prec: usize, rad: f64) -> String
{ format!("{:.*} {}", prec, unit.from_radians(rad), unit.suffix()) }

fn write_matrix(s: &mut String, m: &M33, prec: usize) -> fmt::Result {
    let width = prec + 6;
    let negligible = 0.5 * 10f64.powi(-(prec as i32));
    for row in m.iter() {
        let line = row.iter()
            // no "-0.000000"
            .map(|&x| if x.abs() < negligible { 0.0 } else { x })
            .map(|x| format!("{:>w$.p$}", x, w = width, p = prec))
            .join(" ");
        writeln!(s, "  {}", line)?;
    }
    Ok(())
}

/// Warn when the reciprocal tensor of a crystal is not quite the inverse
/// of the direct one.
pub fn check_inverse(crystal: &Crystal) {
    let product = crystal.direct_tensor() * crystal.reciprocal_tensor();
    let eye = M33::eye();
    let error = iproduct!(0..3, 0..3)
        .map(|(i, j)| (product[i][j] - eye[i][j]).abs())
        .fold(0.0, f64::max);
    if error > 1e-9 {
        warn!("direct * reciprocal differs from the identity by up to {:e}", error);
    }
}
