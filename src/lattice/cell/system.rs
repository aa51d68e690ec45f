use crate::cell::params::CellParams;
use crate::errors::{Result, UnknownSystemError};
use crate::tensor::{direct, reciprocal, MetricTensor};
use crate::thresholds::Thresholds;

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

const RIGHT: f64 = PI / 2.0;
const HEXAGONAL_GAMMA: f64 = 2.0 * PI / 3.0;

/// One of the seven lattice systems, without parameters.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SystemKind {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Hexagonal,
    Rhombohedral,
    Cubic,
}

impl SystemKind {
    pub const ALL: [SystemKind; 7] = [
        SystemKind::Triclinic,
        SystemKind::Monoclinic,
        SystemKind::Orthorhombic,
        SystemKind::Tetragonal,
        SystemKind::Hexagonal,
        SystemKind::Rhombohedral,
        SystemKind::Cubic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SystemKind::Triclinic => "triclinic",
            SystemKind::Monoclinic => "monoclinic",
            SystemKind::Orthorhombic => "orthorhombic",
            SystemKind::Tetragonal => "tetragonal",
            SystemKind::Hexagonal => "hexagonal",
            SystemKind::Rhombohedral => "rhombohedral",
            SystemKind::Cubic => "cubic",
        }
    }

    /// Crystal family letter of the Pearson symbol.
    ///
    /// Rhombohedral lattices belong to the hexagonal family.
    pub fn symbol(self) -> &'static str {
        match self {
            SystemKind::Triclinic => "a",
            SystemKind::Monoclinic => "m",
            SystemKind::Orthorhombic => "o",
            SystemKind::Tetragonal => "t",
            SystemKind::Hexagonal => "h",
            SystemKind::Rhombohedral => "h",
            SystemKind::Cubic => "c",
        }
    }

    /// Names of the independent parameters, in constructor order.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            SystemKind::Triclinic => &["a", "b", "c", "alpha", "beta", "gamma"],
            SystemKind::Monoclinic => &["a", "b", "c", "beta"],
            SystemKind::Orthorhombic => &["a", "b", "c"],
            SystemKind::Tetragonal => &["a", "c"],
            SystemKind::Hexagonal => &["a", "c"],
            SystemKind::Rhombohedral => &["a", "alpha"],
            SystemKind::Cubic => &["a"],
        }
    }

    /// Number of independent parameters.
    pub fn arity(self) -> usize
    { self.param_names().len() }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { f.write_str(self.name()) }
}

impl FromStr for SystemKind {
    type Err = UnknownSystemError;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        SystemKind::ALL.iter().cloned()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| UnknownSystemError(s.to_string()))
    }
}

/// A unit cell, described by the independent parameters of its lattice system.
///
/// Lengths are in a consistent unit, angles in radians.
/// Each variant expands to the full six parameters through [`params`].
///
/// [`params`]: #method.params
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[serde(tag = "system", rename_all = "kebab-case")]
pub enum LatticeSystem {
    /// All six parameters free.
    Triclinic { a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64 },
    /// `alpha = gamma = 90°` (unique axis b).
    Monoclinic { a: f64, b: f64, c: f64, beta: f64 },
    /// All angles 90°.
    Orthorhombic { a: f64, b: f64, c: f64 },
    /// All angles 90°, `a = b`.
    Tetragonal { a: f64, c: f64 },
    /// `alpha = beta = 90°`, `gamma = 120°`, `a = b`.
    Hexagonal { a: f64, c: f64 },
    /// `a = b = c`, `alpha = beta = gamma`.
    Rhombohedral { a: f64, alpha: f64 },
    /// All angles 90°, `a = b = c`.
    Cubic { a: f64 },
}

/// Helper constructors
impl LatticeSystem {
    pub fn triclinic(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self
    { LatticeSystem::Triclinic { a, b, c, alpha, beta, gamma } }

    pub fn monoclinic(a: f64, b: f64, c: f64, beta: f64) -> Self
    { LatticeSystem::Monoclinic { a, b, c, beta } }

    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self
    { LatticeSystem::Orthorhombic { a, b, c } }

    pub fn tetragonal(a: f64, c: f64) -> Self
    { LatticeSystem::Tetragonal { a, c } }

    pub fn hexagonal(a: f64, c: f64) -> Self
    { LatticeSystem::Hexagonal { a, c } }

    pub fn rhombohedral(a: f64, alpha: f64) -> Self
    { LatticeSystem::Rhombohedral { a, alpha } }

    pub fn cubic(a: f64) -> Self
    { LatticeSystem::Cubic { a } }

    /// Build a system from its independent parameters, in the order
    /// given by `SystemKind::param_names`.
    ///
    /// Returns `None` if the number of values does not match the system.
    pub fn from_values(kind: SystemKind, values: &[f64]) -> Option<Self> {
        if values.len() != kind.arity() {
            return None;
        }
        let v = values;
        Some(match kind {
            SystemKind::Triclinic => Self::triclinic(v[0], v[1], v[2], v[3], v[4], v[5]),
            SystemKind::Monoclinic => Self::monoclinic(v[0], v[1], v[2], v[3]),
            SystemKind::Orthorhombic => Self::orthorhombic(v[0], v[1], v[2]),
            SystemKind::Tetragonal => Self::tetragonal(v[0], v[1]),
            SystemKind::Hexagonal => Self::hexagonal(v[0], v[1]),
            SystemKind::Rhombohedral => Self::rhombohedral(v[0], v[1]),
            SystemKind::Cubic => Self::cubic(v[0]),
        })
    }
}

impl LatticeSystem {
    pub fn kind(&self) -> SystemKind {
        match *self {
            LatticeSystem::Triclinic { .. } => SystemKind::Triclinic,
            LatticeSystem::Monoclinic { .. } => SystemKind::Monoclinic,
            LatticeSystem::Orthorhombic { .. } => SystemKind::Orthorhombic,
            LatticeSystem::Tetragonal { .. } => SystemKind::Tetragonal,
            LatticeSystem::Hexagonal { .. } => SystemKind::Hexagonal,
            LatticeSystem::Rhombohedral { .. } => SystemKind::Rhombohedral,
            LatticeSystem::Cubic { .. } => SystemKind::Cubic,
        }
    }

    pub fn name(&self) -> &'static str
    { self.kind().name() }

    pub fn symbol(&self) -> &'static str
    { self.kind().symbol() }

    /// The independent parameters, in the order given by `SystemKind::param_names`.
    pub fn values(&self) -> Vec<f64> {
        match *self {
            LatticeSystem::Triclinic { a, b, c, alpha, beta, gamma } => vec![a, b, c, alpha, beta, gamma],
            LatticeSystem::Monoclinic { a, b, c, beta } => vec![a, b, c, beta],
            LatticeSystem::Orthorhombic { a, b, c } => vec![a, b, c],
            LatticeSystem::Tetragonal { a, c } => vec![a, c],
            LatticeSystem::Hexagonal { a, c } => vec![a, c],
            LatticeSystem::Rhombohedral { a, alpha } => vec![a, alpha],
            LatticeSystem::Cubic { a } => vec![a],
        }
    }

    /// Expand to the full six cell parameters.
    pub fn params(&self) -> CellParams {
        match *self {
            LatticeSystem::Triclinic { a, b, c, alpha, beta, gamma } => CellParams::new(a, b, c, alpha, beta, gamma),
            LatticeSystem::Monoclinic { a, b, c, beta } => CellParams::new(a, b, c, RIGHT, beta, RIGHT),
            LatticeSystem::Orthorhombic { a, b, c } => CellParams::new(a, b, c, RIGHT, RIGHT, RIGHT),
            LatticeSystem::Tetragonal { a, c } => CellParams::new(a, a, c, RIGHT, RIGHT, RIGHT),
            LatticeSystem::Hexagonal { a, c } => CellParams::new(a, a, c, RIGHT, RIGHT, HEXAGONAL_GAMMA),
            LatticeSystem::Rhombohedral { a, alpha } => CellParams::new(a, a, a, alpha, alpha, alpha),
            LatticeSystem::Cubic { a } => CellParams::new(a, a, a, RIGHT, RIGHT, RIGHT),
        }
    }

    /// The direct metric tensor, by the closed form of this system.
    pub fn direct_tensor(&self) -> MetricTensor {
        match *self {
            LatticeSystem::Triclinic { .. } => direct::general(&self.params()),
            LatticeSystem::Monoclinic { a, b, c, beta } => direct::monoclinic(a, b, c, beta),
            LatticeSystem::Orthorhombic { a, b, c } => direct::orthorhombic(a, b, c),
            LatticeSystem::Tetragonal { a, c } => direct::tetragonal(a, c),
            LatticeSystem::Hexagonal { a, c } => direct::hexagonal(a, c),
            LatticeSystem::Rhombohedral { a, alpha } => direct::rhombohedral(a, alpha),
            LatticeSystem::Cubic { a } => direct::cubic(a),
        }
    }

    /// The reciprocal metric tensor, by the closed form of this system.
    ///
    /// The expanded parameters are validated first, so this fails with
    /// `InvalidParameter` before any entry can become infinite or NaN.
    /// A rhombohedral or triclinic cell that is valid but whose normalizer
    /// is too small under the default thresholds fails with `DegenerateCell`.
    pub fn reciprocal_tensor(&self) -> Result<MetricTensor>
    { self.reciprocal_tensor_with(&Thresholds::default()) }

    pub fn reciprocal_tensor_with(&self, thresholds: &Thresholds) -> Result<MetricTensor> {
        self.params().validate()?;

        Ok(match *self {
            LatticeSystem::Triclinic { .. } => reciprocal::general(&self.params(), thresholds)?,
            LatticeSystem::Monoclinic { a, b, c, beta } => reciprocal::monoclinic(a, b, c, beta),
            LatticeSystem::Orthorhombic { a, b, c } => reciprocal::orthorhombic(a, b, c),
            LatticeSystem::Tetragonal { a, c } => reciprocal::tetragonal(a, c),
            LatticeSystem::Hexagonal { a, c } => reciprocal::hexagonal(a, c),
            LatticeSystem::Rhombohedral { a, alpha } => reciprocal::rhombohedral(a, alpha, thresholds)?,
            LatticeSystem::Cubic { a } => reciprocal::cubic(a),
        })
    }
}
