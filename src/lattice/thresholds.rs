/// Numerical thresholds used by the metric engine.
///
/// All fields have defaults, so a partial config is fine.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Thresholds {
    /// Relative size under which the reciprocal normalizers (`W / a²` for
    /// rhombohedral cells, `ω² / (abc)²` in general) count as zero.
    pub degeneracy: f64,

    /// Length (in the cell's length unit) at or below which a vector is
    /// treated as zero when computing angles.
    pub zero_norm: f64,

    /// How far below zero a squared length may fall, relative to the
    /// magnitude of the terms that produced it, before it is an error
    /// rather than rounding noise.
    pub negative_norm: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            degeneracy: 1e-10,
            zero_norm: 1e-12,
            negative_norm: 1e-12,
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn partial_deserialize() {
        let thresholds: Thresholds = ::serde_json::from_str(r#"{"zero-norm": 1e-6}"#).unwrap();
        assert_eq!(thresholds, Thresholds { zero_norm: 1e-6, ..Thresholds::default() });

        let thresholds: Thresholds = ::serde_json::from_str("{}").unwrap();
        assert_eq!(thresholds, Thresholds::default());
    }
}
