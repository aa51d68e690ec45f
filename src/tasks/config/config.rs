use cellmetric_lattice::Thresholds;
use serde::de;

pub const MAX_VERSION: u32 = 1;

/// Root settings object.
///
/// This is what you should deserialize.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

/// Raw deserialized form of settings.
///
/// You shouldn't deserialize this type directly; deserialize `ValidatedSettings`
/// instead, so that the values are checked.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Identifies the version of the settings that this file uses.
    ///
    /// If not specified, assumes a value of 1.
    #[serde(default)]
    pub version: Option<u32>,

    /// Numerical thresholds of the metric engine.
    ///
    /// Any subset of the keys may be given.
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub output: Output,
}
derive_yaml_read!{ValidatedSettings}

impl<'de> de::Deserialize<'de> for ValidatedSettings {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cereal: Settings = de::Deserialize::deserialize(deserializer)?;

        cereal.validate().map_err(de::Error::custom)
    }
}

/// The settings used when no file is given.
impl Default for ValidatedSettings {
    fn default() -> Self {
        ValidatedSettings(Settings {
            version: Some(MAX_VERSION),
            ..Default::default()
        })
    }
}

/// How results are printed.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    #[serde(default)]
    pub angle_unit: AngleUnit,

    /// Digits after the decimal point.
    #[serde(default = "_output__precision")]
    pub precision: usize,
}
fn _output__precision() -> usize { 6 }

impl Default for Output {
    fn default() -> Self {
        Output {
            angle_unit: Default::default(),
            precision: _output__precision(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl Default for AngleUnit {
    fn default() -> Self { AngleUnit::Degrees }
}

impl AngleUnit {
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_degrees(),
            AngleUnit::Radians => angle,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::YamlRead;

    #[test]
    fn empty_file_uses_defaults() {
        let ValidatedSettings(settings) = YamlRead::from_reader(&b"{}"[..]).unwrap();
        assert_eq!(settings.version, Some(1));
        assert_eq!(settings.thresholds, Thresholds::default());
        assert_eq!(settings.output, Output { angle_unit: AngleUnit::Degrees, precision: 6 });
    }

    #[test]
    fn full_file() {
        let yaml = b"
version: 1
thresholds:
  degeneracy: 1e-8
  zero-norm: 0.0
output:
  angle-unit: radians
  precision: 12
";
        let ValidatedSettings(settings) = YamlRead::from_reader(&yaml[..]).unwrap();
        assert_eq!(settings.thresholds, Thresholds {
            degeneracy: 1e-8,
            zero_norm: 0.0,
            ..Thresholds::default()
        });
        assert_eq!(settings.output.angle_unit, AngleUnit::Radians);
        assert_eq!(settings.output.precision, 12);
    }

    #[test]
    fn unknown_keys_are_not_fatal() {
        let yaml = b"{version: 1, output: {presicion: 3}}";
        let ValidatedSettings(settings) = YamlRead::from_reader(&yaml[..]).unwrap();
        assert_eq!(settings.output.precision, 6);
    }

    #[test]
    fn invalid_file() {
        let result: Result<ValidatedSettings, _> = YamlRead::from_reader(&b"{version: 2}"[..]);
        assert!(result.is_err());
        let result: Result<ValidatedSettings, _> = YamlRead::from_reader(&b"{output: {angle-unit: gradians}}"[..]);
        assert!(result.is_err());
    }

    #[test]
    fn angle_units() {
        assert_eq!(AngleUnit::Radians.from_radians(1.5), 1.5);
        assert_eq!(AngleUnit::Degrees.from_radians(::std::f64::consts::PI), 180.0);
        let unit: AngleUnit = ::serde_json::from_str(r#""degrees""#).unwrap();
        assert_eq!(unit.suffix(), "deg");
    }
}
