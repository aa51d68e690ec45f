//! Checks performed after deserialization.

use crate::config::*;
use cellmetric_lattice::Thresholds;
use failure::Error;

/// Largest precision that still means something for an `f64`.
const MAX_PRECISION: usize = 17;

impl Settings {
    pub fn validate(mut self) -> Result<ValidatedSettings, Error> {
        fix_version(&mut self.version)?;
        check_thresholds(&self.thresholds)?;
        check_output(&self.output)?;

        Ok(ValidatedSettings(self))
    }
}

fn fix_version(it: &mut Option<u32>) -> Result<(), Error> {
    match *it {
        Some(x) if x == 0 || x > MAX_VERSION => {
            bail!("`version: {}` is invalid. (1 <= version <= {})", x, MAX_VERSION);
        },
        None => {
            warn!("\
                Settings file has no `version` field! Assuming `version: 1`. \
                (the latest is version {})\
            ", MAX_VERSION);
            *it = Some(1);
        },
        _ => {},
    };

    Ok(())
}

fn check_thresholds(thresholds: &Thresholds) -> Result<(), Error> {
    let &Thresholds { degeneracy, zero_norm, negative_norm } = thresholds;
    for &(name, value) in &[
        ("degeneracy", degeneracy),
        ("zero-norm", zero_norm),
        ("negative-norm", negative_norm),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            bail!("`thresholds.{}` must be a finite, non-negative number (got {})", name, value);
        }
    }
    Ok(())
}

fn check_output(output: &Output) -> Result<(), Error> {
    if output.precision > MAX_PRECISION {
        bail!("`output.precision: {}` is too large (max {})", output.precision, MAX_PRECISION);
    }
    Ok(())
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn missing_version() {
        let ValidatedSettings(settings) = Settings::default().validate().unwrap();
        assert_eq!(settings.version, Some(1));
    }

    #[test]
    fn bad_versions() {
        for &version in &[0, MAX_VERSION + 1] {
            let settings = Settings { version: Some(version), ..Default::default() };
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn bad_thresholds() {
        let bad = [
            Thresholds { degeneracy: -1e-10, ..Thresholds::default() },
            Thresholds { zero_norm: ::std::f64::NAN, ..Thresholds::default() },
            Thresholds { negative_norm: ::std::f64::INFINITY, ..Thresholds::default() },
        ];
        for &thresholds in &bad {
            let settings = Settings { thresholds, ..Default::default() };
            assert!(settings.validate().is_err());
        }

        let zero = Thresholds { degeneracy: 0.0, zero_norm: 0.0, negative_norm: 0.0 };
        Settings { thresholds: zero, ..Default::default() }.validate().unwrap();
    }

    #[test]
    fn bad_precision() {
        let output = Output { precision: 18, ..Default::default() };
        let err = Settings { output, ..Default::default() }.validate().unwrap_err();
        assert!(err.to_string().contains("output.precision"));
    }
}
