#[macro_use] extern crate cellmetric_assert_close;

use cellmetric_config::{AngleUnit, ValidatedSettings, YamlRead};
use cellmetric_lattice::{Crystal, Error, LatticeSystem, SystemKind, V3};
use cellmetric_tasks::{geometry_report, system_from_cli_values, tensor_report};
use std::f64::consts::PI;

fn settings(yaml: &str) -> ValidatedSettings
{ YamlRead::from_reader(yaml.as_bytes()).unwrap() }

#[test]
fn thresholds_reach_the_crystal() {
    let ValidatedSettings(strict) = settings("{version: 1, thresholds: {degeneracy: 1e-3}}");
    let ValidatedSettings(loose) = settings("{version: 1, thresholds: {degeneracy: 0.0}}");

    // W / a² = 3δ for alpha = 120° - δ
    let system = LatticeSystem::rhombohedral(0.3, 2.0 * PI / 3.0 - 1e-4);
    match Crystal::with_thresholds(system, strict.thresholds) {
        Err(Error::DegenerateCell { system, normalizer: "W", .. }) => assert_eq!(system, SystemKind::Rhombohedral),
        r => panic!("unexpected {:?}", r),
    }
    let crystal = Crystal::with_thresholds(system, loose.thresholds).unwrap();
    assert_eq!(crystal.thresholds().degeneracy, 0.0);
}

#[test]
fn zero_norm_threshold() {
    let ValidatedSettings(s) = settings("{version: 1, thresholds: {zero-norm: 0.1}}");
    let crystal = Crystal::with_thresholds(LatticeSystem::cubic(1.0), s.thresholds).unwrap();
    let short = V3([0.05, 0.0, 0.0]);
    assert!(crystal.angle_rad(&short, &V3([0.0, 1.0, 0.0])).is_err());
    assert_close!(crystal.angle_deg(&V3([0.5, 0.0, 0.0]), &V3([0.0, 1.0, 0.0])).unwrap(), 90.0);
}

#[test]
fn reports_follow_output_settings() {
    let ValidatedSettings(s) = settings("{version: 1, output: {angle-unit: radians, precision: 4}}");
    assert_eq!(s.output.angle_unit, AngleUnit::Radians);

    let system = system_from_cli_values(SystemKind::Hexagonal, &[0.25, 0.4]).unwrap();
    let crystal = Crystal::with_thresholds(system, s.thresholds).unwrap();

    let text = tensor_report(&crystal, &s.output).unwrap();
    assert!(text.contains("gamma = 2.0944  (rad)"), "{}", text);
    assert!(text.contains("volume: 0.0217"), "{}", text);

    let (a, b) = (V3([1.0, 0.0, 0.0]), V3([0.0, 1.0, 0.0]));
    let text = geometry_report(&crystal, &s.output, &a, Some(&b), false).unwrap();
    assert!(text.contains("angle(p, q) = 2.0944 rad"), "{}", text);
}
