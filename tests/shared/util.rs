use cellmetric_lattice::{CellParams, LatticeSystem, SystemKind, V3};
use std::path::Path;

/// A cell from `tests/resources`, with angles in degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceCell {
    pub system: SystemKind,
    pub params: Vec<f64>,
    pub volume: f64,
    /// Spacing of the (111) planes.
    pub d111: f64,
}

impl ReferenceCell {
    pub fn lattice_system(&self) -> LatticeSystem {
        let values: Vec<f64> = {
            self.system.param_names().iter().zip(&self.params)
                .map(|(&name, &x)| match name {
                    "alpha" | "beta" | "gamma" => x.to_radians(),
                    _ => x,
                })
                .collect()
        };
        LatticeSystem::from_values(self.system, &values)
            .unwrap_or_else(|| panic!("wrong number of params in {:?}", self))
    }
}

pub fn reference_cells() -> Vec<ReferenceCell> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/resources/reference-cells.json");
    let file = ::std::fs::File::open(path).unwrap();
    ::serde_json::from_reader(file).unwrap()
}

/// Who needs quickcheck?
pub fn random_triclinic() -> CellParams {
    let length = || 0.2 + 1.8 * ::rand::random::<f64>();
    let angle = || 70.0 + 40.0 * ::rand::random::<f64>();
    CellParams::from_degrees(length(), length(), length(), angle(), angle(), angle())
}

pub fn random_v3() -> V3
{ V3::from_fn(|_| 4.0 * ::rand::random::<f64>() - 2.0) }
