use crate::cell::params::CellParams;
use crate::cell::system::{LatticeSystem, SystemKind};
use crate::errors::Result;
use crate::geometry::{self, Metric};
use crate::tensor::MetricTensor;
use crate::thresholds::Thresholds;

use cellmetric_array_types::V3;
use std::sync::Arc;

/// A validated unit cell with both of its metric tensors.
///
/// Construction fails fast: the expanded parameters are checked with
/// `CellParams::validate`, and the reciprocal tensor is built up front so
/// that a degenerate cell is rejected here rather than later.  Afterwards
/// the crystal is immutable, and clones share the tensors.
#[derive(Debug, Clone)]
pub struct Crystal {
    system: LatticeSystem,
    thresholds: Thresholds,
    direct: Arc<MetricTensor>,
    reciprocal: Arc<MetricTensor>,
}

// Manual impl that doesn't compare the tensors, which are determined by the rest.
impl PartialEq<Crystal> for Crystal {
    fn eq(&self, other: &Crystal) -> bool {
        // deconstruct to get errors when new fields are added
        let Crystal { ref system, ref thresholds, direct: _, reciprocal: _ } = *self;
        system == &other.system && thresholds == &other.thresholds
    }
}

impl Crystal {
    /// Validate a cell under the default thresholds.
    pub fn new(system: LatticeSystem) -> Result<Self>
    { Self::with_thresholds(system, Thresholds::default()) }

    pub fn with_thresholds(system: LatticeSystem, thresholds: Thresholds) -> Result<Self> {
        let reciprocal = system.reciprocal_tensor_with(&thresholds)?;
        let direct = system.direct_tensor();
        trace!("built {} metric tensors: direct {:?}, reciprocal {:?}", system.name(), direct, reciprocal);

        Ok(Crystal {
            system, thresholds,
            direct: Arc::new(direct),
            reciprocal: Arc::new(reciprocal),
        })
    }

    #[inline]
    pub fn system(&self) -> &LatticeSystem
    { &self.system }

    #[inline]
    pub fn kind(&self) -> SystemKind
    { self.system.kind() }

    pub fn name(&self) -> &'static str
    { self.system.name() }

    pub fn symbol(&self) -> &'static str
    { self.system.symbol() }

    /// The six expanded cell parameters.
    pub fn params(&self) -> CellParams
    { self.system.params() }

    #[inline]
    pub fn thresholds(&self) -> &Thresholds
    { &self.thresholds }

    #[inline]
    pub fn direct_tensor(&self) -> &MetricTensor
    { &self.direct }

    #[inline]
    pub fn reciprocal_tensor(&self) -> &MetricTensor
    { &self.reciprocal }

    /// Volume of the cell, in cubed length units.
    pub fn volume(&self) -> f64
    { self.params().volume() }

    /// View of the crystal whose metric is the reciprocal tensor.
    ///
    /// Vectors given to it are in fractional coordinates of the reciprocal
    /// basis (Miller indices, for instance).  There is no 2π factor.
    #[inline]
    pub fn reciprocal(&self) -> Reciprocal<'_>
    { Reciprocal { crystal: self } }
}

/// Vector geometry in the direct lattice.
impl Crystal {
    pub fn dot(&self, p: &V3, q: &V3) -> f64
    { geometry::dot_product(self, p, q) }

    pub fn length(&self, p: &V3) -> Result<f64>
    { geometry::length(self, p) }

    pub fn angle_rad(&self, p: &V3, q: &V3) -> Result<f64>
    { geometry::angle_rad(self, p, q) }

    pub fn angle_deg(&self, p: &V3, q: &V3) -> Result<f64>
    { geometry::angle_deg(self, p, q) }
}

impl Metric for Crystal {
    fn metric_tensor(&self) -> &MetricTensor
    { &self.direct }

    fn thresholds(&self) -> &Thresholds
    { &self.thresholds }
}

/// The reciprocal lattice of a `Crystal`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reciprocal<'a> {
    crystal: &'a Crystal,
}

impl<'a> Reciprocal<'a> {
    pub fn crystal(&self) -> &'a Crystal
    { self.crystal }

    /// Volume of the reciprocal cell, `1 / V`.
    pub fn volume(&self) -> f64
    { 1.0 / self.crystal.volume() }
}

impl<'a> Metric for Reciprocal<'a> {
    fn metric_tensor(&self) -> &MetricTensor
    { &self.crystal.reciprocal }

    fn thresholds(&self) -> &Thresholds
    { &self.crystal.thresholds }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use cellmetric_array_types::M33;
    use std::f64::consts::PI;

    #[test]
    fn tetragonal_scenario() {
        let crystal = Crystal::new(LatticeSystem::tetragonal(0.5, 1.0)).unwrap();
        assert_eq!(crystal.direct_tensor(), &MetricTensor::diagonal_only([0.25, 0.25, 1.0]));
        assert_eq!(crystal.reciprocal_tensor(), &MetricTensor::diagonal_only([4.0, 4.0, 1.0]));
        assert_eq!((crystal.name(), crystal.symbol(), crystal.kind()), ("tetragonal", "t", SystemKind::Tetragonal));
        assert_close!(crystal.volume(), 0.25);
        assert_close!(crystal.reciprocal().volume(), 4.0);

        let d = V3([0.0, -0.5, 0.5]);
        assert_close!(crystal.dot(&d, &d), 0.3125);
        assert_close!(crystal.length(&d).unwrap(), 0.5590169943749474);
        let (p, q) = (V3([1.0, 2.0, 0.0]), V3([3.0, 1.0, 1.0]));
        assert_close!(crystal.dot(&p, &q), 1.25);
        assert_close!(crystal.angle_deg(&p, &q).unwrap(), 53.30077479951012);
        assert_close!(crystal.angle_rad(&p, &q).unwrap(), 53.30077479951012f64.to_radians());
    }

    #[test]
    fn hexagonal_reciprocal_angle() {
        let crystal = Crystal::new(LatticeSystem::hexagonal(0.25, 0.4)).unwrap();
        let (a, b) = (V3([1.0, 0.0, 0.0]), V3([0.0, 1.0, 0.0]));
        assert_close!(crystal.angle_deg(&a, &b).unwrap(), 120.0);
        assert_close!(geometry::angle_deg(&crystal.reciprocal(), &a, &b).unwrap(), 60.0);
        assert_close!(abs=1e-12, rel=1e-9, crystal.direct_tensor() * crystal.reciprocal_tensor(), M33::eye());
    }

    #[test]
    fn reciprocal_lengths_are_plane_spacings() {
        // |h*| = 1/d for the (hkl) planes of an orthorhombic cell
        let crystal = Crystal::new(LatticeSystem::orthorhombic(0.4, 0.5, 0.6)).unwrap();
        let hkl = V3([1.0, 1.0, 0.0]);
        let d = 1.0 / geometry::length(&crystal.reciprocal(), &hkl).unwrap();
        assert_close!(d, 1.0 / (1.0 / 0.16 + 1.0 / 0.25f64).sqrt());
    }

    #[test]
    fn invalid_parameters() {
        match Crystal::new(LatticeSystem::cubic(-1.0)) {
            Err(Error::InvalidParameter { name: "a", .. }) => {},
            r => panic!("unexpected result {:?}", r),
        }
        match Crystal::new(LatticeSystem::monoclinic(1.0, 1.0, 1.0, PI)) {
            Err(Error::InvalidParameter { name: "beta", .. }) => {},
            r => panic!("unexpected result {:?}", r),
        }
        match Crystal::new(LatticeSystem::triclinic(1.0, 1.0, 1.0, 0.5, 0.5, 1.5)) {
            Err(Error::InvalidParameter { .. }) => {},
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn degenerate_cells() {
        let alpha = 2.0 * PI / 3.0 - 1e-12;
        match Crystal::new(LatticeSystem::rhombohedral(0.3, alpha)) {
            Err(Error::DegenerateCell { normalizer: "W", .. }) => {},
            r => panic!("unexpected result {:?}", r),
        }
        let gamma = 2.0 * PI / 3.0 - 1e-12;
        match Crystal::new(LatticeSystem::triclinic(1.0, 1.0, 1.0, PI / 3.0, PI / 3.0, gamma)) {
            Err(Error::DegenerateCell { normalizer: "omega", .. }) => {},
            r => panic!("unexpected result {:?}", r),
        }

        let loose = Thresholds { degeneracy: 1e-14, ..Thresholds::default() };
        assert!(Crystal::with_thresholds(LatticeSystem::rhombohedral(0.3, alpha), loose).is_ok());
    }

    #[test]
    fn clones_share_tensors() {
        let crystal = Crystal::new(LatticeSystem::cubic(0.36)).unwrap();
        let clone = crystal.clone();
        assert!(Arc::ptr_eq(&crystal.direct, &clone.direct));
        assert_eq!(crystal, clone);
        assert_ne!(crystal, Crystal::new(LatticeSystem::cubic(0.37)).unwrap());
    }

    #[test]
    fn is_send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<Crystal>();
        check::<Reciprocal<'static>>();
    }
}
