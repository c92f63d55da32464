use super::ForceCurve;
use crate::{Domain, Result, Vector3};

/// Free particles
#[derive(Clone, Copy, Debug, Default)]
pub struct NoForce {}
impl NoForce {
    pub fn new() -> Self {
        Self {}
    }
}
impl ForceCurve for NoForce {
    fn cutoff(&self) -> f64 {
        0.0
    }
    fn force(&self, _idx: usize, _domain: &Domain) -> Result<Vector3> {
        Ok(Vector3::splat(0.0))
    }
    fn potential_energy(&self, _idx: usize, _domain: &Domain) -> Result<f64> {
        Ok(0.0)
    }
}
