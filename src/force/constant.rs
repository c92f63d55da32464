use serde::{Deserialize, Serialize};

use super::ForceCurve;
use crate::{Domain, Result, Vector3};

/// The same external force on every particle, e.g. uniform gravity.
///
/// Carries no potential energy since the field has no reference point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantForce {
    force: Vector3,
}
impl ConstantForce {
    pub fn new(force: Vector3) -> Self {
        Self { force }
    }
}
impl ForceCurve for ConstantForce {
    fn cutoff(&self) -> f64 {
        0.0
    }
    fn force(&self, _idx: usize, _domain: &Domain) -> Result<Vector3> {
        Ok(self.force)
    }
    fn potential_energy(&self, _idx: usize, _domain: &Domain) -> Result<f64> {
        Ok(0.0)
    }
}
