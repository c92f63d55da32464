use crate::{Domain, ForceCurve, Result};

pub fn compute(domain: &Domain, force_curve: &impl ForceCurve) -> Result<f64> {
    force_curve.total_potential_energy(domain)
}
