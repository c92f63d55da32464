use crate::{Domain, ForceCurve, Result};

use super::{kinetic_energy, potential_energy};

pub fn compute(domain: &Domain, force_curve: &impl ForceCurve) -> Result<f64> {
    Ok(potential_energy::compute(domain, force_curve)? + kinetic_energy::compute(domain))
}
