use crate::Domain;

use super::kinetic_energy;

/// Instantaneous temperature in reduced units (k_B = 1)
pub fn compute(domain: &Domain) -> f64 {
    if domain.is_empty() {
        return 0.0;
    }
    2.0 * kinetic_energy::compute(domain) / (3.0 * domain.len() as f64)
}
