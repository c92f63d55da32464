use crate::Domain;

pub fn compute(domain: &Domain) -> f64 {
    domain.particles().iter().map(|p| p.kinetic_energy()).sum()
}
