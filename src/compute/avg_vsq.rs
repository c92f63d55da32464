use crate::Domain;

pub(super) fn compute(domain: &Domain) -> f64 {
    if domain.is_empty() {
        return 0.0;
    }
    domain
        .particles()
        .iter()
        .map(|p| p.velocity().sqr_magnitude())
        .sum::<f64>()
        / domain.len() as f64
}
