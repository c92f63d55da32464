use tracing::debug;

use super::Monitor;
use crate::{compute, Domain, Error, ForceField, Result};

/// Velocity-rescaling thermostat pulling the domain to a target temperature
#[derive(Debug)]
pub struct VelocityRescale {
    target: f64,
    every: usize,
}
impl VelocityRescale {
    pub fn new(target: f64, every: usize) -> Result<Self> {
        if !(target.is_finite() && target >= 0.0) || every == 0 {
            return Err(Error::InvalidParameter(format!(
                "Thermostat needs a non-negative target and positive frequency, found {} every {}",
                target, every
            )));
        }
        Ok(Self { target, every })
    }
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Scale all free velocities so the domain sits at the target temperature
    pub fn rescale(&self, domain: &mut Domain) -> Result<f64> {
        let current = compute::temperature(domain);
        if current <= 0.0 {
            return Err(Error::DegenerateEnsemble);
        }
        let factor = (self.target / current).sqrt();
        for p in domain.particles_mut() {
            if p.is_fixed() {
                continue;
            }
            let vel = p.velocity() * factor;
            p.set_velocity(vel);
        }
        debug!(current, target = self.target, factor, "rescaled velocities");
        Ok(factor)
    }
}
impl Monitor for VelocityRescale {
    fn name(&self) -> &str {
        "rescale"
    }
    fn observe(&mut self, step: usize, domain: &mut Domain, _force_field: &ForceField) -> Result<()> {
        if step % self.every != 0 {
            return Ok(());
        }
        self.rescale(domain).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, PeriodicBox, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn rescale_hits_target() {
        let mut domain = Domain::new(PeriodicBox::cube(10.0).unwrap());
        domain.add_particle(Atom::new("A", 1.0, Vector3::splat(1.0)).with_velocity(Vector3::new(2.0, 0.0, 0.0)));
        domain.add_particle(Atom::new("B", 3.0, Vector3::splat(2.0)).with_velocity(Vector3::new(0.0, 1.0, 1.0)));
        let thermostat = VelocityRescale::new(1.5, 1).unwrap();
        thermostat.rescale(&mut domain).unwrap();
        assert_relative_eq!(compute::temperature(&domain), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_kinetic_energy_is_degenerate() {
        let mut domain = Domain::new(PeriodicBox::cube(10.0).unwrap());
        domain.add_particle(Atom::new("A", 1.0, Vector3::splat(1.0)));
        let thermostat = VelocityRescale::new(1.0, 1).unwrap();
        assert!(matches!(
            thermostat.rescale(&mut domain),
            Err(Error::DegenerateEnsemble)
        ));
    }
}
