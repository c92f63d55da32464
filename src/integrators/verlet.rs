use super::*;
use crate::{Error, ForceCurve, Vector3};

/// Velocity-verlet integrator bound to one force curve
#[derive(Clone, Debug)]
pub struct VelocityVerlet<F: ForceCurve> {
    force_curve: F,
}

impl<F: ForceCurve> VelocityVerlet<F> {
    pub fn new(force_curve: F) -> Self {
        Self { force_curve }
    }
    pub fn force_curve(&self) -> &F {
        &self.force_curve
    }

    fn check_timestep(timestep: f64) -> Result<()> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Timestep should be positive, found {}",
                timestep
            )));
        }
        Ok(())
    }
    fn compute_forces(&self, domain: &Domain) -> Result<Vec<Vector3>> {
        (0..domain.len())
            .map(|i| self.force_curve.force(i, domain))
            .collect()
    }
    /// Checks a drift step before it is written to the domain
    fn check_drift(
        idx: usize,
        from: Vector3,
        to: Vector3,
        vel: Vector3,
        extents: Vector3,
    ) -> Result<()> {
        if !(to.is_finite() && vel.is_finite()) {
            return Err(Error::NonFiniteState { index: idx });
        }
        let displacement = to - from;
        for axis in 0..3 {
            if displacement[axis].abs() > extents[axis] {
                return Err(Error::DivergentDisplacement {
                    index: idx,
                    axis,
                    displacement: displacement[axis],
                    extent: extents[axis],
                });
            }
        }
        Ok(())
    }
    /// Half-kick and drift every free particle against the same forces.
    ///
    /// Returns the half-step velocities; positions are written to the domain only
    /// once every particle has passed the drift check.
    fn kick_drift(&self, domain: &mut Domain, timestep: f64) -> Result<Vec<Vector3>> {
        let half_ts = 0.5 * timestep;
        let extents = domain.geometry().extents();
        let forces = self.compute_forces(domain)?;
        let mut velocities = Vec::with_capacity(domain.len());
        let mut positions = Vec::with_capacity(domain.len());
        for (idx, (p, f)) in domain.particles().iter().zip(&forces).enumerate() {
            if p.is_fixed() {
                velocities.push(p.velocity());
                positions.push(p.position());
                continue;
            }
            let vel = p.velocity() + *f * (half_ts / p.mass());
            let pos = p.position() + vel * timestep;
            Self::check_drift(idx, p.position(), pos, vel, extents)?;
            velocities.push(vel);
            positions.push(pos);
        }
        for (p, pos) in domain.particles_mut().zip(positions) {
            p.set_position(pos);
        }
        Ok(velocities)
    }
    /// Second half-kick from the forces at the drifted positions
    fn final_kick(&self, domain: &mut Domain, velocities: Vec<Vector3>, timestep: f64) -> Result<()> {
        let half_ts = 0.5 * timestep;
        let forces = self.compute_forces(domain)?;
        let mut finished = Vec::with_capacity(velocities.len());
        let particles = domain.particles().iter().zip(&forces).zip(velocities);
        for (idx, ((p, f), vel)) in particles.enumerate() {
            if p.is_fixed() {
                finished.push(vel);
                continue;
            }
            let vel = vel + *f * (half_ts / p.mass());
            if !vel.is_finite() {
                return Err(Error::NonFiniteState { index: idx });
            }
            finished.push(vel);
        }
        for (p, vel) in domain.particles_mut().zip(finished) {
            p.set_velocity(vel);
        }
        Ok(())
    }
    fn step_particle(&self, idx: usize, domain: &mut Domain, timestep: f64) -> Result<()> {
        let half_ts = 0.5 * timestep;
        let mass = domain.particle(idx).mass();
        let start = domain.particle(idx).position();

        let force = self.force_curve.force(idx, domain)?;
        let vel = domain.particle(idx).velocity() + force * (half_ts / mass);
        let pos = start + vel * timestep;
        Self::check_drift(idx, start, pos, vel, domain.geometry().extents())?;
        // the second evaluation has to see the new position
        domain.particle_mut(idx).set_position(pos);

        let vel = self.force_curve.force(idx, domain).and_then(|force| {
            let vel = vel + force * (half_ts / mass);
            if vel.is_finite() {
                Ok(vel)
            } else {
                Err(Error::NonFiniteState { index: idx })
            }
        });
        match vel {
            Ok(vel) => {
                domain.particle_mut(idx).set_velocity(vel);
                Ok(())
            }
            Err(e) => {
                domain.particle_mut(idx).set_position(start);
                Err(e)
            }
        }
    }
}

impl<F: ForceCurve> Integrator for VelocityVerlet<F> {
    /// Advance one particle. On error the particle keeps its previous state.
    fn integrate(&self, idx: usize, domain: &mut Domain, timestep: f64) -> Result<()> {
        Self::check_timestep(timestep)?;
        if domain.particle(idx).is_fixed() {
            return Ok(());
        }
        self.step_particle(idx, domain, timestep)
    }

    /// Advance every particle. On error the whole domain is rolled back to its
    /// state at the start of the call.
    fn integrate_all(&self, domain: &mut Domain, timestep: f64, scheme: UpdateScheme) -> Result<()> {
        Self::check_timestep(timestep)?;
        let positions = domain.positions();
        let velocities = domain.velocities();
        let result = match scheme {
            UpdateScheme::Sequential => {
                (0..domain.len()).try_for_each(|i| self.integrate(i, domain, timestep))
            }
            UpdateScheme::Synchronized => self
                .kick_drift(domain, timestep)
                .and_then(|half| self.final_kick(domain, half, timestep)),
        };
        if result.is_err() {
            domain.restore_state(&positions, &velocities);
        }
        result
    }
}
