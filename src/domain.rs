use tracing::debug;

use crate::{BoundaryGeometry, Particle, Result, Vector3};

/// Ordered particle collection living inside one boundary geometry
#[derive(Debug)]
pub struct Domain {
    particles: Vec<Box<dyn Particle>>,
    geometry: Box<dyn BoundaryGeometry>,
}
impl Domain {
    pub fn new(geometry: impl BoundaryGeometry + 'static) -> Self {
        Self {
            particles: Vec::new(),
            geometry: Box::new(geometry),
        }
    }

    // Getters
    pub fn particles(&self) -> &[Box<dyn Particle>] {
        &self.particles
    }
    pub fn particle(&self, idx: usize) -> &dyn Particle {
        self.particles[idx].as_ref()
    }
    pub fn particle_mut(&mut self, idx: usize) -> &mut dyn Particle {
        self.particles[idx].as_mut()
    }
    pub fn particles_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Particle>> {
        self.particles.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    pub fn geometry(&self) -> &dyn BoundaryGeometry {
        self.geometry.as_ref()
    }
    pub fn positions(&self) -> Vec<Vector3> {
        self.particles.iter().map(|p| p.position()).collect()
    }
    pub fn velocities(&self) -> Vec<Vector3> {
        self.particles.iter().map(|p| p.velocity()).collect()
    }

    /// Minimum-image vector pointing from particle `j` to particle `i`
    pub fn separation(&self, i: usize, j: usize) -> Vector3 {
        self.geometry
            .separation(self.particles[i].position(), self.particles[j].position())
    }

    // Mutation
    pub fn add_particle(&mut self, particle: impl Particle + 'static) -> usize {
        self.particles.push(Box::new(particle));
        self.particles.len() - 1
    }
    pub fn remove_particle(&mut self, idx: usize) -> Option<Box<dyn Particle>> {
        if idx < self.particles.len() {
            Some(self.particles.remove(idx))
        } else {
            None
        }
    }

    /// Put back positions and velocities captured with [`Domain::positions`] and
    /// [`Domain::velocities`], in particle order.
    pub fn restore_state(&mut self, positions: &[Vector3], velocities: &[Vector3]) {
        for ((p, pos), vel) in self.particles.iter_mut().zip(positions).zip(velocities) {
            p.set_position(*pos);
            p.set_velocity(*vel);
        }
    }

    /// Fold every position back into the canonical range of the geometry.
    ///
    /// Stops at the first particle whose position cannot be folded; earlier particles
    /// stay folded.
    pub fn fold_all(&mut self) -> Result<()> {
        for i in 0..self.particles.len() {
            let pos = self.particles[i].position();
            let folded = self.geometry.fold(pos).inspect_err(|e| {
                debug!(particle = i, "fold failed: {}", e);
            })?;
            self.particles[i].set_position(folded);
        }
        Ok(())
    }
}
