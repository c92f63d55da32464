mod atom;
pub use atom::Atom;

use std::fmt::Debug;

use crate::Vector3;

/// A point particle held by a [`Domain`](crate::Domain).
///
/// Particles never refer to each other; every relationship is computed from the
/// positions stored in the domain.
pub trait Particle: Debug {
    fn name(&self) -> &str;
    fn mass(&self) -> f64;
    fn charge(&self) -> f64;
    fn position(&self) -> Vector3;
    fn set_position(&mut self, position: Vector3);
    fn velocity(&self) -> Vector3;
    fn set_velocity(&mut self, velocity: Vector3);
    /// Fixed particles are never moved by an integrator
    fn is_fixed(&self) -> bool;
    /// Independent copy of this particle
    fn clone_particle(&self) -> Box<dyn Particle>;

    fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity().sqr_magnitude()
    }
}

impl Clone for Box<dyn Particle> {
    fn clone(&self) -> Self {
        self.clone_particle()
    }
}
