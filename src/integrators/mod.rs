mod verlet;
pub use verlet::VelocityVerlet;

use serde::{Deserialize, Serialize};

use crate::{Domain, Result};

/// How particles within one tick see each other's updates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateScheme {
    /// Every force of a half-kick is evaluated against the same snapshot of positions
    #[default]
    Synchronized,
    /// Particles are advanced one at a time in domain order, so later particles
    /// see the end-of-tick positions of earlier ones
    Sequential,
}

/// Simulation integrator
pub trait Integrator {
    /// Advance a single particle by one timestep
    fn integrate(&self, idx: usize, domain: &mut Domain, timestep: f64) -> Result<()>;

    /// Advance every particle of the domain by one timestep
    fn integrate_all(&self, domain: &mut Domain, timestep: f64, scheme: UpdateScheme) -> Result<()>;
}
