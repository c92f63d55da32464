//! Collaborators run once per tick, after integration and before the domain is folded.
mod energy;
mod rescale;
mod xyz;

pub use energy::{EnergyLogger, EnergyRecord};
pub use rescale::VelocityRescale;
pub use xyz::XyzWriter;

use crate::{Domain, ForceField, Result};

/// Observer of the simulation state between ticks.
///
/// A monitor may change particle velocities but must not add, remove or reorder
/// particles.
pub trait Monitor {
    fn name(&self) -> &str;
    fn observe(&mut self, step: usize, domain: &mut Domain, force_field: &ForceField) -> Result<()>;
}
