//! Whole-domain observables used by monitors and the simulation's energy accessors.
mod avg_vsq;
mod kinetic_energy;
mod potential_energy;
mod temperature;
mod total_energy;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Domain, ForceCurve, Result, Vector3};

/// A scalar observable of the domain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compute {
    AvgVsq,
    KineticE,
    PotentialE,
    TotalE,
    Temperature,
}
impl Compute {
    pub fn compute(&self, domain: &Domain, force_curve: &impl ForceCurve) -> Result<f64> {
        match self {
            Compute::AvgVsq => Ok(avg_vsq::compute(domain)),
            Compute::KineticE => Ok(kinetic_energy::compute(domain)),
            Compute::PotentialE => potential_energy::compute(domain, force_curve),
            Compute::TotalE => total_energy::compute(domain, force_curve),
            Compute::Temperature => Ok(temperature::compute(domain)),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Compute::AvgVsq => "AvgVsq",
            Compute::KineticE => "KE",
            Compute::PotentialE => "PE",
            Compute::TotalE => "TotalE",
            Compute::Temperature => "Temp",
        }
    }
}
impl Display for Compute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

pub use kinetic_energy::compute as kinetic_energy;
pub use potential_energy::compute as potential_energy;
pub use temperature::compute as temperature;
pub use total_energy::compute as total_energy;

/// Total linear momentum of the domain
pub fn momentum(domain: &Domain) -> Vector3 {
    domain
        .particles()
        .iter()
        .map(|p| p.velocity() * p.mass())
        .sum()
}
