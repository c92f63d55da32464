use tracing::info;

use super::Monitor;
use crate::{compute, Domain, Error, ForceField, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyRecord {
    pub step: usize,
    pub kinetic: f64,
    pub potential: f64,
    pub temperature: f64,
}
impl EnergyRecord {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Logs and records the energy of the domain every `every` steps
#[derive(Debug)]
pub struct EnergyLogger {
    every: usize,
    history: Vec<EnergyRecord>,
}
impl EnergyLogger {
    pub fn new(every: usize) -> Result<Self> {
        if every == 0 {
            return Err(Error::InvalidParameter(String::from(
                "Energy log frequency should be positive",
            )));
        }
        Ok(Self {
            every,
            history: Vec::new(),
        })
    }
    pub fn history(&self) -> &[EnergyRecord] {
        &self.history
    }
    /// Largest deviation of the total energy from the first record, relative to it.
    ///
    /// `None` without records, or when the first total is zero.
    pub fn relative_drift(&self) -> Option<f64> {
        let first = self.history.first()?.total();
        if first == 0.0 {
            return None;
        }
        self.history
            .iter()
            .map(|r| ((r.total() - first) / first).abs())
            .reduce(f64::max)
    }
}
impl Monitor for EnergyLogger {
    fn name(&self) -> &str {
        "energy"
    }
    fn observe(&mut self, step: usize, domain: &mut Domain, force_field: &ForceField) -> Result<()> {
        if step % self.every != 0 {
            return Ok(());
        }
        let record = EnergyRecord {
            step,
            kinetic: compute::kinetic_energy(domain),
            potential: compute::potential_energy(domain, force_field)?,
            temperature: compute::temperature(domain),
        };
        info!(
            step,
            ke = record.kinetic,
            pe = record.potential,
            total = record.total(),
            temp = record.temperature,
            "energy"
        );
        self.history.push(record);
        Ok(())
    }
}
