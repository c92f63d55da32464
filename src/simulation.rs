use tracing::{debug, info, instrument, warn};

use crate::{
    compute,
    monitors::{EnergyLogger, Monitor, VelocityRescale, XyzWriter},
    Domain, Error, ForceCurve, ForceField, Integrator, Result, SimulationConfig, UpdateScheme,
    VelocityVerlet,
};

/// The simulation context: a domain, the integrator bound to its force field, and the
/// monitors run after every tick.
pub struct Simulation {
    domain: Domain,
    integrator: VelocityVerlet<ForceField>,
    monitors: Vec<Box<dyn Monitor>>,
    timestep: f64,
    scheme: UpdateScheme,
    step: usize,
}
impl Simulation {
    /// Create a new simulation.
    ///
    /// The minimum-image convention only holds while the cutoff stays below half of
    /// every box length, so a longer cutoff is rejected here.
    pub fn new(domain: Domain, force_field: ForceField, timestep: f64) -> Result<Self> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Timestep should be positive, found {}",
                timestep
            )));
        }
        let extents = domain.geometry().extents();
        let min_half = 0.5 * extents.x.min(extents.y).min(extents.z);
        if force_field.cutoff() >= min_half {
            return Err(Error::InvalidParameter(format!(
                "Cutoff {} should be less than half the shortest box length ({})",
                force_field.cutoff(),
                min_half
            )));
        }
        Ok(Self {
            domain,
            integrator: VelocityVerlet::new(force_field),
            monitors: Vec::new(),
            timestep,
            scheme: UpdateScheme::default(),
            step: 0,
        })
    }

    /// Build a simulation over a populated domain, with the thermostat and output
    /// monitors named in the config. The domain's box has to match the config.
    pub fn from_config(config: &SimulationConfig, domain: Domain) -> Result<Self> {
        config.validate()?;
        let extents = domain.geometry().extents().to_array();
        if extents != config.box_lengths {
            return Err(Error::InvalidParameter(format!(
                "Domain extents {:?} differ from the configured box {:?}",
                extents, config.box_lengths
            )));
        }
        let mut sim = Self::new(domain, config.force.build()?, config.timestep)?;
        sim.set_scheme(config.scheme);
        if let Some(t) = &config.thermostat {
            sim.add_monitor(VelocityRescale::new(t.temperature, t.every)?);
        }
        if let Some(o) = &config.output {
            sim.add_monitor(EnergyLogger::new(o.every)?);
            if let Some(path) = &o.xyz {
                sim.add_monitor(XyzWriter::create(path, o.every)?);
            }
        }
        Ok(sim)
    }

    // Getters
    pub fn domain(&self) -> &Domain {
        &self.domain
    }
    pub fn domain_mut(&mut self) -> &mut Domain {
        &mut self.domain
    }
    pub fn force_field(&self) -> &ForceField {
        self.integrator.force_curve()
    }
    pub fn timestep(&self) -> f64 {
        self.timestep
    }
    pub fn scheme(&self) -> UpdateScheme {
        self.scheme
    }
    pub fn step(&self) -> usize {
        self.step
    }
    pub fn kinetic_energy(&self) -> f64 {
        compute::kinetic_energy(&self.domain)
    }
    pub fn potential_energy(&self) -> Result<f64> {
        compute::potential_energy(&self.domain, self.force_field())
    }
    pub fn total_energy(&self) -> Result<f64> {
        compute::total_energy(&self.domain, self.force_field())
    }

    // Setters
    pub fn set_scheme(&mut self, scheme: UpdateScheme) {
        self.scheme = scheme;
    }
    pub fn set_timestep(&mut self, timestep: f64) -> Result<()> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Timestep should be positive, found {}",
                timestep
            )));
        }
        self.timestep = timestep;
        Ok(())
    }
    pub fn add_monitor(&mut self, monitor: impl Monitor + 'static) {
        self.monitors.push(Box::new(monitor));
    }

    /// Advance the domain by one timestep: integrate, run monitors, fold, count.
    ///
    /// A failed integration leaves the domain and the monitors untouched. The fold
    /// only fails on a non-finite coordinate left behind by a monitor; in that case
    /// the monitors have already observed this step while the step count stays put,
    /// so a retried tick reports the same step to them again.
    pub fn tick(&mut self) -> Result<()> {
        self.integrator
            .integrate_all(&mut self.domain, self.timestep, self.scheme)?;

        let force_field = self.integrator.force_curve();
        for monitor in self.monitors.iter_mut() {
            let before = self.domain.len();
            monitor.observe(self.step, &mut self.domain, force_field)?;
            if self.domain.len() != before {
                return Err(Error::MonitorResized {
                    monitor: String::from(monitor.name()),
                    before,
                    after: self.domain.len(),
                });
            }
        }

        self.domain.fold_all()?;
        self.step += 1;
        Ok(())
    }

    /// Run `num_steps` ticks, stopping at the first error
    #[instrument(skip(self), fields(start = self.step, particles = self.domain.len()))]
    pub fn run(&mut self, num_steps: usize) -> Result<()> {
        info!(timestep = self.timestep, scheme = ?self.scheme, "starting run");
        for _ in 0..num_steps {
            if let Err(e) = self.tick() {
                warn!(step = self.step, "run stopped: {}", e);
                return Err(e);
            }
            debug!(step = self.step, "tick complete");
        }
        info!(step = self.step, "run complete");
        Ok(())
    }
}
