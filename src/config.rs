use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    force::SwCoeff, ConstantForce, Domain, Error, ForceField, LJCut, NoForce, PeriodicBox, Result,
    StillingerWeber, UpdateScheme, Vector3,
};

/// Interaction model selection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForceCurveConfig {
    LennardJones {
        sigma: f64,
        epsilon: f64,
        rcut: f64,
    },
    StillingerWeber {
        #[serde(flatten)]
        coeff: SwCoeff,
        rcut: Option<f64>,
    },
    Constant {
        force: [f64; 3],
    },
    None,
}
impl ForceCurveConfig {
    pub fn build(&self) -> Result<ForceField> {
        Ok(match self {
            ForceCurveConfig::LennardJones {
                sigma,
                epsilon,
                rcut,
            } => LJCut::new(*sigma, *epsilon, *rcut)?.into(),
            ForceCurveConfig::StillingerWeber { coeff, rcut } => {
                let sw = StillingerWeber::new(*coeff)?;
                match rcut {
                    Some(rcut) => sw.with_cutoff(*rcut).into(),
                    None => sw.into(),
                }
            }
            ForceCurveConfig::Constant { force } => ConstantForce::new(Vector3::from(*force)).into(),
            ForceCurveConfig::None => NoForce::new().into(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThermostatConfig {
    pub temperature: f64,
    pub every: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Energy log frequency
    pub every: usize,
    /// Optional XYZ trajectory, written at the same frequency
    pub xyz: Option<String>,
}

/// Run parameters, usually read from a TOML file.
///
/// ```toml
/// timestep = 0.005
/// scheme = "synchronized"
/// box_lengths = [10.0, 10.0, 10.0]
///
/// [force]
/// kind = "lennard_jones"
/// sigma = 1.0
/// epsilon = 1.0
/// rcut = 2.5
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub timestep: f64,
    #[serde(default)]
    pub scheme: UpdateScheme,
    pub box_lengths: [f64; 3],
    pub force: ForceCurveConfig,
    pub thermostat: Option<ThermostatConfig>,
    pub output: Option<OutputConfig>,
}
impl SimulationConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
    pub fn validate(&self) -> Result<()> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Timestep should be positive, found {}",
                self.timestep
            )));
        }
        if let Some(t) = &self.thermostat {
            if t.every == 0 {
                return Err(Error::InvalidParameter(String::from(
                    "thermostat.every should be positive",
                )));
            }
        }
        if let Some(o) = &self.output {
            if o.every == 0 {
                return Err(Error::InvalidParameter(String::from(
                    "output.every should be positive",
                )));
            }
        }
        self.geometry()?;
        self.force.build()?;
        Ok(())
    }
    pub fn geometry(&self) -> Result<PeriodicBox> {
        let [lx, ly, lz] = self.box_lengths;
        PeriodicBox::new(lx, ly, lz)
    }
    /// Empty domain with the configured geometry
    pub fn build_domain(&self) -> Result<Domain> {
        Ok(Domain::new(self.geometry()?))
    }
}
