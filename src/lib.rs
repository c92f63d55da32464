//! Brute-force classical molecular dynamics.
//!
//! Particles live in a [`Domain`] bounded by a [`BoundaryGeometry`]. A [`ForceCurve`]
//! gives the force on each particle and its share of the potential energy, a
//! [`VelocityVerlet`] integrator advances them, and a [`Simulation`] ties one tick
//! together: integrate, run monitors, fold back into the box.
pub mod boundary;
pub mod compute;
pub mod config;
pub mod domain;
pub mod error;
pub mod force;
pub mod init;
pub mod integrators;
pub mod lattice;
pub mod monitors;
pub mod particle;
pub mod prelude;
pub mod simulation;
pub mod vector;

pub use boundary::{BoundaryGeometry, PeriodicBox};
pub use config::{ForceCurveConfig, SimulationConfig};
pub use domain::Domain;
pub use error::{Error, Result};
pub use force::{ConstantForce, ForceCurve, ForceField, LJCut, NoForce, StillingerWeber};
pub use integrators::{Integrator, UpdateScheme, VelocityVerlet};
pub use lattice::{Cubic, Lattice};
pub use particle::{Atom, Particle};
pub use simulation::Simulation;
pub use vector::Vector3;
