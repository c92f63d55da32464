pub use super::boundary::{BoundaryGeometry, PeriodicBox};
pub use super::compute::Compute;
pub use super::domain::Domain;
pub use super::force::{ForceCurve, ForceField};
pub use super::integrators::{Integrator, UpdateScheme};
pub use super::lattice::Lattice;
pub use super::monitors::Monitor;
pub use super::particle::Particle;
pub use super::simulation::Simulation;
pub use super::vector::Vector3;
