mod periodic;
pub use periodic::PeriodicBox;

use std::fmt::Debug;

use crate::{Result, Vector3};

/// Topology of the simulation domain
pub trait BoundaryGeometry: Debug {
    /// Map a position into the canonical range of the domain
    fn fold(&self, position: Vector3) -> Result<Vector3>;
    /// Minimum-image vector pointing from `b` to `a`
    fn separation(&self, a: Vector3, b: Vector3) -> Vector3;
    fn volume(&self) -> f64;
    /// Lengths of the domain along x, y and z
    fn extents(&self) -> Vector3;
}
