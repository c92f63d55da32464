mod cubic;

pub use cubic::Cubic;

use crate::{PeriodicBox, Vector3};

/// Regular arrangement of sites used to seed initial positions
pub trait Lattice {
    /// Every lattice site inside the box, starting from `origin`
    fn coords_within_box(&self, pbox: &PeriodicBox, origin: Vector3) -> Vec<Vector3>;
}
