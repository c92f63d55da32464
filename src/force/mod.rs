pub mod constant;
pub mod ljcut;
pub mod none;
pub mod stillinger_weber;

pub use constant::ConstantForce;
pub use ljcut::LJCut;
pub use none::NoForce;
pub use stillinger_weber::{StillingerWeber, SwCoeff};

use enum_dispatch::enum_dispatch;

use crate::{Domain, Error, Result, Vector3};

/// Squared separations below this are treated as coincident particles
const MIN_SEPARATION_SQ: f64 = 1e-24;

#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum ForceField {
    LJCut,
    StillingerWeber,
    ConstantForce,
    NoForce,
}

#[enum_dispatch(ForceField)]
/// Interaction model acting on the particles of a domain
pub trait ForceCurve {
    /// Get the maximum distance for effective interaction
    fn cutoff(&self) -> f64;

    /// Net force on particle `idx` given the current state of the domain
    fn force(&self, idx: usize, domain: &Domain) -> Result<Vector3>;

    /// Share of the potential energy owned by particle `idx`.
    ///
    /// Summing the shares over every particle gives the total potential energy.
    fn potential_energy(&self, idx: usize, domain: &Domain) -> Result<f64>;

    fn total_potential_energy(&self, domain: &Domain) -> Result<f64> {
        (0..domain.len()).map(|i| self.potential_energy(i, domain)).sum()
    }
}

/// A particle within the cutoff of another
#[derive(Clone, Copy, Debug)]
pub struct Neighbor {
    pub idx: usize,
    /// Minimum-image vector pointing from the neighbor to the central particle
    pub r: Vector3,
    pub r2: f64,
}

/// Every particle closer than `cutoff` to particle `idx`, by brute-force scan.
pub fn neighbors(domain: &Domain, idx: usize, cutoff: f64) -> Result<Vec<Neighbor>> {
    let cutoff2 = cutoff * cutoff;
    let mut found = Vec::new();
    for j in 0..domain.len() {
        if j == idx {
            continue;
        }
        let r = domain.separation(idx, j);
        let r2 = r.sqr_magnitude();
        if r2 >= cutoff2 {
            continue;
        }
        if r2 < MIN_SEPARATION_SQ {
            return Err(Error::DegenerateGeometry { i: idx, j });
        }
        found.push(Neighbor { idx: j, r, r2 });
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, PeriodicBox};

    #[test]
    fn neighbors_respect_cutoff_and_images() {
        let mut domain = Domain::new(PeriodicBox::cube(10.0).unwrap());
        domain.add_particle(Atom::new("A", 1.0, Vector3::new(0.5, 5.0, 5.0)));
        domain.add_particle(Atom::new("B", 1.0, Vector3::new(9.5, 5.0, 5.0)));
        domain.add_particle(Atom::new("C", 1.0, Vector3::new(4.0, 5.0, 5.0)));

        let found = neighbors(&domain, 0, 2.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].idx, 1);
        assert_eq!(found[0].r, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn coincident_particles_are_an_error() {
        let mut domain = Domain::new(PeriodicBox::cube(10.0).unwrap());
        domain.add_particle(Atom::new("A", 1.0, Vector3::new(1.0, 1.0, 1.0)));
        domain.add_particle(Atom::new("B", 1.0, Vector3::new(1.0, 1.0, 1.0)));
        assert!(matches!(
            neighbors(&domain, 0, 2.0),
            Err(Error::DegenerateGeometry { i: 0, j: 1 })
        ));
    }
}
