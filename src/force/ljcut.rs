use serde::{Deserialize, Serialize};

use super::{neighbors, ForceCurve};
use crate::{Domain, Error, Result, Vector3};

/// Lennard-Jones 12-6 potential, truncated at `rcut`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LJCut {
    sigma: f64,
    epsilon: f64,
    rcut: f64,
}
impl LJCut {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Result<Self> {
        if !(sigma > 0.0 && epsilon >= 0.0 && rcut > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "LJ needs sigma > 0, epsilon >= 0 and rcut > 0, found sigma = {}, epsilon = {}, rcut = {}",
                sigma, epsilon, rcut
            )));
        }
        Ok(Self {
            sigma,
            epsilon,
            rcut,
        })
    }
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
    /// Separation at which the pair force vanishes
    pub fn r_min(&self) -> f64 {
        self.sigma * 2f64.powf(1.0 / 6.0)
    }
    fn sr6(&self, r2: f64) -> f64 {
        let sr2 = self.sigma * self.sigma / r2;
        sr2 * sr2 * sr2
    }
}

impl ForceCurve for LJCut {
    fn cutoff(&self) -> f64 {
        self.rcut
    }
    fn force(&self, idx: usize, domain: &Domain) -> Result<Vector3> {
        // U(r) = 4 eps ((sig/r)^12 - (sig/r)^6)
        // f(r) = -dU/dr = 24 eps / r (2(sig/r)^12 - (sig/r)^6)
        // r points from the neighbor to idx, so a positive f(r) is repulsive
        let mut force = Vector3::splat(0.0);
        for nb in neighbors(domain, idx, self.rcut)? {
            let sr6 = self.sr6(nb.r2);
            let sr12 = sr6 * sr6;
            let f_mag = 24.0 * self.epsilon * (2.0 * sr12 - sr6) / nb.r2;
            force += nb.r * f_mag;
        }
        Ok(force)
    }
    fn potential_energy(&self, idx: usize, domain: &Domain) -> Result<f64> {
        // each endpoint of a pair owns half of 4 eps (...)
        Ok(neighbors(domain, idx, self.rcut)?
            .iter()
            .map(|nb| {
                let sr6 = self.sr6(nb.r2);
                2.0 * self.epsilon * (sr6 * sr6 - sr6)
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, PeriodicBox};
    use approx::assert_relative_eq;

    fn pair(r: f64) -> Domain {
        let mut domain = Domain::new(PeriodicBox::cube(20.0).unwrap());
        domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(5.0, 5.0, 5.0)));
        domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(5.0 + r, 5.0, 5.0)));
        domain
    }

    #[test]
    fn force_vanishes_at_minimum() {
        let lj = LJCut::new(1.0, 1.0, 3.0).unwrap();
        let domain = pair(lj.r_min());
        let f = lj.force(0, &domain).unwrap();
        assert!(f.magnitude() < 1e-10, "force at r_min = {}", f);
    }

    #[test]
    fn potential_minimum_is_minus_epsilon() {
        let lj = LJCut::new(1.0, 2.5, 3.0).unwrap();
        let domain = pair(lj.r_min());
        assert_relative_eq!(lj.potential_energy(0, &domain).unwrap(), -1.25, epsilon = 1e-12);
        assert_relative_eq!(lj.total_potential_energy(&domain).unwrap(), -2.5, epsilon = 1e-12);

        for r in [1.05, 1.2, 1.5] {
            let e = lj.total_potential_energy(&pair(r)).unwrap();
            assert!(e > -2.5);
        }
    }

    #[test]
    fn force_is_repulsive_inside_minimum() {
        let lj = LJCut::new(1.0, 1.0, 3.0).unwrap();
        let domain = pair(1.0);
        let f0 = lj.force(0, &domain).unwrap();
        let f1 = lj.force(1, &domain).unwrap();
        assert_relative_eq!(f0.x, -24.0, epsilon = 1e-12);
        assert_eq!(f0, -f1);
    }

    #[test]
    fn force_matches_energy_gradient() {
        let lj = LJCut::new(1.0, 1.0, 3.0).unwrap();
        let mut domain = Domain::new(PeriodicBox::cube(20.0).unwrap());
        domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(5.0, 5.0, 5.0)));
        domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(6.2, 5.3, 4.9)));
        domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(5.4, 6.1, 5.6)));

        let h = 1e-6;
        let analytic = lj.force(0, &domain).unwrap();
        let origin = domain.particle(0).position();
        for axis in 0..3 {
            let mut step = [0.0; 3];
            step[axis] = h;
            let step = Vector3::from(step);
            domain.particle_mut(0).set_position(origin + step);
            let up = lj.total_potential_energy(&domain).unwrap();
            domain.particle_mut(0).set_position(origin - step);
            let down = lj.total_potential_energy(&domain).unwrap();
            domain.particle_mut(0).set_position(origin);
            let numeric = -(up - down) / (2.0 * h);
            assert_relative_eq!(analytic[axis], numeric, epsilon = 1e-5, max_relative = 1e-5);
        }
    }

    #[test]
    fn particles_beyond_cutoff_do_not_interact() {
        let lj = LJCut::new(1.0, 1.0, 2.5).unwrap();
        let domain = pair(2.6);
        assert_eq!(lj.force(0, &domain).unwrap(), Vector3::splat(0.0));
        assert_eq!(lj.potential_energy(0, &domain).unwrap(), 0.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(LJCut::new(0.0, 1.0, 2.5).is_err());
        assert!(LJCut::new(1.0, -1.0, 2.5).is_err());
        assert!(LJCut::new(1.0, 1.0, 0.0).is_err());
    }
}
