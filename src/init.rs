//! Initial conditions: particle placement and velocity assignment.
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::info;

use crate::{compute, Atom, BoundaryGeometry, Domain, Error, Lattice, PeriodicBox, Result, Vector3};

/// Add one atom of the given name and mass on every lattice site in the box
pub fn fill_lattice(
    domain: &mut Domain,
    lattice: &impl Lattice,
    pbox: &PeriodicBox,
    origin: Vector3,
    name: &str,
    mass: f64,
) -> usize {
    let coords = lattice.coords_within_box(pbox, origin);
    let num_atoms = coords.len();
    for c in coords {
        domain.add_particle(Atom::new(name, mass, c));
    }
    info!(num_atoms, name, "placed atoms on lattice");
    num_atoms
}

/// Uniformly random position inside the canonical range of the geometry
pub fn random_position<R: Rng>(geometry: &dyn BoundaryGeometry, rng: &mut R) -> Vector3 {
    let l = geometry.extents();
    Vector3::new(
        rng.gen::<f64>() * l.x,
        rng.gen::<f64>() * l.y,
        rng.gen::<f64>() * l.z,
    )
}

/// Add atoms at random positions, rejecting any site closer than `min_distance` to an
/// existing particle. Gives up after `100 * num_atoms` attempts.
pub fn add_random_atoms<R: Rng>(
    domain: &mut Domain,
    num_atoms: usize,
    name: &str,
    mass: f64,
    min_distance: f64,
    rng: &mut R,
) -> Result<()> {
    let min_d2 = min_distance * min_distance;
    let max_attempts = 100 * num_atoms.max(1);
    let mut placed = 0;
    let mut attempts = 0;
    while placed < num_atoms {
        if attempts == max_attempts {
            return Err(Error::InvalidParameter(format!(
                "could only place {} of {} atoms {} apart",
                placed, num_atoms, min_distance
            )));
        }
        attempts += 1;
        let candidate = random_position(domain.geometry(), rng);
        let clear = domain.particles().iter().all(|p| {
            domain
                .geometry()
                .separation(candidate, p.position())
                .sqr_magnitude()
                >= min_d2
        });
        if clear {
            domain.add_particle(Atom::new(name, mass, candidate));
            placed += 1;
        }
    }
    info!(num_atoms, attempts, "placed random atoms");
    Ok(())
}

/// Draw velocities from the Maxwell-Boltzmann distribution at `temperature`
/// (reduced units, k_B = 1), then remove the net momentum.
pub fn set_temperature<R: Rng>(domain: &mut Domain, temperature: f64, rng: &mut R) -> Result<()> {
    let dist = Normal::new(0.0, temperature.sqrt())
        .map_err(|_| Error::InvalidParameter(format!("Invalid temperature {}", temperature)))?;
    for p in domain.particles_mut() {
        if p.is_fixed() {
            continue;
        }
        let inv_sqrt_m = 1.0 / p.mass().sqrt();
        let vel = Vector3::new(dist.sample(rng), dist.sample(rng), dist.sample(rng)) * inv_sqrt_m;
        p.set_velocity(vel);
    }
    zero_momentum(domain);
    Ok(())
}

/// Shift free velocities so the domain has no net momentum
pub fn zero_momentum(domain: &mut Domain) {
    let free_mass: f64 = domain
        .particles()
        .iter()
        .filter(|p| !p.is_fixed())
        .map(|p| p.mass())
        .sum();
    if free_mass == 0.0 {
        return;
    }
    let drift = compute::momentum(domain) / free_mass;
    for p in domain.particles_mut() {
        if p.is_fixed() {
            continue;
        }
        let vel = p.velocity() - drift;
        p.set_velocity(vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cubic;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_atoms_keep_their_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut domain = Domain::new(PeriodicBox::cube(10.0).unwrap());
        add_random_atoms(&mut domain, 20, "Ar", 1.0, 1.0, &mut rng).unwrap();
        assert_eq!(domain.len(), 20);
        for i in 0..domain.len() {
            for j in (i + 1)..domain.len() {
                assert!(domain.separation(i, j).magnitude() >= 1.0);
            }
        }
    }

    #[test]
    fn overfull_box_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut domain = Domain::new(PeriodicBox::cube(2.0).unwrap());
        assert!(add_random_atoms(&mut domain, 50, "Ar", 1.0, 1.0, &mut rng).is_err());
    }

    #[test]
    fn maxwell_boltzmann_has_no_drift() {
        let mut rng = StdRng::seed_from_u64(42);
        let pbox = PeriodicBox::cube(8.0).unwrap();
        let mut domain = Domain::new(pbox);
        fill_lattice(&mut domain, &Cubic::new(1.0), &pbox, Vector3::splat(0.5), "Ar", 2.0);
        set_temperature(&mut domain, 1.5, &mut rng).unwrap();

        assert!(compute::momentum(&domain).magnitude() < 1e-10);
        let t = compute::temperature(&domain);
        assert!((t - 1.5).abs() < 0.2, "temperature {}", t);
    }

    #[test]
    fn negative_temperature_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut domain = Domain::new(PeriodicBox::cube(8.0).unwrap());
        domain.add_particle(Atom::new("Ar", 1.0, Vector3::splat(1.0)));
        assert!(set_temperature(&mut domain, -1.0, &mut rng).is_err());
    }
}
