use super::Lattice;
use crate::{PeriodicBox, Vector3};

/// Simple cubic lattice
#[derive(Clone, Copy, Debug)]
pub struct Cubic {
    a: f64,
}
impl Cubic {
    pub fn new(a: f64) -> Self {
        let s = Self { a };
        s.assert_positive();
        s
    }
    pub fn from_density(rho: f64) -> Self {
        let s = Self {
            a: (1.0 / rho).cbrt(),
        };
        s.assert_positive();
        s
    }
    pub fn a(&self) -> f64 {
        self.a
    }
    fn assert_positive(&self) {
        assert!(
            self.a > 0.0 && self.a.is_finite(),
            "Lattice constant should be positive, found {}",
            self.a
        );
    }
}
impl Lattice for Cubic {
    fn coords_within_box(&self, pbox: &PeriodicBox, origin: Vector3) -> Vec<Vector3> {
        let hi = [pbox.lx(), pbox.ly(), pbox.lz()];
        let nlattice: Vec<usize> = (0..3)
            .map(|i| ((hi[i] - origin[i]) / self.a).ceil().max(0.0) as usize)
            .collect();
        let mut coords = Vec::with_capacity(nlattice[0] * nlattice[1] * nlattice[2]);

        for i in 0..nlattice[0] {
            for j in 0..nlattice[1] {
                for k in 0..nlattice[2] {
                    let site = origin + Vector3::new(i as f64, j as f64, k as f64) * self.a;
                    if pbox.contains(&site) {
                        coords.push(site);
                    }
                }
            }
        }
        coords
    }
}
