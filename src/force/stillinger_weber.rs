use serde::{Deserialize, Serialize};

use super::{neighbors, ForceCurve, Neighbor};
use crate::{Domain, Error, Result, Vector3};

/// Pairs closer than this many sigma to the singular radius lie outside the envelope
const ENVELOPE_TOL: f64 = 1e-12;

/// Stillinger-Weber coefficients. The defaults are the monatomic water (mW) model
/// with energies in kcal/mol and lengths in angstrom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwCoeff {
    pub epsilon: f64,
    pub sigma: f64,
    /// Reduced cutoff; the envelope diverges at `a * sigma`
    pub a: f64,
    pub big_a: f64,
    pub big_b: f64,
    /// Strength of the three-body term
    pub lambda: f64,
    pub gamma: f64,
    pub theta0_degrees: f64,
}
impl Default for SwCoeff {
    fn default() -> Self {
        Self {
            epsilon: 6.189,
            sigma: 2.3925,
            a: 1.8,
            big_a: 7.049556277,
            big_b: 0.6022245584,
            lambda: 23.15,
            gamma: 1.2,
            theta0_degrees: 109.47,
        }
    }
}

/// Stillinger-Weber potential: an enveloped two-body repulsion plus a three-body term
/// penalizing deviation from the reference angle.
///
/// ```text
/// phi2(r)     = A eps (B (sig/r)^4 - 1) exp(sig / (r - a sig))
/// phi3(r,s,t) = lambda eps (cos t - cos t0)^2 exp(gamma sig / (r - a sig)) exp(gamma sig / (s - a sig))
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StillingerWeber {
    coeff: SwCoeff,
    rcut: f64,
    cos_theta0: f64,
}
impl StillingerWeber {
    pub fn new(coeff: SwCoeff) -> Result<Self> {
        let positive = [
            coeff.epsilon,
            coeff.sigma,
            coeff.a,
            coeff.big_a,
            coeff.gamma,
        ];
        if positive.iter().any(|&v| !(v.is_finite() && v > 0.0)) || coeff.lambda < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Stillinger-Weber coefficients out of range: {:?}",
                coeff
            )));
        }
        Ok(Self {
            coeff,
            rcut: coeff.a * coeff.sigma,
            cos_theta0: coeff.theta0_degrees.to_radians().cos(),
        })
    }
    pub fn mw_water() -> Self {
        let coeff = SwCoeff::default();
        Self {
            coeff,
            rcut: coeff.a * coeff.sigma,
            cos_theta0: coeff.theta0_degrees.to_radians().cos(),
        }
    }
    /// Override the neighbor cutoff. Any pair found at or beyond `a * sigma` is
    /// reported as [`Error::SingularPotential`] during evaluation.
    pub fn with_cutoff(mut self, rcut: f64) -> Self {
        self.rcut = rcut;
        self
    }
    pub fn coeff(&self) -> &SwCoeff {
        &self.coeff
    }
    pub fn singular_radius(&self) -> f64 {
        self.coeff.a * self.coeff.sigma
    }

    /// `1 / (r - a sig)`, which must stay negative
    fn inverse_gap(&self, r: f64, i: usize, j: usize) -> Result<f64> {
        let gap = r - self.singular_radius();
        if gap >= 0.0 {
            return Err(Error::SingularPotential {
                i,
                j,
                r,
                singular_radius: self.singular_radius(),
            });
        }
        Ok(1.0 / gap)
    }

    /// Neighbors of `idx` inside the envelope, with their inverse gaps
    fn envelope_neighbors(&self, domain: &Domain, idx: usize) -> Result<(Vec<Neighbor>, Vec<f64>)> {
        let edge = self.singular_radius() - ENVELOPE_TOL * self.coeff.sigma;
        let mut kept = Vec::new();
        let mut gaps = Vec::new();
        for nb in neighbors(domain, idx, self.rcut)? {
            let r = nb.r2.sqrt();
            let inv_gap = self.inverse_gap(r, idx, nb.idx)?;
            if r >= edge {
                continue;
            }
            kept.push(nb);
            gaps.push(inv_gap);
        }
        Ok((kept, gaps))
    }

    /// Two-body energy and its derivative with respect to r
    fn pair(&self, r: f64, inv_gap: f64) -> (f64, f64) {
        let c = &self.coeff;
        let sr = c.sigma / r;
        let sr4 = sr * sr * sr * sr;
        let envelope = (c.sigma * inv_gap).exp();
        let pref = c.big_a * c.epsilon * envelope;
        let energy = pref * (c.big_b * sr4 - 1.0);
        let de_dr = pref * (-4.0 * c.big_b * sr4 / r - (c.big_b * sr4 - 1.0) * c.sigma * inv_gap * inv_gap);
        (energy, de_dr)
    }

    /// Three-body energy of the legs `u` and `w` leaving a shared vertex, with its
    /// gradients with respect to `u` and `w`.
    fn triplet(
        &self,
        u: Vector3,
        inv_gap_u: f64,
        w: Vector3,
        inv_gap_w: f64,
    ) -> Result<(f64, Vector3, Vector3)> {
        let c = &self.coeff;
        let r = u.magnitude();
        let s = w.magnitude();
        let cos_theta = Vector3::angle(&u, &w)?.cos();
        let dcos = cos_theta - self.cos_theta0;

        let gs = c.gamma * c.sigma;
        let g_u = (gs * inv_gap_u).exp();
        let g_w = (gs * inv_gap_w).exp();
        let dg_u = -g_u * gs * inv_gap_u * inv_gap_u;
        let dg_w = -g_w * gs * inv_gap_w * inv_gap_w;

        let le = c.lambda * c.epsilon;
        let energy = le * dcos * dcos * g_u * g_w;

        let dcos_du = w / (r * s) - u * (cos_theta / (r * r));
        let dcos_dw = u / (r * s) - w * (cos_theta / (s * s));
        let grad_u = (dcos_du * (2.0 * dcos * g_u * g_w) + u * (dcos * dcos * dg_u * g_w / r)) * le;
        let grad_w = (dcos_dw * (2.0 * dcos * g_u * g_w) + w * (dcos * dcos * g_u * dg_w / s)) * le;
        Ok((energy, grad_u, grad_w))
    }
}

impl ForceCurve for StillingerWeber {
    fn cutoff(&self) -> f64 {
        self.rcut
    }
    fn force(&self, idx: usize, domain: &Domain) -> Result<Vector3> {
        let (nbs, gaps) = self.envelope_neighbors(domain, idx)?;

        let mut force = Vector3::splat(0.0);
        for (nb, &inv_gap) in nbs.iter().zip(&gaps) {
            let r = nb.r2.sqrt();
            let (_, de_dr) = self.pair(r, inv_gap);
            force -= nb.r * (de_dr / r);
        }

        // idx as the vertex of the angle
        for a in 0..nbs.len() {
            for b in (a + 1)..nbs.len() {
                let (_, grad_u, grad_w) = self.triplet(-nbs[a].r, gaps[a], -nbs[b].r, gaps[b])?;
                force += grad_u + grad_w;
            }
        }

        // idx as one leg of an angle centered on a neighbor
        for (nb, &inv_gap) in nbs.iter().zip(&gaps) {
            let (others, other_gaps) = self.envelope_neighbors(domain, nb.idx)?;
            for (other, &other_gap) in others.iter().zip(&other_gaps) {
                if other.idx == idx {
                    continue;
                }
                let (_, grad_u, _) = self.triplet(nb.r, inv_gap, -other.r, other_gap)?;
                force -= grad_u;
            }
        }
        Ok(force)
    }
    fn potential_energy(&self, idx: usize, domain: &Domain) -> Result<f64> {
        let (nbs, gaps) = self.envelope_neighbors(domain, idx)?;
        let mut energy = 0.0;
        for (nb, &inv_gap) in nbs.iter().zip(&gaps) {
            // shared with the other end of the pair
            energy += 0.5 * self.pair(nb.r2.sqrt(), inv_gap).0;
        }
        for a in 0..nbs.len() {
            for b in (a + 1)..nbs.len() {
                energy += self.triplet(-nbs[a].r, gaps[a], -nbs[b].r, gaps[b])?.0;
            }
        }
        Ok(energy)
    }
}
