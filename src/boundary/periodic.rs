use serde::{Deserialize, Serialize};

use super::BoundaryGeometry;
use crate::{Error, Result, Vector3};

/// Fully periodic orthorhombic box with its lower corner at the origin.
///
/// The canonical range is `[0, lx) x [0, ly) x [0, lz)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodicBox {
    lengths: [f64; 3],
}
impl PeriodicBox {
    pub fn new(lx: f64, ly: f64, lz: f64) -> Result<Self> {
        for (axis, l) in [lx, ly, lz].iter().enumerate() {
            if !(l.is_finite() && *l > 0.0) {
                return Err(Error::InvalidParameter(format!(
                    "box length along axis {} should be positive, found {}",
                    axis, l
                )));
            }
        }
        Ok(Self {
            lengths: [lx, ly, lz],
        })
    }
    pub fn cube(l: f64) -> Result<Self> {
        Self::new(l, l, l)
    }
    pub fn lx(&self) -> f64 {
        self.lengths[0]
    }
    pub fn ly(&self) -> f64 {
        self.lengths[1]
    }
    pub fn lz(&self) -> f64 {
        self.lengths[2]
    }
    pub fn contains(&self, coord: &Vector3) -> bool {
        (0..3).all(|i| 0.0 <= coord[i] && coord[i] < self.lengths[i])
    }

    fn fold_axis(&self, axis: usize, coord: f64) -> Result<f64> {
        if !coord.is_finite() {
            return Err(Error::NonFiniteCoordinate { axis, coord });
        }
        let l = self.lengths[axis];
        let folded = coord.rem_euclid(l);
        // rem_euclid of a tiny negative value rounds up to exactly l
        Ok(if folded >= l { 0.0 } else { folded })
    }
}
impl BoundaryGeometry for PeriodicBox {
    fn fold(&self, position: Vector3) -> Result<Vector3> {
        Ok(Vector3::new(
            self.fold_axis(0, position.x)?,
            self.fold_axis(1, position.y)?,
            self.fold_axis(2, position.z)?,
        ))
    }
    fn separation(&self, a: Vector3, b: Vector3) -> Vector3 {
        let d = a - b;
        let mut r = [d.x, d.y, d.z];
        for (i, ri) in r.iter_mut().enumerate() {
            let l = self.lengths[i];
            if *ri > 0.5 * l {
                *ri -= l;
            } else if *ri < -0.5 * l {
                *ri += l;
            }
        }
        Vector3::from(r)
    }
    fn volume(&self) -> f64 {
        self.lengths.iter().product()
    }
    fn extents(&self) -> Vector3 {
        Vector3::from(self.lengths)
    }
}
