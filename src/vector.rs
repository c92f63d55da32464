use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Three-component vector used for positions, velocities and forces
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
    pub fn sqr_magnitude(&self) -> f64 {
        self.dot(self)
    }
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }
    /// Direction of this vector. A zero vector has no direction and is an error.
    pub fn unit(&self) -> Result<Vector3> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return Err(Error::ZeroVector);
        }
        Ok(*self / mag)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
    /// Angle between two vectors in radians.
    ///
    /// ```rust
    /// use mdrs::Vector3;
    ///
    /// let a = Vector3::new(1.0, 0.0, 0.0);
    /// let b = Vector3::new(0.0, 2.0, 0.0);
    /// let theta = Vector3::angle(&a, &b).unwrap();
    /// assert!((theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle(a: &Vector3, b: &Vector3) -> Result<f64> {
        let denom = a.magnitude() * b.magnitude();
        if denom == 0.0 {
            return Err(Error::ZeroVector);
        }
        // rounding can push the cosine just past +-1
        Ok((a.dot(b) / denom).clamp(-1.0, 1.0).acos())
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::splat(0.0)
    }
    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", index),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(value: [f64; 3]) -> Self {
        Vector3::new(value[0], value[1], value[2])
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Mul for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}
impl Div for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}
impl Add<f64> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}
impl Sub<f64> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}
impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}
impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}
impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}
impl std::iter::Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector3::zero(), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::splat(3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn magnitude_and_unit() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        assert_eq!(v.sqr_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        let u = v.unit().unwrap();
        assert_relative_eq!(u.magnitude(), 1.0);
        assert_relative_eq!(u.x, 0.6);
    }

    #[test]
    fn unit_of_zero_vector_is_error() {
        assert!(matches!(Vector3::zero().unit(), Err(Error::ZeroVector)));
    }

    #[test]
    fn angle_clamps_parallel_vectors() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let b = a * 3.0;
        let theta = Vector3::angle(&a, &b).unwrap();
        assert!(theta.is_finite());
        assert!(theta.abs() < 1e-6);

        let theta = Vector3::angle(&a, &-b).unwrap();
        assert_relative_eq!(theta, std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_is_error() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        assert!(Vector3::angle(&a, &Vector3::zero()).is_err());
    }

    #[test]
    fn cross_product() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    }
}
