use super::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    name: String,
    mass: f64,
    charge: f64,
    position: Vector3,
    velocity: Vector3,
    fixed: bool,
}
impl Atom {
    pub fn new(name: &str, mass: f64, position: Vector3) -> Self {
        assert!(mass > 0.0, "Mass should be positive, found {}", mass);
        Self {
            name: String::from(name),
            mass,
            charge: 0.0,
            position,
            velocity: Vector3::splat(0.0),
            fixed: false,
        }
    }
    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }
    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}
impl Particle for Atom {
    fn name(&self) -> &str {
        &self.name
    }
    fn mass(&self) -> f64 {
        self.mass
    }
    fn charge(&self) -> f64 {
        self.charge
    }
    fn position(&self) -> Vector3 {
        self.position
    }
    fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }
    fn velocity(&self) -> Vector3 {
        self.velocity
    }
    fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }
    fn is_fixed(&self) -> bool {
        self.fixed
    }
    fn clone_particle(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}
