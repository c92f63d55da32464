use approx::assert_relative_eq;
use mdrs::{
    force::SwCoeff, Atom, ConstantForce, Domain, ForceCurve, ForceField, LJCut, NoForce, PeriodicBox,
    Simulation, StillingerWeber, UpdateScheme, Vector3,
};

fn lj_pair(r: f64) -> Domain {
    let mut domain = Domain::new(PeriodicBox::cube(20.0).unwrap());
    domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(5.0, 10.0, 10.0)));
    domain.add_particle(Atom::new("Ar", 1.0, Vector3::new(5.0 + r, 10.0, 10.0)));
    domain
}

#[test]
fn lj_pair_after_one_step() {
    let (epsilon, sigma, r, dt) = (1.0, 1.0, 1.5, 0.001);
    let lj = LJCut::new(sigma, epsilon, 3.0).unwrap();
    let mut sim = Simulation::new(lj_pair(r), lj.into(), dt).unwrap();
    sim.tick().unwrap();

    let v0 = sim.domain().particle(0).velocity();
    let v1 = sim.domain().particle(1).velocity();
    assert_eq!(v0, -v1);
    assert!(v0.x > 0.0, "particles at 1.5 sigma attract");
    assert_eq!(v0.y, 0.0);
    assert_eq!(v0.z, 0.0);

    // F(r) = 24 eps (2 sig^12 / r^13 - sig^6 / r^7), pulling particle 0 toward +x
    let f = -24.0 * epsilon * (2.0 * sigma.powi(12) / r.powi(13) - sigma.powi(6) / r.powi(7));
    let dx = sim.domain().particle(0).position().x - 5.0;
    assert_relative_eq!(dx, 0.5 * f * dt * dt, max_relative = 1e-6);
    let dx1 = sim.domain().particle(1).position().x - (5.0 + r);
    assert_relative_eq!(dx1, -dx, max_relative = 1e-6);
}

#[test]
fn lj_pair_conserves_energy() {
    let lj = LJCut::new(1.0, 1.0, 3.0).unwrap();
    let mut sim = Simulation::new(lj_pair(1.5), lj.into(), 0.001).unwrap();
    let e0 = sim.total_energy().unwrap();
    let mut max_drift: f64 = 0.0;
    for _ in 0..10_000 {
        sim.tick().unwrap();
        let e = sim.total_energy().unwrap();
        max_drift = max_drift.max(((e - e0) / e0).abs());
    }
    assert!(max_drift < 0.01, "relative energy drift {}", max_drift);
    // the pair actually oscillated
    assert!(sim.kinetic_energy() > 0.0);
}

#[test]
fn constant_force_kinematics() {
    let f = Vector3::new(0.3, 0.0, -0.6);
    let mass = 2.0;
    let dt = 0.01;
    let x0 = Vector3::new(50.0, 50.0, 50.0);
    let mut domain = Domain::new(PeriodicBox::cube(100.0).unwrap());
    domain.add_particle(Atom::new("A", mass, x0));
    let mut sim = Simulation::new(domain, ConstantForce::new(f).into(), dt).unwrap();
    let steps = 1000;
    sim.run(steps).unwrap();

    let t = steps as f64 * dt;
    let expected = x0 + f * (0.5 * t * t / mass);
    let x = sim.domain().particle(0).position();
    assert!((x - expected).magnitude() < dt * dt, "{} vs {}", x, expected);
}

#[test]
fn isolated_particle_is_scheme_independent() {
    let run = |scheme: UpdateScheme, with_partner: bool| {
        let mut domain = Domain::new(PeriodicBox::cube(20.0).unwrap());
        domain.add_particle(
            Atom::new("A", 1.0, Vector3::new(5.0, 5.0, 5.0)).with_velocity(Vector3::new(0.1, 0.2, 0.0)),
        );
        if with_partner {
            domain.add_particle(
                Atom::new("B", 1.0, Vector3::new(6.3, 5.0, 5.0)).with_velocity(Vector3::new(-0.2, 0.0, 0.1)),
            );
        }
        let lj = LJCut::new(1.0, 1.0, 2.5).unwrap();
        let mut sim = Simulation::new(domain, lj.into(), 0.002).unwrap();
        sim.set_scheme(scheme);
        sim.run(200).unwrap();
        (
            sim.domain().particle(0).position(),
            sim.domain().particle(0).velocity(),
        )
    };

    assert_eq!(
        run(UpdateScheme::Sequential, false),
        run(UpdateScheme::Synchronized, false)
    );
    assert_ne!(
        run(UpdateScheme::Sequential, true),
        run(UpdateScheme::Synchronized, true)
    );
}

#[test]
fn wrapped_pair_matches_unwrapped_pair() {
    // the same pair straddling the periodic boundary feels the same force
    let lj = LJCut::new(1.0, 1.0, 3.0).unwrap();
    let inside = lj_pair(1.3);
    let mut straddling = Domain::new(PeriodicBox::cube(20.0).unwrap());
    straddling.add_particle(Atom::new("Ar", 1.0, Vector3::new(19.4, 10.0, 10.0)));
    straddling.add_particle(Atom::new("Ar", 1.0, Vector3::new(0.7, 10.0, 10.0)));

    let a = lj.force(0, &inside).unwrap();
    let b = lj.force(0, &straddling).unwrap();
    assert_relative_eq!(a.x, b.x, max_relative = 1e-9);
}

#[test]
fn positions_stay_in_box() {
    let mut domain = Domain::new(PeriodicBox::new(6.0, 7.0, 8.0).unwrap());
    for (i, v) in [[3.0, 0.0, 0.0], [0.0, -4.0, 1.0], [-2.0, 2.0, 5.0]].iter().enumerate() {
        domain.add_particle(
            Atom::new("A", 1.0, Vector3::new(1.0 + i as f64, 3.0, 3.0)).with_velocity(Vector3::from(*v)),
        );
    }
    let mut sim = Simulation::new(domain, NoForce::new().into(), 0.05).unwrap();
    let pbox = PeriodicBox::new(6.0, 7.0, 8.0).unwrap();
    for _ in 0..500 {
        sim.tick().unwrap();
        assert!(sim.domain().particles().iter().all(|p| pbox.contains(&p.position())));
    }
}

#[test]
fn mw_cluster_conserves_energy() {
    let sw = StillingerWeber::new(SwCoeff {
        epsilon: 1.0,
        sigma: 1.0,
        ..SwCoeff::default()
    })
    .unwrap();
    let mut domain = Domain::new(PeriodicBox::cube(12.0).unwrap());
    for p in [
        [5.0, 5.0, 5.0],
        [6.1, 5.1, 5.0],
        [5.2, 6.1, 5.1],
        [5.1, 5.2, 6.1],
    ] {
        domain.add_particle(Atom::new("mW", 1.0, Vector3::from(p)));
    }
    let ff: ForceField = sw.into();
    let mut sim = Simulation::new(domain, ff, 0.0005).unwrap();
    let e0 = sim.total_energy().unwrap();
    for _ in 0..2000 {
        sim.tick().unwrap();
    }
    let e = sim.total_energy().unwrap();
    assert!(
        (e - e0).abs() < 5e-3 * e0.abs().max(1.0),
        "energy moved from {} to {}",
        e0,
        e
    );
    assert!(sim.kinetic_energy() > 0.0);
}
