use mdrs::init::{fill_lattice, set_temperature};
use mdrs::monitors::{EnergyLogger, VelocityRescale, XyzWriter};
use mdrs::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let lattice = Cubic::from_density(0.8);
    let pbox = PeriodicBox::cube(8.0 * lattice.a())?;
    let mut domain = Domain::new(pbox);
    fill_lattice(&mut domain, &lattice, &pbox, Vector3::splat(0.0), "Ar", 1.0);
    set_temperature(&mut domain, 3.0, &mut rand::thread_rng())?;

    let lj = LJCut::new(1.0, 1.0, 2.5)?;
    let mut simulation = Simulation::new(domain, lj.into(), 0.005)?;
    simulation.add_monitor(VelocityRescale::new(1.5, 10)?);
    simulation.add_monitor(EnergyLogger::new(50)?);
    simulation.add_monitor(XyzWriter::create("argon.xyz", 50)?);

    println!("Start");
    simulation.run(250)
}
