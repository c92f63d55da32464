use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::Monitor;
use crate::{Domain, Error, ForceField, Result};

/// Writes an XYZ snapshot of the domain every `every` steps.
///
/// Each frame is the particle count, a `step <n>` label line and one
/// `name x y z` line per particle in domain order.
pub struct XyzWriter<W: Write> {
    writer: W,
    every: usize,
    frames: usize,
}
impl XyzWriter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>, every: usize) -> Result<Self> {
        Self::new(BufWriter::new(File::create(path)?), every)
    }
}
impl<W: Write> XyzWriter<W> {
    pub fn new(writer: W, every: usize) -> Result<Self> {
        if every == 0 {
            return Err(Error::InvalidParameter(String::from(
                "Trajectory frequency should be positive",
            )));
        }
        Ok(Self {
            writer,
            every,
            frames: 0,
        })
    }
    pub fn frames(&self) -> usize {
        self.frames
    }
    pub fn into_inner(self) -> W {
        self.writer
    }
    pub fn write_frame(&mut self, label: &str, domain: &Domain) -> Result<()> {
        writeln!(self.writer, "{}", domain.len())?;
        writeln!(self.writer, "{}", label)?;
        for p in domain.particles() {
            let pos = p.position();
            writeln!(self.writer, "{} {} {} {}", p.name(), pos.x, pos.y, pos.z)?;
        }
        self.writer.flush()?;
        self.frames += 1;
        Ok(())
    }
}
impl<W: Write> Monitor for XyzWriter<W> {
    fn name(&self) -> &str {
        "xyz"
    }
    fn observe(&mut self, step: usize, domain: &mut Domain, _force_field: &ForceField) -> Result<()> {
        if step % self.every != 0 {
            return Ok(());
        }
        self.write_frame(&format!("step {}", step), domain)
    }
}
