//! State sinks: where each new state goes after a step
//!
//! A sink runs after the step barrier, on the driver's thread, before the next
//! step starts. It sees the whole state but usually only cares about positions.

use std::io::{self, Write};

use log::info;

use crate::simulation::states::SimulationState;

pub trait StateSink {
    fn consume(&mut self, step: u64, state: &SimulationState) -> io::Result<()>;
}

impl<F> StateSink for F
where
    F: FnMut(u64, &SimulationState) -> io::Result<()>,
{
    fn consume(&mut self, step: u64, state: &SimulationState) -> io::Result<()> {
        self(step, state)
    }
}

/// Writes `step,t,index,x,y,z` rows, one per body per step
pub struct CsvSink<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StateSink for CsvSink<W> {
    fn consume(&mut self, step: u64, state: &SimulationState) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "step,t,index,x,y,z")?;
            self.header_written = true;
        }
        for (index, b) in state.bodies.iter().enumerate() {
            let x = b.position;
            writeln!(self.out, "{step},{},{index},{},{},{}", state.t, x.x, x.y, x.z)?;
        }
        Ok(())
    }
}

/// Logs every body's position every `every` steps
pub struct LogSink {
    pub every: u64,
}

impl StateSink for LogSink {
    fn consume(&mut self, step: u64, state: &SimulationState) -> io::Result<()> {
        if self.every == 0 || step % self.every != 0 {
            return Ok(());
        }
        info!("step {step}, t = {:.4}", state.t);
        for (index, b) in state.bodies.iter().enumerate() {
            let x = b.position;
            info!("  body {index:4}: ({:12.6}, {:12.6}, {:12.6})", x.x, x.y, x.z);
        }
        Ok(())
    }
}
