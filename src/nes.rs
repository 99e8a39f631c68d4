use crate::bus::Bus;
use crate::cpu::CPU;
use crate::error::Fault;
use crate::rom::{Rom, RomError};

/// Host-facing shell: wires a parsed cartridge into a bus and CPU, then
/// advances the machine one instruction per `step` call. Owns no emulation
/// logic of its own.
pub struct Nes {
    pub cpu: CPU,
}

impl Nes {
    pub fn from_ines(bytes: &[u8]) -> Result<Nes, RomError> {
        let mapper = Rom::parse(bytes)?.into_mapper()?;
        Ok(Nes {
            cpu: CPU::new(Bus::new(mapper)),
        })
    }

    pub fn reset(&mut self) -> Result<(), Fault> {
        self.cpu.reset()
    }

    /// Run one instruction; returns the cycles it consumed.
    pub fn step(&mut self) -> Result<u8, Fault> {
        self.cpu.step()
    }
}
