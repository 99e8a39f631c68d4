use bitflags::bitflags;

use crate::bus::Bus;
use crate::error::Fault;

pub mod interrupts;
pub mod opcodes;
pub mod processor;

#[cfg(test)]
mod processor_tests;

pub const CPU_STACK_RESET: u8 = 0xFD;
pub const CPU_STACK_BASE: u16 = 0x0100;
pub const RESET_VECTOR: u16 = 0xFFFC;

bitflags! {
    /* https://www.nesdev.org/wiki/Status_flags
            7  bit  0
        ---- ----
        NV1B DIZC
        |||| ||||
        |||| |||+- Carry
        |||| ||+-- Zero
        |||| |+--- Interrupt Disable
        |||| +---- Decimal (settable but inert: the 2A03 hardwires BCD off)
        |||+------ (No CPU effect; see: the B flag)
        ||+------- (No CPU effect; always pushed as 1)
        |+-------- Overflow
        +--------- Negative
     */
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        const CARRY             = 1<<0;
        const ZERO              = 1<<1;
        const INTERRUPT_DISABLE = 1<<2;
        const DECIMAL_MODE      = 1<<3;
        const BREAK             = 1<<4;
        const UNUSED            = 1<<5;
        const OVERFLOW          = 1<<6;
        const NEGATIVE          = 1<<7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implicit, // also covers accumulator-operand forms
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    IndexedIndirect, // ($nn,X) pre-indexed
    IndirectIndexed, // ($nn),Y post-indexed
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect, // Only JMP supports this mode
    Relative, // The branch instructions exclusively use this mode
}

impl AddressingMode {
    /// Operand bytes following the opcode byte.
    pub fn operand_len(&self) -> u16 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

pub struct CPU {
    pub bus: Bus,

    pub register_a: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub stack_pointer: u8,
    pub status: Flags,
    pub program_counter: u16,

    /// Total cycles consumed since reset.
    pub cycles: u64,

    extra_cycles: u8,
    skip_pc_advance: bool,

    nmi_pending: bool,
    irq_pending: bool,

    fault: Option<Fault>,
}
