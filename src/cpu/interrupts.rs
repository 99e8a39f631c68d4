// See: https://www.nesdev.org/wiki/CPU_interrupts

/// An external interrupt source: where the handler vector lives and how the
/// pushed status byte is shaped. The B flag in the pushed copy is the only
/// way the handler can tell a software BRK from a hardware interrupt.
pub struct Interrupt {
    pub vector: u16,
    pub sets_break: bool,
    pub cycles: u8,
}

pub const NMI: Interrupt = Interrupt {
    vector: 0xFFFA,
    sets_break: false,
    cycles: 7,
};

pub const IRQ: Interrupt = Interrupt {
    vector: 0xFFFE,
    sets_break: false,
    cycles: 7,
};

/// BRK shares the IRQ vector but pushes with the B flag set.
pub const BRK_VECTOR: u16 = 0xFFFE;
