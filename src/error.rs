use thiserror::Error;

/// Execution-time faults. Any of these halts the CPU in a terminal state:
/// emulation is deterministic, so a fault means an unsupported program or a
/// wiring bug, never a transient condition worth retrying.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("unmapped bus address ${0:04X}")]
    UnmappedAddress(u16),

    #[error("unimplemented instruction ${0:02X}")]
    UnimplementedInstruction(u8),

    #[error("KIL/JAM opcode ${0:02X} halted the CPU")]
    Jam(u8),
}
