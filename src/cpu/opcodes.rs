use once_cell::sync::Lazy;

use super::AddressingMode;

/// Instruction identity. Every one of the 256 opcode bytes decodes to one of
/// these tags; execution dispatches through an exhaustive match so the
/// compiler checks coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // Documented instructions
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,

    // Stable undocumented instructions
    Alr, Anc, Arr, Dcp, Isc, Las, Lax, Rla, Rra, Sax, Sbx, Slo, Sre,

    // Halts the processor
    Kil,

    // Unstable undocumented instructions (decoded but not executed)
    Ane, Lxa, Sha, Shx, Shy, Tas,
}

/// One row of the dispatch table. Data only: the mnemonic tag selects the
/// handler, `page_penalty` marks opcodes that cost one extra cycle when
/// addressing resolution crosses a page boundary.
#[derive(Debug)]
pub struct Opcode {
    pub code: u8,
    pub name: &'static str,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub cycles: u8,
    pub page_penalty: bool,
}

impl Opcode {
    const fn new(
        code: u8,
        name: &'static str,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        cycles: u8,
        page_penalty: bool,
    ) -> Self {
        Self {
            code,
            name,
            mnemonic,
            mode,
            cycles,
            page_penalty,
        }
    }
}

use AddressingMode::*;
use Mnemonic::*;

#[rustfmt::skip]
const OPCODES: &[Opcode] = &[
    // Software-defined interrupt
    Opcode::new(0x00, "BRK", Brk, Implicit, 7, false),

    // General NOP
    Opcode::new(0xEA, "NOP", Nop, Implicit, 2, false),

    // Transfers
    Opcode::new(0xAA, "TAX", Tax, Implicit, 2, false),
    Opcode::new(0xA8, "TAY", Tay, Implicit, 2, false),
    Opcode::new(0x8A, "TXA", Txa, Implicit, 2, false),
    Opcode::new(0x98, "TYA", Tya, Implicit, 2, false),
    Opcode::new(0xBA, "TSX", Tsx, Implicit, 2, false),
    Opcode::new(0x9A, "TXS", Txs, Implicit, 2, false),

    // Flags
    Opcode::new(0xF8, "SED", Sed, Implicit, 2, false),
    Opcode::new(0x78, "SEI", Sei, Implicit, 2, false),
    Opcode::new(0x38, "SEC", Sec, Implicit, 2, false),
    Opcode::new(0xD8, "CLD", Cld, Implicit, 2, false),
    Opcode::new(0x58, "CLI", Cli, Implicit, 2, false),
    Opcode::new(0x18, "CLC", Clc, Implicit, 2, false),
    Opcode::new(0xB8, "CLV", Clv, Implicit, 2, false),

    // Loads
    Opcode::new(0xA9, "LDA", Lda, Immediate,       2, false),
    Opcode::new(0xA5, "LDA", Lda, ZeroPage,        3, false),
    Opcode::new(0xB5, "LDA", Lda, ZeroPageX,       4, false),
    Opcode::new(0xAD, "LDA", Lda, Absolute,        4, false),
    Opcode::new(0xBD, "LDA", Lda, AbsoluteX,       4, true),
    Opcode::new(0xB9, "LDA", Lda, AbsoluteY,       4, true),
    Opcode::new(0xA1, "LDA", Lda, IndexedIndirect, 6, false),
    Opcode::new(0xB1, "LDA", Lda, IndirectIndexed, 5, true),

    Opcode::new(0xA2, "LDX", Ldx, Immediate, 2, false),
    Opcode::new(0xA6, "LDX", Ldx, ZeroPage,  3, false),
    Opcode::new(0xB6, "LDX", Ldx, ZeroPageY, 4, false),
    Opcode::new(0xAE, "LDX", Ldx, Absolute,  4, false),
    Opcode::new(0xBE, "LDX", Ldx, AbsoluteY, 4, true),

    Opcode::new(0xA0, "LDY", Ldy, Immediate, 2, false),
    Opcode::new(0xA4, "LDY", Ldy, ZeroPage,  3, false),
    Opcode::new(0xB4, "LDY", Ldy, ZeroPageX, 4, false),
    Opcode::new(0xAC, "LDY", Ldy, Absolute,  4, false),
    Opcode::new(0xBC, "LDY", Ldy, AbsoluteX, 4, true),

    // Stores
    Opcode::new(0x85, "STA", Sta, ZeroPage,        3, false),
    Opcode::new(0x95, "STA", Sta, ZeroPageX,       4, false),
    Opcode::new(0x8D, "STA", Sta, Absolute,        4, false),
    Opcode::new(0x9D, "STA", Sta, AbsoluteX,       5, false),
    Opcode::new(0x99, "STA", Sta, AbsoluteY,       5, false),
    Opcode::new(0x81, "STA", Sta, IndexedIndirect, 6, false),
    Opcode::new(0x91, "STA", Sta, IndirectIndexed, 6, false),

    Opcode::new(0x86, "STX", Stx, ZeroPage,  3, false),
    Opcode::new(0x96, "STX", Stx, ZeroPageY, 4, false),
    Opcode::new(0x8E, "STX", Stx, Absolute,  4, false),

    Opcode::new(0x84, "STY", Sty, ZeroPage,  3, false),
    Opcode::new(0x94, "STY", Sty, ZeroPageX, 4, false),
    Opcode::new(0x8C, "STY", Sty, Absolute,  4, false),

    // Stack
    Opcode::new(0x68, "PLA", Pla, Implicit, 4, false),
    Opcode::new(0x28, "PLP", Plp, Implicit, 4, false),
    Opcode::new(0x48, "PHA", Pha, Implicit, 3, false),
    Opcode::new(0x08, "PHP", Php, Implicit, 3, false),

    // Shifts
    Opcode::new(0x0A, "ASL", Asl, Implicit,  2, false),
    Opcode::new(0x06, "ASL", Asl, ZeroPage,  5, false),
    Opcode::new(0x16, "ASL", Asl, ZeroPageX, 6, false),
    Opcode::new(0x0E, "ASL", Asl, Absolute,  6, false),
    Opcode::new(0x1E, "ASL", Asl, AbsoluteX, 7, false),

    Opcode::new(0x4A, "LSR", Lsr, Implicit,  2, false),
    Opcode::new(0x46, "LSR", Lsr, ZeroPage,  5, false),
    Opcode::new(0x56, "LSR", Lsr, ZeroPageX, 6, false),
    Opcode::new(0x4E, "LSR", Lsr, Absolute,  6, false),
    Opcode::new(0x5E, "LSR", Lsr, AbsoluteX, 7, false),

    // Rotates
    Opcode::new(0x2A, "ROL", Rol, Implicit,  2, false),
    Opcode::new(0x26, "ROL", Rol, ZeroPage,  5, false),
    Opcode::new(0x36, "ROL", Rol, ZeroPageX, 6, false),
    Opcode::new(0x2E, "ROL", Rol, Absolute,  6, false),
    Opcode::new(0x3E, "ROL", Rol, AbsoluteX, 7, false),

    Opcode::new(0x6A, "ROR", Ror, Implicit,  2, false),
    Opcode::new(0x66, "ROR", Ror, ZeroPage,  5, false),
    Opcode::new(0x76, "ROR", Ror, ZeroPageX, 6, false),
    Opcode::new(0x6E, "ROR", Ror, Absolute,  6, false),
    Opcode::new(0x7E, "ROR", Ror, AbsoluteX, 7, false),

    // Increments
    Opcode::new(0xE6, "INC", Inc, ZeroPage,  5, false),
    Opcode::new(0xF6, "INC", Inc, ZeroPageX, 6, false),
    Opcode::new(0xEE, "INC", Inc, Absolute,  6, false),
    Opcode::new(0xFE, "INC", Inc, AbsoluteX, 7, false),

    Opcode::new(0xE8, "INX", Inx, Implicit, 2, false),
    Opcode::new(0xC8, "INY", Iny, Implicit, 2, false),

    // Decrements
    Opcode::new(0xC6, "DEC", Dec, ZeroPage,  5, false),
    Opcode::new(0xD6, "DEC", Dec, ZeroPageX, 6, false),
    Opcode::new(0xCE, "DEC", Dec, Absolute,  6, false),
    Opcode::new(0xDE, "DEC", Dec, AbsoluteX, 7, false),

    Opcode::new(0xCA, "DEX", Dex, Implicit, 2, false),
    Opcode::new(0x88, "DEY", Dey, Implicit, 2, false),

    // Comparisons
    Opcode::new(0xC9, "CMP", Cmp, Immediate,       2, false),
    Opcode::new(0xC5, "CMP", Cmp, ZeroPage,        3, false),
    Opcode::new(0xD5, "CMP", Cmp, ZeroPageX,       4, false),
    Opcode::new(0xCD, "CMP", Cmp, Absolute,        4, false),
    Opcode::new(0xDD, "CMP", Cmp, AbsoluteX,       4, true),
    Opcode::new(0xD9, "CMP", Cmp, AbsoluteY,       4, true),
    Opcode::new(0xC1, "CMP", Cmp, IndexedIndirect, 6, false),
    Opcode::new(0xD1, "CMP", Cmp, IndirectIndexed, 5, true),

    Opcode::new(0xE0, "CPX", Cpx, Immediate, 2, false),
    Opcode::new(0xE4, "CPX", Cpx, ZeroPage,  3, false),
    Opcode::new(0xEC, "CPX", Cpx, Absolute,  4, false),

    Opcode::new(0xC0, "CPY", Cpy, Immediate, 2, false),
    Opcode::new(0xC4, "CPY", Cpy, ZeroPage,  3, false),
    Opcode::new(0xCC, "CPY", Cpy, Absolute,  4, false),

    // Addition/Subtraction
    Opcode::new(0x69, "ADC", Adc, Immediate,       2, false),
    Opcode::new(0x65, "ADC", Adc, ZeroPage,        3, false),
    Opcode::new(0x75, "ADC", Adc, ZeroPageX,       4, false),
    Opcode::new(0x6D, "ADC", Adc, Absolute,        4, false),
    Opcode::new(0x7D, "ADC", Adc, AbsoluteX,       4, true),
    Opcode::new(0x79, "ADC", Adc, AbsoluteY,       4, true),
    Opcode::new(0x61, "ADC", Adc, IndexedIndirect, 6, false),
    Opcode::new(0x71, "ADC", Adc, IndirectIndexed, 5, true),

    Opcode::new(0xE9, "SBC", Sbc, Immediate,       2, false),
    Opcode::new(0xE5, "SBC", Sbc, ZeroPage,        3, false),
    Opcode::new(0xF5, "SBC", Sbc, ZeroPageX,       4, false),
    Opcode::new(0xED, "SBC", Sbc, Absolute,        4, false),
    Opcode::new(0xFD, "SBC", Sbc, AbsoluteX,       4, true),
    Opcode::new(0xF9, "SBC", Sbc, AbsoluteY,       4, true),
    Opcode::new(0xE1, "SBC", Sbc, IndexedIndirect, 6, false),
    Opcode::new(0xF1, "SBC", Sbc, IndirectIndexed, 5, true),

    // Bitwise Ops
    Opcode::new(0x29, "AND", And, Immediate,       2, false),
    Opcode::new(0x25, "AND", And, ZeroPage,        3, false),
    Opcode::new(0x35, "AND", And, ZeroPageX,       4, false),
    Opcode::new(0x2D, "AND", And, Absolute,        4, false),
    Opcode::new(0x3D, "AND", And, AbsoluteX,       4, true),
    Opcode::new(0x39, "AND", And, AbsoluteY,       4, true),
    Opcode::new(0x21, "AND", And, IndexedIndirect, 6, false),
    Opcode::new(0x31, "AND", And, IndirectIndexed, 5, true),

    Opcode::new(0x49, "EOR", Eor, Immediate,       2, false),
    Opcode::new(0x45, "EOR", Eor, ZeroPage,        3, false),
    Opcode::new(0x55, "EOR", Eor, ZeroPageX,       4, false),
    Opcode::new(0x4D, "EOR", Eor, Absolute,        4, false),
    Opcode::new(0x5D, "EOR", Eor, AbsoluteX,       4, true),
    Opcode::new(0x59, "EOR", Eor, AbsoluteY,       4, true),
    Opcode::new(0x41, "EOR", Eor, IndexedIndirect, 6, false),
    Opcode::new(0x51, "EOR", Eor, IndirectIndexed, 5, true),

    Opcode::new(0x09, "ORA", Ora, Immediate,       2, false),
    Opcode::new(0x05, "ORA", Ora, ZeroPage,        3, false),
    Opcode::new(0x15, "ORA", Ora, ZeroPageX,       4, false),
    Opcode::new(0x0D, "ORA", Ora, Absolute,        4, false),
    Opcode::new(0x1D, "ORA", Ora, AbsoluteX,       4, true),
    Opcode::new(0x19, "ORA", Ora, AbsoluteY,       4, true),
    Opcode::new(0x01, "ORA", Ora, IndexedIndirect, 6, false),
    Opcode::new(0x11, "ORA", Ora, IndirectIndexed, 5, true),

    // Jumps
    Opcode::new(0x4C, "JMP", Jmp, Absolute, 3, false),
    Opcode::new(0x6C, "JMP", Jmp, Indirect, 5, false), // 6502 page-wrap bug lives here
    Opcode::new(0x20, "JSR", Jsr, Absolute, 6, false),

    // Returns
    Opcode::new(0x60, "RTS", Rts, Implicit, 6, false),
    Opcode::new(0x40, "RTI", Rti, Implicit, 6, false),

    // Branches (+1 cycle if taken, +2 if taken to a new page)
    Opcode::new(0xD0, "BNE", Bne, Relative, 2, true),
    Opcode::new(0x70, "BVS", Bvs, Relative, 2, true),
    Opcode::new(0x50, "BVC", Bvc, Relative, 2, true),
    Opcode::new(0x30, "BMI", Bmi, Relative, 2, true),
    Opcode::new(0xF0, "BEQ", Beq, Relative, 2, true),
    Opcode::new(0xB0, "BCS", Bcs, Relative, 2, true),
    Opcode::new(0x90, "BCC", Bcc, Relative, 2, true),
    Opcode::new(0x10, "BPL", Bpl, Relative, 2, true),

    // Bit Test
    Opcode::new(0x24, "BIT", Bit, ZeroPage, 3, false),
    Opcode::new(0x2C, "BIT", Bit, Absolute, 4, false),

    /////////////////////////
    // Unofficial Opcodes
    /////////////////////////

    // Multi-byte NOPs
    Opcode::new(0x80, "*NOP", Nop, Immediate, 2, false),
    Opcode::new(0x82, "*NOP", Nop, Immediate, 2, false),
    Opcode::new(0x89, "*NOP", Nop, Immediate, 2, false),
    Opcode::new(0xC2, "*NOP", Nop, Immediate, 2, false),
    Opcode::new(0xE2, "*NOP", Nop, Immediate, 2, false),
    Opcode::new(0x04, "*NOP", Nop, ZeroPage,  3, false),
    Opcode::new(0x44, "*NOP", Nop, ZeroPage,  3, false),
    Opcode::new(0x64, "*NOP", Nop, ZeroPage,  3, false),
    Opcode::new(0x14, "*NOP", Nop, ZeroPageX, 4, false),
    Opcode::new(0x34, "*NOP", Nop, ZeroPageX, 4, false),
    Opcode::new(0x54, "*NOP", Nop, ZeroPageX, 4, false),
    Opcode::new(0x74, "*NOP", Nop, ZeroPageX, 4, false),
    Opcode::new(0xD4, "*NOP", Nop, ZeroPageX, 4, false),
    Opcode::new(0xF4, "*NOP", Nop, ZeroPageX, 4, false),
    Opcode::new(0x0C, "*NOP", Nop, Absolute,  4, false),
    Opcode::new(0x1C, "*NOP", Nop, AbsoluteX, 4, true),
    Opcode::new(0x3C, "*NOP", Nop, AbsoluteX, 4, true),
    Opcode::new(0x5C, "*NOP", Nop, AbsoluteX, 4, true),
    Opcode::new(0x7C, "*NOP", Nop, AbsoluteX, 4, true),
    Opcode::new(0xDC, "*NOP", Nop, AbsoluteX, 4, true),
    Opcode::new(0xFC, "*NOP", Nop, AbsoluteX, 4, true),

    // Single-byte NOPs
    Opcode::new(0x1A, "*NOP", Nop, Implicit, 2, false),
    Opcode::new(0x3A, "*NOP", Nop, Implicit, 2, false),
    Opcode::new(0x5A, "*NOP", Nop, Implicit, 2, false),
    Opcode::new(0x7A, "*NOP", Nop, Implicit, 2, false),
    Opcode::new(0xDA, "*NOP", Nop, Implicit, 2, false),
    Opcode::new(0xFA, "*NOP", Nop, Implicit, 2, false),

    // LAX => LDA oper + LDX oper
    Opcode::new(0xA7, "*LAX", Lax, ZeroPage,        3, false),
    Opcode::new(0xB7, "*LAX", Lax, ZeroPageY,       4, false),
    Opcode::new(0xAF, "*LAX", Lax, Absolute,        4, false),
    Opcode::new(0xBF, "*LAX", Lax, AbsoluteY,       4, true),
    Opcode::new(0xA3, "*LAX", Lax, IndexedIndirect, 6, false),
    Opcode::new(0xB3, "*LAX", Lax, IndirectIndexed, 5, true),

    // SAX => A AND X -> M
    Opcode::new(0x87, "*SAX", Sax, ZeroPage,        3, false),
    Opcode::new(0x97, "*SAX", Sax, ZeroPageY,       4, false),
    Opcode::new(0x8F, "*SAX", Sax, Absolute,        4, false),
    Opcode::new(0x83, "*SAX", Sax, IndexedIndirect, 6, false),

    // DCP => DEC oper + CMP oper
    Opcode::new(0xC7, "*DCP", Dcp, ZeroPage,        5, false),
    Opcode::new(0xD7, "*DCP", Dcp, ZeroPageX,       6, false),
    Opcode::new(0xCF, "*DCP", Dcp, Absolute,        6, false),
    Opcode::new(0xDF, "*DCP", Dcp, AbsoluteX,       7, false),
    Opcode::new(0xDB, "*DCP", Dcp, AbsoluteY,       7, false),
    Opcode::new(0xC3, "*DCP", Dcp, IndexedIndirect, 8, false),
    Opcode::new(0xD3, "*DCP", Dcp, IndirectIndexed, 8, false),

    // ISC (ISB/INS) => INC oper + SBC oper
    Opcode::new(0xE7, "*ISC", Isc, ZeroPage,        5, false),
    Opcode::new(0xF7, "*ISC", Isc, ZeroPageX,       6, false),
    Opcode::new(0xEF, "*ISC", Isc, Absolute,        6, false),
    Opcode::new(0xFF, "*ISC", Isc, AbsoluteX,       7, false),
    Opcode::new(0xFB, "*ISC", Isc, AbsoluteY,       7, false),
    Opcode::new(0xE3, "*ISC", Isc, IndexedIndirect, 8, false),
    Opcode::new(0xF3, "*ISC", Isc, IndirectIndexed, 8, false),

    // SLO => ASL oper + ORA oper
    Opcode::new(0x07, "*SLO", Slo, ZeroPage,        5, false),
    Opcode::new(0x17, "*SLO", Slo, ZeroPageX,       6, false),
    Opcode::new(0x0F, "*SLO", Slo, Absolute,        6, false),
    Opcode::new(0x1F, "*SLO", Slo, AbsoluteX,       7, false),
    Opcode::new(0x1B, "*SLO", Slo, AbsoluteY,       7, false),
    Opcode::new(0x03, "*SLO", Slo, IndexedIndirect, 8, false),
    Opcode::new(0x13, "*SLO", Slo, IndirectIndexed, 8, false),

    // RLA => ROL oper + AND oper
    Opcode::new(0x27, "*RLA", Rla, ZeroPage,        5, false),
    Opcode::new(0x37, "*RLA", Rla, ZeroPageX,       6, false),
    Opcode::new(0x2F, "*RLA", Rla, Absolute,        6, false),
    Opcode::new(0x3F, "*RLA", Rla, AbsoluteX,       7, false),
    Opcode::new(0x3B, "*RLA", Rla, AbsoluteY,       7, false),
    Opcode::new(0x23, "*RLA", Rla, IndexedIndirect, 8, false),
    Opcode::new(0x33, "*RLA", Rla, IndirectIndexed, 8, false),

    // SRE => LSR oper + EOR oper
    Opcode::new(0x47, "*SRE", Sre, ZeroPage,        5, false),
    Opcode::new(0x57, "*SRE", Sre, ZeroPageX,       6, false),
    Opcode::new(0x4F, "*SRE", Sre, Absolute,        6, false),
    Opcode::new(0x5F, "*SRE", Sre, AbsoluteX,       7, false),
    Opcode::new(0x5B, "*SRE", Sre, AbsoluteY,       7, false),
    Opcode::new(0x43, "*SRE", Sre, IndexedIndirect, 8, false),
    Opcode::new(0x53, "*SRE", Sre, IndirectIndexed, 8, false),

    // RRA => ROR oper + ADC oper
    Opcode::new(0x67, "*RRA", Rra, ZeroPage,        5, false),
    Opcode::new(0x77, "*RRA", Rra, ZeroPageX,       6, false),
    Opcode::new(0x6F, "*RRA", Rra, Absolute,        6, false),
    Opcode::new(0x7F, "*RRA", Rra, AbsoluteX,       7, false),
    Opcode::new(0x7B, "*RRA", Rra, AbsoluteY,       7, false),
    Opcode::new(0x63, "*RRA", Rra, IndexedIndirect, 8, false),
    Opcode::new(0x73, "*RRA", Rra, IndirectIndexed, 8, false),

    // ANC => A AND oper, bit(7) -> C
    Opcode::new(0x0B, "*ANC", Anc, Immediate, 2, false),
    Opcode::new(0x2B, "*ANC", Anc, Immediate, 2, false),

    // ALR => AND oper + LSR
    Opcode::new(0x4B, "*ALR", Alr, Immediate, 2, false),

    // ARR => AND oper + ROR (plus some wonky flag manipulation)
    Opcode::new(0x6B, "*ARR", Arr, Immediate, 2, false),

    // SBX (AXS) => CMP and DEX at once, sets flags like CMP
    Opcode::new(0xCB, "*SBX", Sbx, Immediate, 2, false),

    // USBC => behaves exactly like SBC immediate
    Opcode::new(0xEB, "*SBC", Sbc, Immediate, 2, false),

    // LAS (LAR) => M AND SP, store in A, X, SP
    Opcode::new(0xBB, "*LAS", Las, AbsoluteY, 4, true),

    // KIL/JAM: these freeze the processor
    Opcode::new(0x02, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x12, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x22, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x32, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x42, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x52, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x62, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x72, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0x92, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0xB2, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0xD2, "*KIL", Kil, Implicit, 2, false),
    Opcode::new(0xF2, "*KIL", Kil, Implicit, 2, false),

    // Too unstable to implement; decoded with real sizes/cycles so a stray
    // encounter still reads the right operand bytes before faulting
    Opcode::new(0x8B, "*ANE", Ane, Immediate, 2, false),
    Opcode::new(0xAB, "*LXA", Lxa, Immediate, 2, false),
    Opcode::new(0x9B, "*TAS", Tas, AbsoluteY, 5, false),
    Opcode::new(0x9C, "*SHY", Shy, AbsoluteX, 5, false),
    Opcode::new(0x9E, "*SHX", Shx, AbsoluteY, 5, false),
    Opcode::new(0x9F, "*SHA", Sha, AbsoluteY, 5, false),
    Opcode::new(0x93, "*SHA", Sha, IndirectIndexed, 6, false),
];

/// Dense dispatch table indexed by the fetched opcode byte. Total over
/// 0–255: looking up any byte always yields an entry.
pub static OPCODE_TABLE: Lazy<[&'static Opcode; 256]> = Lazy::new(|| {
    let mut table: [Option<&'static Opcode>; 256] = [None; 256];
    for opcode in OPCODES {
        assert!(
            table[opcode.code as usize].is_none(),
            "duplicate opcode entry: {:02X}",
            opcode.code
        );
        table[opcode.code as usize] = Some(opcode);
    }
    table.map(|entry| entry.expect("opcode table must cover all 256 byte values"))
});
