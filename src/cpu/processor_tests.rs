use super::opcodes::OPCODE_TABLE;
use super::{Flags, CPU, CPU_STACK_RESET};
use crate::bus::Bus;
use crate::cartridge::nrom::NromCart;
use crate::error::Fault;

fn cpu_with_prg(prg: Vec<u8>) -> CPU {
    let cart = NromCart::new(prg, vec![]);
    let mut cpu = CPU::new(Bus::new(Box::new(cart)));
    cpu.reset().unwrap();
    cpu
}

/// 32K PRG with `program` at $8000, reset vector -> $8000,
/// IRQ/BRK vector -> $9000, NMI vector -> $A000.
fn cpu_with_program(program: &[u8]) -> CPU {
    let mut prg = vec![0u8; 0x8000];
    prg[..program.len()].copy_from_slice(program);
    prg[0x7FFC] = 0x00;
    prg[0x7FFD] = 0x80;
    prg[0x7FFE] = 0x00;
    prg[0x7FFF] = 0x90;
    prg[0x7FFA] = 0x00;
    prg[0x7FFB] = 0xA0;
    cpu_with_prg(prg)
}

#[test]
fn test_opcode_table_is_total() {
    for code in 0..=255u8 {
        let entry = OPCODE_TABLE[code as usize];
        assert_eq!(entry.code, code, "entry {:02X} indexed under wrong byte", code);
        assert!(entry.cycles > 0, "opcode {:02X} has zero base cycles", code);
    }
}

#[test]
fn test_reset_state() {
    let cpu = cpu_with_program(&[]);
    assert_eq!(cpu.stack_pointer, CPU_STACK_RESET);
    assert!(cpu.status.contains(Flags::UNUSED));
    assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));
    assert_eq!(cpu.register_a, 0);
    assert_eq!(cpu.register_x, 0);
    assert_eq!(cpu.register_y, 0);
    assert_eq!(cpu.program_counter, 0x8000);
    assert_eq!(cpu.cycles, 0);
}

#[test]
fn test_lda_immediate_load_data() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA immediate
        0x05, //    with $05
    ]);
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x05);
    assert!(!cpu.status.contains(Flags::ZERO));
    assert!(!cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_lda_zero_flag() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA immediate
        0x00, //    with $00
    ]);
    cpu.step().unwrap();
    assert!(cpu.status.contains(Flags::ZERO));
}

#[test]
fn test_lda_negative_flag() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA immediate
        0x80, //    with $80
    ]);
    cpu.step().unwrap();
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = cpu_with_program(&[
        0xA5, // LDA zero page
        0x05, //    from $05
    ]);
    cpu.bus.write(0x05, 0x42).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x42);
}

#[test]
fn test_zero_page_x_wraps_within_page_zero() {
    let mut cpu = cpu_with_program(&[
        0xA2, // LDX immediate
        0x01, //    with $01
        0xB5, // LDA zero page,X
        0xFF, //    base $FF + X wraps to $00
    ]);
    cpu.bus.write(0x00, 0x42).unwrap();
    cpu.bus.write(0xFF, 0x99).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x42);
}

#[test]
fn test_indexed_indirect_pointer_wraps_in_page_zero() {
    let mut cpu = cpu_with_program(&[
        0xA2, // LDX immediate
        0x01, //    with $01
        0xA1, // LDA (indirect,X)
        0xFE, //    $FE + X = $FF; pointer bytes at $FF and $00
    ]);
    cpu.bus.write(0xFF, 0x34).unwrap(); // pointer low
    cpu.bus.write(0x00, 0x02).unwrap(); // pointer high, wrapped
    cpu.bus.write(0x0234, 0x42).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x42);
}

#[test]
fn test_indirect_jmp_page_wrap_defect() {
    let mut cpu = cpu_with_program(&[
        0x6C, // JMP indirect
        0xFF, //    pointer at $02FF:
        0x02, //    high byte must come from $0200, not $0300
    ]);
    cpu.bus.write(0x02FF, 0x34).unwrap();
    cpu.bus.write(0x0200, 0x12).unwrap();
    cpu.bus.write(0x0300, 0x56).unwrap();
    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.program_counter, 0x1234);
    assert_eq!(cycles, 5);
}

#[test]
fn test_indirect_jmp_mid_page() {
    let mut cpu = cpu_with_program(&[
        0x6C, // JMP indirect
        0x40, //    pointer at $0240
        0x02,
    ]);
    cpu.bus.write(0x0240, 0x00).unwrap();
    cpu.bus.write(0x0241, 0x19).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.program_counter, 0x1900);
}

#[test]
fn test_stack_roundtrip_restores_value_and_pointer() {
    let mut cpu = cpu_with_program(&[]);
    let sp_before = cpu.stack_pointer;

    cpu.stack_push_u16(0xBEEF).unwrap();
    assert_eq!(cpu.stack_pointer, sp_before.wrapping_sub(2));
    assert_eq!(cpu.stack_pop_u16().unwrap(), 0xBEEF);
    assert_eq!(cpu.stack_pointer, sp_before);
}

#[test]
fn test_stack_pointer_wraps_within_page_one() {
    let mut cpu = cpu_with_program(&[]);
    cpu.stack_pointer = 0x00;
    cpu.stack_push(0x77).unwrap();
    assert_eq!(cpu.stack_pointer, 0xFF);
    assert_eq!(cpu.bus.read(0x0100).unwrap(), 0x77);
}

#[test]
fn test_branch_not_taken_consumes_base_cycles() {
    let mut cpu = cpu_with_program(&[
        0xD0, // BNE
        0x0F, //    +15
    ]);
    cpu.status.insert(Flags::ZERO);
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 2);
    assert_eq!(cpu.program_counter, 0x8002);
}

#[test]
fn test_branch_taken_same_page_costs_one_extra() {
    let mut cpu = cpu_with_program(&[
        0xD0, // BNE
        0x0F, //    +15, same page
    ]);
    cpu.status.remove(Flags::ZERO);
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 3);
    assert_eq!(cpu.program_counter, 0x8011);
}

#[test]
fn test_branch_taken_across_page_costs_two_extra() {
    // Place the branch at $80FB so the target lands on the next page
    let mut prg = vec![0u8; 0x8000];
    prg[0xFB] = 0xD0; // BNE
    prg[0xFC] = 0x10; //    base $80FD + $10 = $810D
    prg[0x7FFC] = 0xFB;
    prg[0x7FFD] = 0x80;
    let mut cpu = cpu_with_prg(prg);
    cpu.status.remove(Flags::ZERO);
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 4);
    assert_eq!(cpu.program_counter, 0x810D);
}

#[test]
fn test_branch_backwards() {
    let mut cpu = cpu_with_program(&[
        0xEA, // NOP
        0xF0, // BEQ
        0xFD, //    -3, back to $8000
    ]);
    cpu.status.insert(Flags::ZERO);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.program_counter, 0x8000);
}

#[test]
fn test_adc_without_carry() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0x10, //   with $10
        0x69, // ADC
        0x07, //   with $07
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x17);
    assert!(!cpu.status.contains(Flags::CARRY));
    assert!(!cpu.status.contains(Flags::OVERFLOW));
}

#[test]
fn test_adc_with_carry_out() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0xFF, //   with $FF
        0x69, // ADC
        0x0F, //   with $0F
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x0E);
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(!cpu.status.contains(Flags::OVERFLOW));
}

#[test]
fn test_adc_signed_overflow() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0x7F, //   with $7F
        0x69, // ADC
        0x0F, //   with $0F: positive + positive = negative
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x8E);
    assert!(!cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::OVERFLOW));
}

#[test]
fn test_sbc_without_borrow() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0xFF, //   with $FF
        0x38, // SEC
        0xE9, // SBC
        0x0F, //   with $0F
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    // In SBC the carry flag is the complement of borrow
    assert_eq!(cpu.register_a, 0xF0);
    assert!(cpu.status.contains(Flags::CARRY));
}

#[test]
fn test_sbc_with_borrow() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0x00, //   with $00
        0x38, // SEC
        0xE9, // SBC
        0x01, //   with $01
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0xFF);
    assert!(!cpu.status.contains(Flags::CARRY));
}

#[test]
fn test_adc_sbc_inverse_property() {
    // ADC then SBC with the same operand and the resulting carry state
    // restores A whenever the carry chain balances (carry-in + carry-out
    // of the ADC equals 1).
    let mut cpu = cpu_with_program(&[]);
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            for carry_in in [false, true] {
                let program = [
                    if carry_in { 0x38 } else { 0x18 }, // SEC / CLC
                    0xA9, a,   // LDA #a
                    0x69, b,   // ADC #b
                    0xE9, b,   // SBC #b
                ];
                for (i, byte) in program.iter().enumerate() {
                    cpu.bus.write(i as u16, *byte).unwrap();
                }
                cpu.program_counter = 0x0000;
                cpu.status = Flags::UNUSED;
                cpu.step().unwrap();
                cpu.step().unwrap();
                cpu.step().unwrap();
                let carry_out = cpu.status.contains(Flags::CARRY);
                cpu.step().unwrap();

                if carry_in as u8 + carry_out as u8 == 1 {
                    assert_eq!(
                        cpu.register_a, a,
                        "not restored for a={:02X} b={:02X} c={}",
                        a, b, carry_in
                    );
                }
            }
        }
    }
}

#[test]
fn test_decimal_flag_is_inert() {
    let mut cpu = cpu_with_program(&[
        0xF8, // SED
        0xA9, // LDA
        0x09, //   with $09
        0x69, // ADC
        0x01, //   with $01: binary result, no BCD adjust
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(cpu.status.contains(Flags::DECIMAL_MODE));
    assert_eq!(cpu.register_a, 0x0A);
}

#[test]
fn test_page_cross_read_penalty() {
    let mut cpu = cpu_with_program(&[
        0xA2, // LDX immediate
        0x01, //    with $01
        0xBD, // LDA absolute,X
        0xFF, //    $01FF + X crosses into $0200
        0x01,
        0xBD, // LDA absolute,X
        0x00, //    $0100 + X stays on the page
        0x01,
    ]);
    cpu.step().unwrap();
    assert_eq!(cpu.step().unwrap(), 5); // crossed: 4 + 1
    assert_eq!(cpu.step().unwrap(), 4); // same page
}

#[test]
fn test_sta_absolute_x_has_no_page_penalty() {
    let mut cpu = cpu_with_program(&[
        0xA2, // LDX immediate
        0x01, //    with $01
        0x9D, // STA absolute,X
        0xFF, //    $01FF + X crosses a page
        0x01,
    ]);
    cpu.step().unwrap();
    assert_eq!(cpu.step().unwrap(), 5); // store cost is fixed
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0xC1, //   with $C1
        0x0A, // ASL A
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x82);
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_asl_memory() {
    let mut cpu = cpu_with_program(&[
        0x06, // ASL zero page
        0x10, //    at $10
    ]);
    cpu.bus.write(0x10, 0x41).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.bus.read(0x10).unwrap(), 0x82);
    assert!(!cpu.status.contains(Flags::CARRY));
}

#[test]
fn test_rol_ror_through_carry() {
    let mut cpu = cpu_with_program(&[
        0x38, // SEC
        0xA9, // LDA
        0x40, //   with $40
        0x2A, // ROL A -> $81, carry clear
        0x6A, // ROR A -> $40, carry set
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x81);
    assert!(!cpu.status.contains(Flags::CARRY));
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x40);
    assert!(cpu.status.contains(Flags::CARRY));
}

#[test]
fn test_inc_dec_memory() {
    let mut cpu = cpu_with_program(&[
        0xE6, // INC zero page
        0x20, //    at $20
        0xC6, // DEC zero page
        0x20,
        0xC6, // DEC zero page
        0x20, //    wraps $00 -> $FF
    ]);
    cpu.bus.write(0x20, 0x00).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.bus.read(0x20).unwrap(), 0x01);
    cpu.step().unwrap();
    assert_eq!(cpu.bus.read(0x20).unwrap(), 0x00);
    assert!(cpu.status.contains(Flags::ZERO));
    cpu.step().unwrap();
    assert_eq!(cpu.bus.read(0x20).unwrap(), 0xFF);
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_cmp_flags() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0x40, //   with $40
        0xC9, // CMP
        0x40, //   equal: carry + zero
        0xC9, // CMP
        0x50, //   greater operand: borrow
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::ZERO));
    cpu.step().unwrap();
    assert!(!cpu.status.contains(Flags::CARRY));
    assert!(!cpu.status.contains(Flags::ZERO));
    assert!(cpu.status.contains(Flags::NEGATIVE));
}

#[test]
fn test_bit_reads_nv_from_memory() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0x01, //   with $01
        0x24, // BIT zero page
        0x10, //    at $10
    ]);
    cpu.bus.write(0x10, 0xC0).unwrap(); // N and V set, no bits shared with A
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(cpu.status.contains(Flags::ZERO));
    assert!(cpu.status.contains(Flags::NEGATIVE));
    assert!(cpu.status.contains(Flags::OVERFLOW));
}

#[test]
fn test_jsr_pushes_address_of_last_instruction_byte() {
    let mut prg = vec![0u8; 0x8000];
    prg[0] = 0x20; // JSR $8010
    prg[1] = 0x10;
    prg[2] = 0x80;
    prg[0x10] = 0x60; // RTS
    prg[0x7FFC] = 0x00;
    prg[0x7FFD] = 0x80;
    let mut cpu = cpu_with_prg(prg);

    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 6);
    assert_eq!(cpu.program_counter, 0x8010);
    assert_eq!(cpu.stack_pointer, CPU_STACK_RESET - 2);
    // Stacked return address is the last byte of the JSR instruction
    assert_eq!(cpu.bus.read_u16(0x01FC).unwrap(), 0x8002);

    cpu.step().unwrap(); // RTS
    assert_eq!(cpu.program_counter, 0x8003);
    assert_eq!(cpu.stack_pointer, CPU_STACK_RESET);
}

#[test]
fn test_php_plp_break_bit_handling() {
    let mut cpu = cpu_with_program(&[
        0x08, // PHP
        0x28, // PLP
    ]);
    cpu.step().unwrap();
    let pushed = Flags::from_bits_truncate(cpu.bus.read(0x01FD).unwrap());
    assert!(pushed.contains(Flags::BREAK));
    assert!(pushed.contains(Flags::UNUSED));

    cpu.step().unwrap();
    assert!(!cpu.status.contains(Flags::BREAK));
    assert!(cpu.status.contains(Flags::UNUSED));
}

#[test]
fn test_brk_interrupt_sequence() {
    let mut cpu = cpu_with_program(&[
        0x00, // BRK
    ]);
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 7);
    assert_eq!(cpu.program_counter, 0x9000); // IRQ/BRK vector
    assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));

    // Return address skips the padding byte; pushed status carries B
    assert_eq!(cpu.bus.read_u16(0x01FC).unwrap(), 0x8002);
    let pushed = Flags::from_bits_truncate(cpu.bus.read(0x01FB).unwrap());
    assert!(pushed.contains(Flags::BREAK));
}

#[test]
fn test_nmi_is_serviced_regardless_of_interrupt_disable() {
    let mut cpu = cpu_with_program(&[
        0xEA, // NOP (never reached)
    ]);
    assert!(cpu.status.contains(Flags::INTERRUPT_DISABLE));
    cpu.trigger_nmi();
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 7);
    assert_eq!(cpu.program_counter, 0xA000); // NMI vector

    // Hardware interrupts push with the B flag clear
    let pushed = Flags::from_bits_truncate(cpu.bus.read(0x01FB).unwrap());
    assert!(!pushed.contains(Flags::BREAK));
    assert!(pushed.contains(Flags::UNUSED));
}

#[test]
fn test_irq_is_held_until_interrupt_disable_clears() {
    let mut cpu = cpu_with_program(&[
        0xEA, // NOP
        0x58, // CLI
        0xEA, // NOP (preempted by the pending IRQ)
    ]);
    cpu.trigger_irq();
    cpu.step().unwrap(); // NOP runs; IRQ masked by I
    assert_eq!(cpu.program_counter, 0x8001);
    cpu.step().unwrap(); // CLI
    cpu.step().unwrap(); // pending IRQ finally serviced
    assert_eq!(cpu.program_counter, 0x9000);
}

#[test]
fn test_rti_restores_status_and_pc() {
    let mut cpu = cpu_with_program(&[
        0x40, // RTI
    ]);
    // Hand-build an interrupt frame: status then return address
    cpu.stack_push_u16(0x8123).unwrap();
    cpu.stack_push((Flags::CARRY | Flags::BREAK).bits()).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.program_counter, 0x8123);
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(!cpu.status.contains(Flags::BREAK));
    assert!(cpu.status.contains(Flags::UNUSED));
}

#[test]
fn test_unmapped_address_faults_and_latches() {
    let mut cpu = cpu_with_program(&[
        0xAD, // LDA absolute
        0x00, //    from $5000: nothing claims that range
        0x50,
        0xEA, // NOP (never reached)
    ]);
    assert_eq!(cpu.step(), Err(Fault::UnmappedAddress(0x5000)));
    // Faulted is terminal: the CPU stays halted and keeps reporting it
    assert_eq!(cpu.step(), Err(Fault::UnmappedAddress(0x5000)));
    assert_eq!(cpu.fault(), Some(Fault::UnmappedAddress(0x5000)));
}

#[test]
fn test_kil_opcode_jams() {
    let mut cpu = cpu_with_program(&[
        0x02, // KIL
    ]);
    assert_eq!(cpu.step(), Err(Fault::Jam(0x02)));
    assert_eq!(cpu.step(), Err(Fault::Jam(0x02)));
}

#[test]
fn test_unstable_opcode_faults() {
    let mut cpu = cpu_with_program(&[
        0x8B, // ANE: decoded but deliberately unimplemented
        0x00,
    ]);
    assert_eq!(cpu.step(), Err(Fault::UnimplementedInstruction(0x8B)));
}

#[test]
fn test_reset_clears_a_latched_fault() {
    let mut cpu = cpu_with_program(&[
        0x02, // KIL
    ]);
    assert!(cpu.step().is_err());
    cpu.reset().unwrap();
    assert_eq!(cpu.fault(), None);
    assert_eq!(cpu.program_counter, 0x8000);
}

#[test]
fn test_lax_loads_a_and_x() {
    let mut cpu = cpu_with_program(&[
        0xA7, // *LAX zero page
        0x10, //    from $10
    ]);
    cpu.bus.write(0x10, 0x5A).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_a, 0x5A);
    assert_eq!(cpu.register_x, 0x5A);
}

#[test]
fn test_sax_stores_a_and_x() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0xF0, //   with $F0
        0xA2, // LDX
        0x3C, //   with $3C
        0x87, // *SAX zero page
        0x10, //    to $10
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.bus.read(0x10).unwrap(), 0x30);
}

#[test]
fn test_dcp_decrements_then_compares() {
    let mut cpu = cpu_with_program(&[
        0xA9, // LDA
        0x41, //   with $41
        0xC7, // *DCP zero page
        0x10, //    at $10
    ]);
    cpu.bus.write(0x10, 0x42).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.bus.read(0x10).unwrap(), 0x41);
    assert!(cpu.status.contains(Flags::CARRY));
    assert!(cpu.status.contains(Flags::ZERO));
}

#[test]
fn test_nop_variants_consume_operands_and_cycles() {
    let mut cpu = cpu_with_program(&[
        0x0C, // *NOP absolute
        0x00, //    operand read from $0000
        0x00,
        0x80, // *NOP immediate
        0xFF,
        0x1A, // *NOP implied
    ]);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.program_counter, 0x8003);
    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.program_counter, 0x8005);
    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.program_counter, 0x8006);
}

#[test]
fn test_transfers_update_flags_except_txs() {
    let mut cpu = cpu_with_program(&[
        0xA2, // LDX
        0x00, //   with $00
        0x9A, // TXS: no flag update
        0xA9, // LDA
        0x80, //   with $80
        0xAA, // TAX: sets N
    ]);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.stack_pointer, 0x00);
    assert!(cpu.status.contains(Flags::ZERO)); // still from LDX
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register_x, 0x80);
    assert!(cpu.status.contains(Flags::NEGATIVE));
    assert!(!cpu.status.contains(Flags::ZERO));
}
