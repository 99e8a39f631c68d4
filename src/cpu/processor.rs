use log::{debug, trace};

use super::interrupts::{self, Interrupt};
use super::opcodes::{Mnemonic, Opcode, OPCODE_TABLE};
use super::{AddressingMode, Flags, CPU, CPU_STACK_BASE, CPU_STACK_RESET, RESET_VECTOR};
use crate::bus::Bus;
use crate::error::Fault;

impl CPU {
    pub fn new(bus: Bus) -> CPU {
        CPU {
            bus,
            register_a: 0,
            register_x: 0,
            register_y: 0,
            stack_pointer: CPU_STACK_RESET,
            status: Flags::INTERRUPT_DISABLE | Flags::UNUSED,
            program_counter: 0,
            cycles: 0,
            extra_cycles: 0,
            skip_pc_advance: false,
            nmi_pending: false,
            irq_pending: false,
            fault: None,
        }
    }

    /// Documented power-up state; PC comes from the reset vector.
    pub fn reset(&mut self) -> Result<(), Fault> {
        self.register_a = 0;
        self.register_x = 0;
        self.register_y = 0;
        self.stack_pointer = CPU_STACK_RESET;
        self.status = Flags::INTERRUPT_DISABLE | Flags::UNUSED;
        self.cycles = 0;
        self.extra_cycles = 0;
        self.skip_pc_advance = false;
        self.nmi_pending = false;
        self.irq_pending = false;
        self.fault = None;
        self.program_counter = self.bus.read_u16(RESET_VECTOR)?;
        debug!("CPU reset: PC=${:04X}", self.program_counter);
        Ok(())
    }

    /// The fault that halted the CPU, if any. Once set, `step` keeps
    /// returning it without executing anything.
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Raise the IRQ line. The request is held until the I flag allows
    /// servicing it at an instruction boundary.
    pub fn trigger_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Execute exactly one instruction (or service one pending interrupt)
    /// and return the cycles it consumed.
    pub fn step(&mut self) -> Result<u8, Fault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        match self.step_inner() {
            Ok(cycles) => Ok(cycles),
            Err(fault) => {
                self.fault = Some(fault);
                Err(fault)
            }
        }
    }

    fn step_inner(&mut self) -> Result<u8, Fault> {
        // Interrupts are delivered between instructions, never mid-instruction
        if self.nmi_pending {
            self.nmi_pending = false;
            return self.service_interrupt(&interrupts::NMI);
        }
        if self.irq_pending && !self.status.contains(Flags::INTERRUPT_DISABLE) {
            self.irq_pending = false;
            return self.service_interrupt(&interrupts::IRQ);
        }

        let pc = self.program_counter;
        let code = self.bus.read(pc)?;
        self.program_counter = pc.wrapping_add(1);

        // Total over 0..=255, so the lookup itself cannot fail
        let opcode: &'static Opcode = OPCODE_TABLE[code as usize];

        self.extra_cycles = 0;
        self.skip_pc_advance = false;

        trace!(
            "{:04X}  {:<4} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc,
            opcode.name,
            self.register_a,
            self.register_x,
            self.register_y,
            self.status.bits(),
            self.stack_pointer,
            self.cycles
        );

        self.execute(opcode)?;

        let cycle_count = opcode.cycles + self.extra_cycles;
        self.cycles += cycle_count as u64;

        // If the instruction didn't move PC itself (jump/branch/return),
        // step it past the operand bytes
        if !self.skip_pc_advance {
            self.program_counter = self.program_counter.wrapping_add(opcode.mode.operand_len());
        }
        Ok(cycle_count)
    }

    fn execute(&mut self, opcode: &'static Opcode) -> Result<(), Fault> {
        match opcode.mnemonic {
            Mnemonic::Lda => self.lda(opcode),
            Mnemonic::Ldx => self.ldx(opcode),
            Mnemonic::Ldy => self.ldy(opcode),
            Mnemonic::Sta => self.sta(opcode),
            Mnemonic::Stx => self.stx(opcode),
            Mnemonic::Sty => self.sty(opcode),

            Mnemonic::Tax => self.tax(),
            Mnemonic::Tay => self.tay(),
            Mnemonic::Tsx => self.tsx(),
            Mnemonic::Txa => self.txa(),
            Mnemonic::Txs => self.txs(),
            Mnemonic::Tya => self.tya(),

            Mnemonic::Clc => self.clc(),
            Mnemonic::Cld => self.cld(),
            Mnemonic::Cli => self.cli(),
            Mnemonic::Clv => self.clv(),
            Mnemonic::Sec => self.sec(),
            Mnemonic::Sed => self.sed(),
            Mnemonic::Sei => self.sei(),

            Mnemonic::Inx => self.inx(),
            Mnemonic::Iny => self.iny(),
            Mnemonic::Dex => self.dex(),
            Mnemonic::Dey => self.dey(),
            Mnemonic::Inc => self.inc(opcode),
            Mnemonic::Dec => self.dec(opcode),

            Mnemonic::Adc => self.adc(opcode),
            Mnemonic::Sbc => self.sbc(opcode),
            Mnemonic::And => self.and(opcode),
            Mnemonic::Eor => self.eor(opcode),
            Mnemonic::Ora => self.ora(opcode),
            Mnemonic::Cmp => self.cmp(opcode),
            Mnemonic::Cpx => self.cpx(opcode),
            Mnemonic::Cpy => self.cpy(opcode),
            Mnemonic::Bit => self.bit(opcode),

            Mnemonic::Asl => self.asl(opcode),
            Mnemonic::Lsr => self.lsr(opcode),
            Mnemonic::Rol => self.rol(opcode),
            Mnemonic::Ror => self.ror(opcode),

            Mnemonic::Pha => self.pha(),
            Mnemonic::Pla => self.pla(),
            Mnemonic::Php => self.php(),
            Mnemonic::Plp => self.plp(),

            Mnemonic::Jmp => self.jmp(opcode),
            Mnemonic::Jsr => self.jsr(opcode),
            Mnemonic::Rts => self.rts(),
            Mnemonic::Rti => self.rti(),
            Mnemonic::Brk => self.brk(),

            Mnemonic::Bcc => self.branch(opcode, !self.status.contains(Flags::CARRY)),
            Mnemonic::Bcs => self.branch(opcode, self.status.contains(Flags::CARRY)),
            Mnemonic::Beq => self.branch(opcode, self.status.contains(Flags::ZERO)),
            Mnemonic::Bne => self.branch(opcode, !self.status.contains(Flags::ZERO)),
            Mnemonic::Bmi => self.branch(opcode, self.status.contains(Flags::NEGATIVE)),
            Mnemonic::Bpl => self.branch(opcode, !self.status.contains(Flags::NEGATIVE)),
            Mnemonic::Bvc => self.branch(opcode, !self.status.contains(Flags::OVERFLOW)),
            Mnemonic::Bvs => self.branch(opcode, self.status.contains(Flags::OVERFLOW)),

            Mnemonic::Nop => self.nop(opcode),

            // Stable undocumented instructions
            Mnemonic::Lax => self.lax(opcode),
            Mnemonic::Sax => self.sax(opcode),
            Mnemonic::Dcp => self.dcp(opcode),
            Mnemonic::Isc => self.isc(opcode),
            Mnemonic::Slo => self.slo(opcode),
            Mnemonic::Rla => self.rla(opcode),
            Mnemonic::Sre => self.sre(opcode),
            Mnemonic::Rra => self.rra(opcode),
            Mnemonic::Anc => self.anc(opcode),
            Mnemonic::Alr => self.alr(opcode),
            Mnemonic::Arr => self.arr(opcode),
            Mnemonic::Sbx => self.sbx(opcode),
            Mnemonic::Las => self.las(opcode),

            Mnemonic::Kil => Err(Fault::Jam(opcode.code)),

            // Unstable group: decoded, deliberately not executed
            Mnemonic::Ane
            | Mnemonic::Lxa
            | Mnemonic::Sha
            | Mnemonic::Shx
            | Mnemonic::Shy
            | Mnemonic::Tas => Err(Fault::UnimplementedInstruction(opcode.code)),
        }
    }

    fn service_interrupt(&mut self, interrupt: &Interrupt) -> Result<u8, Fault> {
        self.stack_push_u16(self.program_counter)?;

        let mut pushed = self.status;
        pushed.insert(Flags::UNUSED);
        pushed.set(Flags::BREAK, interrupt.sets_break);
        self.stack_push(pushed.bits())?;

        self.status.insert(Flags::INTERRUPT_DISABLE);
        self.program_counter = self.bus.read_u16(interrupt.vector)?;
        self.cycles += interrupt.cycles as u64;
        Ok(interrupt.cycles)
    }

    // Addressing
    ///////////////

    /// Resolve the effective operand address for `mode`. PC points at the
    /// first operand byte and is left there; `step` advances it afterwards.
    /// The bool reports whether index addition crossed a page boundary.
    fn operand_address(&mut self, mode: AddressingMode) -> Result<(u16, bool), Fault> {
        match mode {
            AddressingMode::Immediate => Ok((self.program_counter, false)),
            AddressingMode::ZeroPage => Ok((self.bus.read(self.program_counter)? as u16, false)),
            AddressingMode::ZeroPageX => {
                let base = self.bus.read(self.program_counter)?;
                // Index addition wraps within page zero
                Ok((base.wrapping_add(self.register_x) as u16, false))
            }
            AddressingMode::ZeroPageY => {
                let base = self.bus.read(self.program_counter)?;
                Ok((base.wrapping_add(self.register_y) as u16, false))
            }
            AddressingMode::Absolute => Ok((self.bus.read_u16(self.program_counter)?, false)),
            AddressingMode::AbsoluteX => {
                let base = self.bus.read_u16(self.program_counter)?;
                let addr = base.wrapping_add(self.register_x as u16);
                Ok((addr, is_boundary_crossed(base, addr)))
            }
            AddressingMode::AbsoluteY => {
                let base = self.bus.read_u16(self.program_counter)?;
                let addr = base.wrapping_add(self.register_y as u16);
                Ok((addr, is_boundary_crossed(base, addr)))
            }
            AddressingMode::IndexedIndirect => {
                let base = self.bus.read(self.program_counter)?;
                let ptr = base.wrapping_add(self.register_x); // wraps in page zero
                let lo = self.bus.read(ptr as u16)? as u16;
                let hi = self.bus.read(ptr.wrapping_add(1) as u16)? as u16; // +1 wraps too
                Ok((hi << 8 | lo, false))
            }
            AddressingMode::IndirectIndexed => {
                let base = self.bus.read(self.program_counter)?;
                let lo = self.bus.read(base as u16)? as u16;
                let hi = self.bus.read(base.wrapping_add(1) as u16)? as u16;
                let pointer = hi << 8 | lo;
                let addr = pointer.wrapping_add(self.register_y as u16);
                Ok((addr, is_boundary_crossed(pointer, addr)))
            }
            AddressingMode::Indirect => {
                /* An original 6502 does not correctly fetch the target address
                   if the indirect vector falls on a page boundary ($xxFF): it
                   fetches the LSB from $xxFF as expected but takes the MSB
                   from $xx00. Reproduced here bit-for-bit. */
                let vector = self.bus.read_u16(self.program_counter)?;
                let addr = if vector & 0x00FF == 0x00FF {
                    let lo = self.bus.read(vector)? as u16;
                    let hi = self.bus.read(vector & 0xFF00)? as u16;
                    hi << 8 | lo
                } else {
                    self.bus.read_u16(vector)?
                };
                Ok((addr, false))
            }
            AddressingMode::Relative => {
                let offset = self.bus.read(self.program_counter)? as i8;
                // The target is relative to the instruction after the offset byte
                let base_pc = self.program_counter.wrapping_add(1);
                let target = base_pc.wrapping_add_signed(offset as i16);
                Ok((target, is_boundary_crossed(base_pc, target)))
            }
            AddressingMode::Implicit => unreachable!("implicit mode carries no operand"),
        }
    }

    /// Fetch the operand byte, charging the page-cross penalty when the
    /// opcode is marked for it.
    fn read_operand(&mut self, opcode: &Opcode) -> Result<u8, Fault> {
        let (addr, crossed) = self.operand_address(opcode.mode)?;
        if opcode.page_penalty && crossed {
            self.extra_cycles += 1;
        }
        self.bus.read(addr)
    }

    // Register/flag helpers
    //////////////////////////

    fn set_register_a(&mut self, value: u8) {
        self.register_a = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_register_x(&mut self, value: u8) {
        self.register_x = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_register_y(&mut self, value: u8) {
        self.register_y = value;
        self.update_zero_and_negative_flags(value);
    }

    fn set_program_counter(&mut self, address: u16) {
        self.program_counter = address;
        self.skip_pc_advance = true;
    }

    fn update_zero_and_negative_flags(&mut self, result: u8) {
        self.status.set(Flags::ZERO, result == 0);
        self.status.set(Flags::NEGATIVE, result & 0x80 != 0);
    }

    fn add_to_register_a(&mut self, value: u8) {
        let carry_in = self.status.contains(Flags::CARRY) as u16;
        let sum = self.register_a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        // Signed overflow iff both operands share a sign and the result's
        // sign differs. See: https://forums.nesdev.org/viewtopic.php?t=6331
        let signed_overflow =
            (self.register_a ^ result) & 0x80 != 0 && (self.register_a ^ value) & 0x80 == 0;

        self.status.set(Flags::OVERFLOW, signed_overflow);
        self.status.set(Flags::CARRY, sum > 0xFF);
        self.set_register_a(result);
    }

    /// SBC is ADC of the operand's complement: A - M - (1-C) == A + !M + C.
    /// Decimal mode is inert on the 2A03, so this is always binary.
    fn sub_from_register_a(&mut self, value: u8) {
        self.add_to_register_a(!value);
    }

    fn compare(&mut self, opcode: &Opcode, compare_value: u8) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.status.set(Flags::CARRY, compare_value >= value);
        self.update_zero_and_negative_flags(compare_value.wrapping_sub(value));
        Ok(())
    }

    fn branch(&mut self, opcode: &Opcode, condition: bool) -> Result<(), Fault> {
        let (target, crossed) = self.operand_address(opcode.mode)?;
        if condition {
            // +1 for taking the branch, +1 more for landing on a new page
            self.extra_cycles += 1 + crossed as u8;
            self.set_program_counter(target);
        }
        Ok(())
    }

    // Stack
    //////////

    pub(super) fn stack_push(&mut self, value: u8) -> Result<(), Fault> {
        let address = CPU_STACK_BASE.wrapping_add(self.stack_pointer as u16);
        self.bus.write(address, value)?;
        // Pointer wraps within page one, never carrying out of it
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
        Ok(())
    }

    pub(super) fn stack_push_u16(&mut self, value: u16) -> Result<(), Fault> {
        self.stack_push((value >> 8) as u8)?;
        self.stack_push(value as u8)
    }

    pub(super) fn stack_pop(&mut self) -> Result<u8, Fault> {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        self.bus
            .read(CPU_STACK_BASE.wrapping_add(self.stack_pointer as u16))
    }

    pub(super) fn stack_pop_u16(&mut self) -> Result<u16, Fault> {
        let lo = self.stack_pop()? as u16;
        let hi = self.stack_pop()? as u16;
        Ok(hi << 8 | lo)
    }

    // Loads/stores
    /////////////////

    fn lda(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_a(value);
        Ok(())
    }

    fn ldx(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_x(value);
        Ok(())
    }

    fn ldy(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_y(value);
        Ok(())
    }

    fn sta(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        self.bus.write(addr, self.register_a)
    }

    fn stx(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        self.bus.write(addr, self.register_x)
    }

    fn sty(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        self.bus.write(addr, self.register_y)
    }

    // Transfers
    //////////////

    fn tax(&mut self) -> Result<(), Fault> {
        self.set_register_x(self.register_a);
        Ok(())
    }

    fn tay(&mut self) -> Result<(), Fault> {
        self.set_register_y(self.register_a);
        Ok(())
    }

    fn tsx(&mut self) -> Result<(), Fault> {
        self.set_register_x(self.stack_pointer);
        Ok(())
    }

    fn txa(&mut self) -> Result<(), Fault> {
        self.set_register_a(self.register_x);
        Ok(())
    }

    /// The one transfer that leaves the flags alone.
    fn txs(&mut self) -> Result<(), Fault> {
        self.stack_pointer = self.register_x;
        Ok(())
    }

    fn tya(&mut self) -> Result<(), Fault> {
        self.set_register_a(self.register_y);
        Ok(())
    }

    // Flag instructions
    //////////////////////

    fn clc(&mut self) -> Result<(), Fault> {
        self.status.remove(Flags::CARRY);
        Ok(())
    }

    fn cld(&mut self) -> Result<(), Fault> {
        self.status.remove(Flags::DECIMAL_MODE);
        Ok(())
    }

    fn cli(&mut self) -> Result<(), Fault> {
        self.status.remove(Flags::INTERRUPT_DISABLE);
        Ok(())
    }

    fn clv(&mut self) -> Result<(), Fault> {
        self.status.remove(Flags::OVERFLOW);
        Ok(())
    }

    fn sec(&mut self) -> Result<(), Fault> {
        self.status.insert(Flags::CARRY);
        Ok(())
    }

    fn sed(&mut self) -> Result<(), Fault> {
        self.status.insert(Flags::DECIMAL_MODE);
        Ok(())
    }

    fn sei(&mut self) -> Result<(), Fault> {
        self.status.insert(Flags::INTERRUPT_DISABLE);
        Ok(())
    }

    // Increments/decrements
    //////////////////////////

    fn inx(&mut self) -> Result<(), Fault> {
        self.set_register_x(self.register_x.wrapping_add(1));
        Ok(())
    }

    fn iny(&mut self) -> Result<(), Fault> {
        self.set_register_y(self.register_y.wrapping_add(1));
        Ok(())
    }

    fn dex(&mut self) -> Result<(), Fault> {
        self.set_register_x(self.register_x.wrapping_sub(1));
        Ok(())
    }

    fn dey(&mut self) -> Result<(), Fault> {
        self.set_register_y(self.register_y.wrapping_sub(1));
        Ok(())
    }

    fn inc(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?.wrapping_add(1);
        self.bus.write(addr, value)?;
        self.update_zero_and_negative_flags(value);
        Ok(())
    }

    fn dec(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?.wrapping_sub(1);
        self.bus.write(addr, value)?;
        self.update_zero_and_negative_flags(value);
        Ok(())
    }

    // Arithmetic/logic
    /////////////////////

    fn adc(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.add_to_register_a(value);
        Ok(())
    }

    fn sbc(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.sub_from_register_a(value);
        Ok(())
    }

    fn and(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_a(self.register_a & value);
        Ok(())
    }

    fn eor(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_a(self.register_a ^ value);
        Ok(())
    }

    fn ora(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_a(self.register_a | value);
        Ok(())
    }

    fn cmp(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        self.compare(opcode, self.register_a)
    }

    fn cpx(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        self.compare(opcode, self.register_x)
    }

    fn cpy(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        self.compare(opcode, self.register_y)
    }

    fn bit(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?;
        // Z from the AND, N and V straight from the memory byte
        self.status.set(Flags::ZERO, self.register_a & value == 0);
        self.status.set(Flags::NEGATIVE, value & 1 << 7 != 0);
        self.status.set(Flags::OVERFLOW, value & 1 << 6 != 0);
        Ok(())
    }

    // Shifts/rotates
    ///////////////////

    fn asl(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        match opcode.mode {
            AddressingMode::Implicit => {
                let carry = self.register_a & 0x80 != 0;
                self.set_register_a(self.register_a << 1);
                self.status.set(Flags::CARRY, carry);
            }
            _ => {
                let (addr, _) = self.operand_address(opcode.mode)?;
                let value = self.bus.read(addr)?;
                self.asl_memory(addr, value)?;
            }
        }
        Ok(())
    }

    fn asl_memory(&mut self, addr: u16, value: u8) -> Result<u8, Fault> {
        let carry = value & 0x80 != 0;
        let result = value << 1;
        self.bus.write(addr, result)?;
        self.update_zero_and_negative_flags(result);
        self.status.set(Flags::CARRY, carry);
        Ok(result)
    }

    fn lsr(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        match opcode.mode {
            AddressingMode::Implicit => {
                let carry = self.register_a & 1 != 0;
                self.set_register_a(self.register_a >> 1);
                self.status.set(Flags::CARRY, carry);
            }
            _ => {
                let (addr, _) = self.operand_address(opcode.mode)?;
                let value = self.bus.read(addr)?;
                self.lsr_memory(addr, value)?;
            }
        }
        Ok(())
    }

    fn lsr_memory(&mut self, addr: u16, value: u8) -> Result<u8, Fault> {
        let carry = value & 1 != 0;
        let result = value >> 1;
        self.bus.write(addr, result)?;
        self.update_zero_and_negative_flags(result);
        self.status.set(Flags::CARRY, carry);
        Ok(result)
    }

    fn rol(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let carry_in = self.status.contains(Flags::CARRY);
        match opcode.mode {
            AddressingMode::Implicit => {
                let (value, carry_out) = rotate_value_left(self.register_a, carry_in);
                self.set_register_a(value);
                self.status.set(Flags::CARRY, carry_out);
            }
            _ => {
                let (addr, _) = self.operand_address(opcode.mode)?;
                let value = self.bus.read(addr)?;
                self.rol_memory(addr, value)?;
            }
        }
        Ok(())
    }

    fn rol_memory(&mut self, addr: u16, value: u8) -> Result<u8, Fault> {
        let carry_in = self.status.contains(Flags::CARRY);
        let (result, carry_out) = rotate_value_left(value, carry_in);
        self.bus.write(addr, result)?;
        self.update_zero_and_negative_flags(result);
        self.status.set(Flags::CARRY, carry_out);
        Ok(result)
    }

    fn ror(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let carry_in = self.status.contains(Flags::CARRY);
        match opcode.mode {
            AddressingMode::Implicit => {
                let (value, carry_out) = rotate_value_right(self.register_a, carry_in);
                self.set_register_a(value);
                self.status.set(Flags::CARRY, carry_out);
            }
            _ => {
                let (addr, _) = self.operand_address(opcode.mode)?;
                let value = self.bus.read(addr)?;
                self.ror_memory(addr, value)?;
            }
        }
        Ok(())
    }

    fn ror_memory(&mut self, addr: u16, value: u8) -> Result<u8, Fault> {
        let carry_in = self.status.contains(Flags::CARRY);
        let (result, carry_out) = rotate_value_right(value, carry_in);
        self.bus.write(addr, result)?;
        self.update_zero_and_negative_flags(result);
        self.status.set(Flags::CARRY, carry_out);
        Ok(result)
    }

    // Stack instructions
    ///////////////////////

    fn pha(&mut self) -> Result<(), Fault> {
        self.stack_push(self.register_a)
    }

    fn pla(&mut self) -> Result<(), Fault> {
        let value = self.stack_pop()?;
        self.set_register_a(value);
        Ok(())
    }

    fn php(&mut self) -> Result<(), Fault> {
        // The pushed copy always carries B and the reserved bit set
        let mut pushed = self.status;
        pushed.insert(Flags::BREAK | Flags::UNUSED);
        self.stack_push(pushed.bits())
    }

    fn plp(&mut self) -> Result<(), Fault> {
        let value = self.stack_pop()?;
        self.status = Flags::from_bits_truncate(value);
        // B exists only on the stack; the reserved bit is always live
        self.status.remove(Flags::BREAK);
        self.status.insert(Flags::UNUSED);
        Ok(())
    }

    // Control flow
    /////////////////

    fn jmp(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        self.set_program_counter(addr);
        Ok(())
    }

    fn jsr(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (target, _) = self.operand_address(opcode.mode)?;
        // Pushes the address of the last byte of the JSR instruction;
        // RTS undoes this with its +1
        let return_address = self.program_counter.wrapping_add(1);
        self.stack_push_u16(return_address)?;
        self.set_program_counter(target);
        Ok(())
    }

    fn rts(&mut self) -> Result<(), Fault> {
        let return_address = self.stack_pop_u16()?.wrapping_add(1);
        self.set_program_counter(return_address);
        Ok(())
    }

    fn rti(&mut self) -> Result<(), Fault> {
        // Unlike RTS, the stacked address is the actual return address
        self.plp()?;
        let return_address = self.stack_pop_u16()?;
        self.set_program_counter(return_address);
        Ok(())
    }

    fn brk(&mut self) -> Result<(), Fault> {
        // BRK is two bytes: the padding byte after the opcode is skipped
        let return_address = self.program_counter.wrapping_add(1);
        self.stack_push_u16(return_address)?;

        let mut pushed = self.status;
        pushed.insert(Flags::BREAK | Flags::UNUSED);
        self.stack_push(pushed.bits())?;

        self.status.insert(Flags::INTERRUPT_DISABLE);
        let vector = self.bus.read_u16(interrupts::BRK_VECTOR)?;
        self.set_program_counter(vector);
        Ok(())
    }

    fn nop(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        // Undocumented NOP forms still consume their operand fetch
        if opcode.mode != AddressingMode::Implicit {
            self.read_operand(opcode)?;
        }
        Ok(())
    }

    // Stable undocumented instructions
    ////////////////////////////////////

    /// LAX => LDA oper + TAX in one go
    fn lax(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_a(value);
        self.register_x = value;
        Ok(())
    }

    /// SAX => A AND X -> M, flags untouched
    fn sax(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        self.bus.write(addr, self.register_a & self.register_x)
    }

    /// DCP => DEC oper, then CMP oper
    fn dcp(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?.wrapping_sub(1);
        self.bus.write(addr, value)?;
        self.status.set(Flags::CARRY, self.register_a >= value);
        self.update_zero_and_negative_flags(self.register_a.wrapping_sub(value));
        Ok(())
    }

    /// ISC => INC oper, then SBC oper
    fn isc(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?.wrapping_add(1);
        self.bus.write(addr, value)?;
        self.sub_from_register_a(value);
        Ok(())
    }

    /// SLO => ASL oper, then ORA oper
    fn slo(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?;
        let shifted = self.asl_memory(addr, value)?;
        self.set_register_a(self.register_a | shifted);
        Ok(())
    }

    /// RLA => ROL oper, then AND oper
    fn rla(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?;
        let rotated = self.rol_memory(addr, value)?;
        self.set_register_a(self.register_a & rotated);
        Ok(())
    }

    /// SRE => LSR oper, then EOR oper
    fn sre(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?;
        let shifted = self.lsr_memory(addr, value)?;
        self.set_register_a(self.register_a ^ shifted);
        Ok(())
    }

    /// RRA => ROR oper, then ADC oper (with the carry the rotate produced)
    fn rra(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let (addr, _) = self.operand_address(opcode.mode)?;
        let value = self.bus.read(addr)?;
        let rotated = self.ror_memory(addr, value)?;
        self.add_to_register_a(rotated);
        Ok(())
    }

    /// ANC => AND oper, then copy N into C
    fn anc(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        self.set_register_a(self.register_a & value);
        self.status
            .set(Flags::CARRY, self.status.contains(Flags::NEGATIVE));
        Ok(())
    }

    /// ALR => AND oper, then LSR A
    fn alr(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        let and_result = self.register_a & value;
        self.status.set(Flags::CARRY, and_result & 1 != 0);
        self.set_register_a(and_result >> 1);
        Ok(())
    }

    /// ARR => AND oper, then ROR A, with C/V taken from bits 6 and 5
    fn arr(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        let and_result = self.register_a & value;
        let carry_in = self.status.contains(Flags::CARRY);
        let result = (and_result >> 1) | (carry_in as u8) << 7;
        self.set_register_a(result);
        let bit6 = result & 0x40 != 0;
        let bit5 = result & 0x20 != 0;
        self.status.set(Flags::CARRY, bit6);
        self.status.set(Flags::OVERFLOW, bit6 ^ bit5);
        Ok(())
    }

    /// SBX => (A AND X) - oper into X, flags like CMP
    fn sbx(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        let masked = self.register_a & self.register_x;
        let result = masked.wrapping_sub(value);
        self.status.set(Flags::CARRY, masked >= value);
        self.register_x = result;
        self.update_zero_and_negative_flags(result);
        Ok(())
    }

    /// LAS => M AND SP into A, X and SP
    fn las(&mut self, opcode: &Opcode) -> Result<(), Fault> {
        let value = self.read_operand(opcode)?;
        let result = value & self.stack_pointer;
        self.stack_pointer = result;
        self.register_x = result;
        self.set_register_a(result);
        Ok(())
    }
}

fn is_boundary_crossed(addr1: u16, addr2: u16) -> bool {
    addr1 & 0xFF00 != addr2 & 0xFF00
}

fn rotate_value_left(value: u8, current_carry: bool) -> (u8, bool) {
    let new_carry = value & 0x80 != 0;
    (value << 1 | current_carry as u8, new_carry)
}

fn rotate_value_right(value: u8, current_carry: bool) -> (u8, bool) {
    let new_carry = value & 0x01 != 0;
    (value >> 1 | (current_carry as u8) << 7, new_carry)
}
