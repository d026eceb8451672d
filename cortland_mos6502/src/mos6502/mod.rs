mod addressing_mode;
mod bus;
mod instruction;
mod opcode;
mod operand;
mod register;
mod status;

use instruction::InstructionSignature;
use opcode::Opcode;
use operand::Operand;
use register::Register;

pub use addressing_mode::AddressingMode;
pub use bus::{Bus, RamBus64kb};
pub use status::{Status, StatusFlag};

pub type Address = u16;

const STACK_START_ADDRESS: u16 = 0x0100;

pub const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;
pub const IRQ_VECTOR_ADDRESS: u16 = 0xFFFE;

/// `MOS6502` emulates the programmer-visible behavior of the MOS Technology
/// 6502 microprocessor: all documented opcodes across the thirteen
/// addressing modes, with exact flag semantics including signed overflow
/// and binary-coded-decimal arithmetic.
///
/// The CPU owns nothing but its register file. Memory, ROM and I/O live
/// behind the [`Bus`] trait and are passed into every operation, so the
/// same core drives both the real machine bus and the flat RAM used in
/// tests.
///
/// Timing is not modeled: one [`MOS6502::step`] is one whole instruction,
/// and pacing against a wall clock is the host's job.
#[derive(Debug)]
pub struct MOS6502 {
    /// `a` is the accumulator register. It is the primary storage point
    /// for the machine: data transfers, logical operations and arithmetic
    /// all flow through it.
    pub a: u8,

    /// An 8-bit index register. It is mainly used to hold counters or offsets for accessing memory.
    pub x: u8,

    /// An 8-bit index register. It is mainly used to hold counters or offsets for accessing memory.
    pub y: u8,

    /// The processor status register.
    pub p: Status,

    /// `pc` is the program counter. It points to the current executing address on the bus.
    pub pc: u16,

    /// `sp` is the stack pointer. It points to the top of the 256 byte call stack in memory.
    ///
    /// The 6502 uses a _descending_ stack which means the stack pointer starts at the end (higher address)
    /// of the array. This means pushing to the stack decrements the stack pointer and pulling increments it.
    ///
    /// The stack _must_ be located between `0x0100` and `0x01FF` of the addressable memory, so `sp`
    /// wraps within `0x00..=0xFF` and never leaves page one.
    pub sp: u8,
}

impl MOS6502 {
    pub fn new() -> MOS6502 {
        MOS6502 {
            a: 0,
            x: 0,
            y: 0,

            p: Status::default(),

            pc: 0,
            sp: 0,
        }
    }

    /// When called: Simulates the `reset` input of the 6502.
    ///
    /// The program counter is loaded from the reset vector, the stack
    /// pointer starts at the top of page one, and the hardwired status bit
    /// is set. Memory is left untouched.
    pub fn reset(&mut self, bus: &mut impl Bus) {
        self.pc = bus.read_u16(RESET_VECTOR_ADDRESS);
        self.sp = 0xFF;
        self.p.set(StatusFlag::Unused, true);
    }

    /// Execute one whole instruction: fetch the opcode byte, resolve the
    /// addressing mode (which advances `pc` past the operand bytes), then
    /// apply the instruction to the registers and the bus.
    pub fn step(&mut self, bus: &mut impl Bus) {
        let byte = bus.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let InstructionSignature {
            opcode,
            addressing_mode,
        } = InstructionSignature::from(byte);

        let operand = addressing_mode.resolve(self, bus);
        self.execute(bus, opcode, operand);
    }

    /// Execute `n` instructions. Convenience for hosts that pace execution
    /// in batches; nothing about the CPU is time-dependent.
    pub fn step_n(&mut self, bus: &mut impl Bus, n: usize) {
        for _ in 0..n {
            self.step(bus);
        }
    }

    fn execute(&mut self, bus: &mut impl Bus, opcode: Opcode, operand: Operand) {
        match opcode {
            // Register Operations
            Opcode::LDA => self.op_load(bus, Register::A, operand),
            Opcode::LDX => self.op_load(bus, Register::X, operand),
            Opcode::LDY => self.op_load(bus, Register::Y, operand),
            Opcode::STA => self.op_store(bus, Register::A, operand),
            Opcode::STX => self.op_store(bus, Register::X, operand),
            Opcode::STY => self.op_store(bus, Register::Y, operand),
            Opcode::TAX => self.op_transfer(Register::A, Register::X),
            Opcode::TAY => self.op_transfer(Register::A, Register::Y),
            Opcode::TXA => self.op_transfer(Register::X, Register::A),
            Opcode::TYA => self.op_transfer(Register::Y, Register::A),

            // Stack Operations
            Opcode::TSX => self.op_transfer(Register::SP, Register::X),
            Opcode::TXS => self.op_transfer(Register::X, Register::SP),
            Opcode::PHA => self.op_push_stack(bus, Register::A),
            Opcode::PHP => self.op_push_stack(bus, Register::P),
            Opcode::PLA => self.op_pull_stack(bus, Register::A),
            Opcode::PLP => self.op_pull_stack(bus, Register::P),

            // Logical Operations
            Opcode::AND => self.op_logical(bus, operand, |a, b| a & b),
            Opcode::EOR => self.op_logical(bus, operand, |a, b| a ^ b),
            Opcode::ORA => self.op_logical(bus, operand, |a, b| a | b),
            Opcode::BIT => self.op_bit(bus, operand),

            // Arithmetic
            Opcode::ADC => self.op_add(bus, operand),
            Opcode::SBC => self.op_subtract(bus, operand),
            Opcode::CMP => self.op_compare(bus, Register::A, operand),
            Opcode::CPX => self.op_compare(bus, Register::X, operand),
            Opcode::CPY => self.op_compare(bus, Register::Y, operand),

            // Increments & Decrements
            Opcode::INC => {
                operand.modify(self, bus, |value| value.wrapping_add(1));
            }
            Opcode::INX => self.modify_register(Register::X, |x| x.wrapping_add(1)),
            Opcode::INY => self.modify_register(Register::Y, |y| y.wrapping_add(1)),
            Opcode::DEC => {
                operand.modify(self, bus, |value| value.wrapping_sub(1));
            }
            Opcode::DEX => self.modify_register(Register::X, |x| x.wrapping_sub(1)),
            Opcode::DEY => self.modify_register(Register::Y, |y| y.wrapping_sub(1)),

            // Shifts
            Opcode::ASL => self.op_shift_left(bus, operand),
            Opcode::LSR => self.op_shift_right(bus, operand),
            Opcode::ROL => self.op_rotate_left(bus, operand),
            Opcode::ROR => self.op_rotate_right(bus, operand),

            // Jumps & Calls
            Opcode::JMP => self.op_jump(operand),
            Opcode::JSR => self.op_jump_subroutine(bus, operand),
            Opcode::RTS => self.op_return(bus),

            // Branches
            Opcode::BCS => self.op_branch_if(operand, self.p.get(StatusFlag::Carry)),
            Opcode::BCC => self.op_branch_if(operand, !self.p.get(StatusFlag::Carry)),
            Opcode::BEQ => self.op_branch_if(operand, self.p.get(StatusFlag::Zero)),
            Opcode::BNE => self.op_branch_if(operand, !self.p.get(StatusFlag::Zero)),
            Opcode::BMI => self.op_branch_if(operand, self.p.get(StatusFlag::Negative)),
            Opcode::BPL => self.op_branch_if(operand, !self.p.get(StatusFlag::Negative)),
            Opcode::BVS => self.op_branch_if(operand, self.p.get(StatusFlag::Overflow)),
            Opcode::BVC => self.op_branch_if(operand, !self.p.get(StatusFlag::Overflow)),

            // Status Flag Functions
            Opcode::CLC => self.p.set(StatusFlag::Carry, false),
            Opcode::CLD => self.p.set(StatusFlag::DecimalMode, false),
            Opcode::CLI => self.p.set(StatusFlag::InterruptDisable, false),
            Opcode::CLV => self.p.set(StatusFlag::Overflow, false),
            Opcode::SEC => self.p.set(StatusFlag::Carry, true),
            Opcode::SED => self.p.set(StatusFlag::DecimalMode, true),
            Opcode::SEI => self.p.set(StatusFlag::InterruptDisable, true),

            // System Functions
            Opcode::BRK => self.op_break(bus),
            Opcode::RTI => self.op_return_from_interrupt(bus),
            Opcode::NOP => {}
            Opcode::UND => {}
        }
    }

    fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
            Register::P => self.p.0,
            Register::SP => self.sp,
        }
    }

    /// Write a value to a register and update any status flags if necessary
    fn write_register(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
            Register::P => self.p.0 = value,
            Register::SP => self.sp = value,
        }

        // Loads, transfers and pulls update `Zero`/`Negative`; the status
        // and stack registers are exempt.
        if register != Register::P && register != Register::SP {
            self.set_zero_negative(value);
        }

        // Bit 5 of the status register is hardwired high.
        if register == Register::P {
            self.p.set(StatusFlag::Unused, true);
        }
    }

    fn modify_register(&mut self, register: Register, f: impl FnOnce(u8) -> u8) {
        let value = self.read_register(register);
        let result = f(value);
        self.write_register(register, result);
    }

    fn set_zero_negative(&mut self, value: u8) {
        self.p.set(StatusFlag::Zero, value == 0);
        self.p.set(StatusFlag::Negative, value & 0b1000_0000 > 0);
    }

    fn push_stack_u8(&mut self, bus: &mut impl Bus, value: u8) {
        bus.write_u8(STACK_START_ADDRESS + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull_stack_u8(&mut self, bus: &mut impl Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read_u8(STACK_START_ADDRESS + self.sp as u16)
    }

    fn push_stack_u16(&mut self, bus: &mut impl Bus, value: u16) {
        let [lo, hi] = value.to_le_bytes();

        // When pushing addresses to the stack we push the `hi` byte first
        self.push_stack_u8(bus, hi);
        self.push_stack_u8(bus, lo);
    }

    fn pull_stack_u16(&mut self, bus: &mut impl Bus) -> u16 {
        let lo = self.pull_stack_u8(bus);
        let hi = self.pull_stack_u8(bus);
        u16::from_le_bytes([lo, hi])
    }

    fn op_load(&mut self, bus: &mut impl Bus, register: Register, operand: Operand) {
        let value = operand.read(self, bus);
        self.write_register(register, value);
    }

    fn op_store(&mut self, bus: &mut impl Bus, register: Register, operand: Operand) {
        let value = self.read_register(register);
        operand.write(self, bus, value);
    }

    /// Copy the contents of `source` into `target`
    fn op_transfer(&mut self, source: Register, target: Register) {
        let value = self.read_register(source);
        self.write_register(target, value);
    }

    fn op_push_stack(&mut self, bus: &mut impl Bus, source: Register) {
        let mut value = self.read_register(source);
        // The status register is pushed with the break bit set, matching
        // the copy BRK pushes.
        if source == Register::P {
            value = Status(value).with(StatusFlag::Break, true).0;
        }

        self.push_stack_u8(bus, value);
    }

    fn op_pull_stack(&mut self, bus: &mut impl Bus, target: Register) {
        let value = self.pull_stack_u8(bus);
        self.write_register(target, value);
    }

    fn op_logical(&mut self, bus: &mut impl Bus, operand: Operand, f: fn(u8, u8) -> u8) {
        let value = operand.read(self, bus);
        let result = f(self.a, value);
        self.write_register(Register::A, result);
    }

    fn op_bit(&mut self, bus: &mut impl Bus, operand: Operand) {
        let value = operand.read(self, bus);

        self.p.set(StatusFlag::Zero, value & self.a == 0);
        self.p.set(StatusFlag::Overflow, value & 0b0100_0000 > 0);
        self.p.set(StatusFlag::Negative, value & 0b1000_0000 > 0);
    }

    fn op_add(&mut self, bus: &mut impl Bus, operand: Operand) {
        let value = operand.read(self, bus);
        self.add_with_carry(value as u16);
    }

    fn op_subtract(&mut self, bus: &mut impl Bus, operand: Operand) {
        let value = operand.read(self, bus);

        // SBC is ADC of the one's complement. In decimal mode the
        // complemented operand is pre-biased by 0x66 so the shared
        // correction below lands on the ten's complement.
        let mut complemented = (value ^ 0xFF) as u16;
        if self.p.get(StatusFlag::DecimalMode) {
            complemented = complemented.wrapping_sub(0x66);
        }

        self.add_with_carry(complemented);
    }

    /// The shared accumulator update behind ADC and SBC: `A + operand + C`.
    ///
    /// Overflow is the signed-overflow rule described in
    /// <http://www.righto.com/2012/12/the-6502-overflow-flag-explained.html>
    /// and is always taken from the binary sum, even in decimal mode — the
    /// BCD correction below only feeds carry and the stored result. The
    /// correction term is the nibble fix-up described in
    /// <http://www.6502.org/tutorials/decimal_mode.html>; firmware depends
    /// on the exact flag behavior, so do not simplify this.
    fn add_with_carry(&mut self, operand: u16) {
        let a = self.a as u16;
        let carry = u16::from(self.p.get(StatusFlag::Carry));
        let mut sum = a.wrapping_add(operand).wrapping_add(carry);

        self.p
            .set(StatusFlag::Overflow, (sum ^ a) & (sum ^ operand) & 0x0080 != 0);

        if self.p.get(StatusFlag::DecimalMode) {
            let correction = ((sum.wrapping_add(0x66) ^ a ^ operand) >> 3 & 0x22).wrapping_mul(3);
            sum = sum.wrapping_add(correction);
        }

        self.p.set(StatusFlag::Carry, sum > 0xFF);
        self.write_register(Register::A, (sum & 0xFF) as u8);
    }

    fn op_compare(&mut self, bus: &mut impl Bus, register: Register, operand: Operand) {
        let register = self.read_register(register);
        let value = operand.read(self, bus);
        let result = register.wrapping_sub(value);

        // Compare is a subtraction that doesn't keep its result: the flags
        // reflect `register - value`.
        self.p.set(StatusFlag::Carry, register >= value);
        self.set_zero_negative(result);
    }

    fn op_shift_left(&mut self, bus: &mut impl Bus, operand: Operand) {
        let input = operand.modify(self, bus, |value| value.wrapping_shl(1));
        self.p.set(StatusFlag::Carry, input & 0b1000_0000 > 0);
    }

    fn op_shift_right(&mut self, bus: &mut impl Bus, operand: Operand) {
        let input = operand.modify(self, bus, |value| value.wrapping_shr(1));
        self.p.set(StatusFlag::Carry, input & 0b0000_0001 > 0);
    }

    fn op_rotate_left(&mut self, bus: &mut impl Bus, operand: Operand) {
        let carry = u8::from(self.p.get(StatusFlag::Carry));
        let input = operand.modify(self, bus, |value| value.wrapping_shl(1) | carry);
        self.p.set(StatusFlag::Carry, input & 0b1000_0000 > 0);
    }

    fn op_rotate_right(&mut self, bus: &mut impl Bus, operand: Operand) {
        let carry = u8::from(self.p.get(StatusFlag::Carry)) << 7;
        let input = operand.modify(self, bus, |value| value.wrapping_shr(1) | carry);
        self.p.set(StatusFlag::Carry, input & 0b0000_0001 > 0);
    }

    fn op_jump(&mut self, operand: Operand) {
        if let Some(address) = operand.address() {
            self.pc = address;
        }
    }

    fn op_jump_subroutine(&mut self, bus: &mut impl Bus, operand: Operand) {
        if let Some(address) = operand.address() {
            // `pc` is one past the last operand byte; the stacked return
            // address is one byte short of the return target, which RTS
            // compensates for.
            let return_address = self.pc.wrapping_sub(1);
            self.push_stack_u16(bus, return_address);

            self.pc = address;
        }
    }

    fn op_return(&mut self, bus: &mut impl Bus) {
        let address = self.pull_stack_u16(bus);
        self.pc = address.wrapping_add(1);
    }

    fn op_break(&mut self, bus: &mut impl Bus) {
        // The byte after BRK is a padding byte the return address skips.
        self.pc = self.pc.wrapping_add(1);

        self.push_stack_u16(bus, self.pc);
        self.push_stack_u8(bus, self.p.with(StatusFlag::Break, true).0);

        self.p.set(StatusFlag::InterruptDisable, true);
        self.pc = bus.read_u16(IRQ_VECTOR_ADDRESS);
    }

    fn op_return_from_interrupt(&mut self, bus: &mut impl Bus) {
        let status = self.pull_stack_u8(bus);
        self.write_register(Register::P, status);
        self.pc = self.pull_stack_u16(bus);
    }

    fn op_branch_if(&mut self, operand: Operand, condition: bool) {
        if condition {
            if let Some(address) = operand.address() {
                self.pc = address;
            }
        }
    }
}

impl Default for MOS6502 {
    fn default() -> MOS6502 {
        MOS6502::new()
    }
}
