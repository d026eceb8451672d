use super::addressing_mode::AddressingMode;
use super::opcode::Opcode;

/// The signature of an instruction is its `Opcode` + `AddressingMode` pair.
///
/// This tells us what kind of operand to expect and what operation to
/// perform.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct InstructionSignature {
    pub opcode: Opcode,
    pub addressing_mode: AddressingMode,
}

impl InstructionSignature {
    pub const fn new(opcode: Opcode, addressing_mode: AddressingMode) -> InstructionSignature {
        InstructionSignature {
            opcode,
            addressing_mode,
        }
    }
}

impl From<u8> for InstructionSignature {
    fn from(byte: u8) -> InstructionSignature {
        INSTRUCTION_SIGNATURES[byte as usize]
    }
}

/// Instruction signatures for all documented 6502 opcodes.
///
/// Every byte decodes to something: bytes without an assigned encoding
/// execute as `UND`, a no-op that consumes only the opcode byte.
static INSTRUCTION_SIGNATURES: [InstructionSignature; 256] = [
    /*0x00*/ InstructionSignature::new(Opcode::BRK, AddressingMode::Implied),
    /*0x01*/ InstructionSignature::new(Opcode::ORA, AddressingMode::IndexedIndirect),
    /*0x02*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x03*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x04*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x05*/ InstructionSignature::new(Opcode::ORA, AddressingMode::ZeroPage),
    /*0x06*/ InstructionSignature::new(Opcode::ASL, AddressingMode::ZeroPage),
    /*0x07*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x08*/ InstructionSignature::new(Opcode::PHP, AddressingMode::Implied),
    /*0x09*/ InstructionSignature::new(Opcode::ORA, AddressingMode::Immediate),
    /*0x0A*/ InstructionSignature::new(Opcode::ASL, AddressingMode::Accumulator),
    /*0x0B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x0C*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x0D*/ InstructionSignature::new(Opcode::ORA, AddressingMode::Absolute),
    /*0x0E*/ InstructionSignature::new(Opcode::ASL, AddressingMode::Absolute),
    /*0x0F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x10*/ InstructionSignature::new(Opcode::BPL, AddressingMode::Relative),
    /*0x11*/ InstructionSignature::new(Opcode::ORA, AddressingMode::IndirectIndexed),
    /*0x12*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x13*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x14*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x15*/ InstructionSignature::new(Opcode::ORA, AddressingMode::ZeroPageX),
    /*0x16*/ InstructionSignature::new(Opcode::ASL, AddressingMode::ZeroPageX),
    /*0x17*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x18*/ InstructionSignature::new(Opcode::CLC, AddressingMode::Implied),
    /*0x19*/ InstructionSignature::new(Opcode::ORA, AddressingMode::AbsoluteY),
    /*0x1A*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x1B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x1C*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x1D*/ InstructionSignature::new(Opcode::ORA, AddressingMode::AbsoluteX),
    /*0x1E*/ InstructionSignature::new(Opcode::ASL, AddressingMode::AbsoluteX),
    /*0x1F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x20*/ InstructionSignature::new(Opcode::JSR, AddressingMode::Absolute),
    /*0x21*/ InstructionSignature::new(Opcode::AND, AddressingMode::IndexedIndirect),
    /*0x22*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x23*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x24*/ InstructionSignature::new(Opcode::BIT, AddressingMode::ZeroPage),
    /*0x25*/ InstructionSignature::new(Opcode::AND, AddressingMode::ZeroPage),
    /*0x26*/ InstructionSignature::new(Opcode::ROL, AddressingMode::ZeroPage),
    /*0x27*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x28*/ InstructionSignature::new(Opcode::PLP, AddressingMode::Implied),
    /*0x29*/ InstructionSignature::new(Opcode::AND, AddressingMode::Immediate),
    /*0x2A*/ InstructionSignature::new(Opcode::ROL, AddressingMode::Accumulator),
    /*0x2B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x2C*/ InstructionSignature::new(Opcode::BIT, AddressingMode::Absolute),
    /*0x2D*/ InstructionSignature::new(Opcode::AND, AddressingMode::Absolute),
    /*0x2E*/ InstructionSignature::new(Opcode::ROL, AddressingMode::Absolute),
    /*0x2F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x30*/ InstructionSignature::new(Opcode::BMI, AddressingMode::Relative),
    /*0x31*/ InstructionSignature::new(Opcode::AND, AddressingMode::IndirectIndexed),
    /*0x32*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x33*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x34*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x35*/ InstructionSignature::new(Opcode::AND, AddressingMode::ZeroPageX),
    /*0x36*/ InstructionSignature::new(Opcode::ROL, AddressingMode::ZeroPageX),
    /*0x37*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x38*/ InstructionSignature::new(Opcode::SEC, AddressingMode::Implied),
    /*0x39*/ InstructionSignature::new(Opcode::AND, AddressingMode::AbsoluteY),
    /*0x3A*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x3B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x3C*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x3D*/ InstructionSignature::new(Opcode::AND, AddressingMode::AbsoluteX),
    /*0x3E*/ InstructionSignature::new(Opcode::ROL, AddressingMode::AbsoluteX),
    /*0x3F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x40*/ InstructionSignature::new(Opcode::RTI, AddressingMode::Implied),
    /*0x41*/ InstructionSignature::new(Opcode::EOR, AddressingMode::IndexedIndirect),
    /*0x42*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x43*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x44*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x45*/ InstructionSignature::new(Opcode::EOR, AddressingMode::ZeroPage),
    /*0x46*/ InstructionSignature::new(Opcode::LSR, AddressingMode::ZeroPage),
    /*0x47*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x48*/ InstructionSignature::new(Opcode::PHA, AddressingMode::Implied),
    /*0x49*/ InstructionSignature::new(Opcode::EOR, AddressingMode::Immediate),
    /*0x4A*/ InstructionSignature::new(Opcode::LSR, AddressingMode::Accumulator),
    /*0x4B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x4C*/ InstructionSignature::new(Opcode::JMP, AddressingMode::Absolute),
    /*0x4D*/ InstructionSignature::new(Opcode::EOR, AddressingMode::Absolute),
    /*0x4E*/ InstructionSignature::new(Opcode::LSR, AddressingMode::Absolute),
    /*0x4F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x50*/ InstructionSignature::new(Opcode::BVC, AddressingMode::Relative),
    /*0x51*/ InstructionSignature::new(Opcode::EOR, AddressingMode::IndirectIndexed),
    /*0x52*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x53*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x54*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x55*/ InstructionSignature::new(Opcode::EOR, AddressingMode::ZeroPageX),
    /*0x56*/ InstructionSignature::new(Opcode::LSR, AddressingMode::ZeroPageX),
    /*0x57*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x58*/ InstructionSignature::new(Opcode::CLI, AddressingMode::Implied),
    /*0x59*/ InstructionSignature::new(Opcode::EOR, AddressingMode::AbsoluteY),
    /*0x5A*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x5B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x5C*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x5D*/ InstructionSignature::new(Opcode::EOR, AddressingMode::AbsoluteX),
    /*0x5E*/ InstructionSignature::new(Opcode::LSR, AddressingMode::AbsoluteX),
    /*0x5F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x60*/ InstructionSignature::new(Opcode::RTS, AddressingMode::Implied),
    /*0x61*/ InstructionSignature::new(Opcode::ADC, AddressingMode::IndexedIndirect),
    /*0x62*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x63*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x64*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x65*/ InstructionSignature::new(Opcode::ADC, AddressingMode::ZeroPage),
    /*0x66*/ InstructionSignature::new(Opcode::ROR, AddressingMode::ZeroPage),
    /*0x67*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x68*/ InstructionSignature::new(Opcode::PLA, AddressingMode::Implied),
    /*0x69*/ InstructionSignature::new(Opcode::ADC, AddressingMode::Immediate),
    /*0x6A*/ InstructionSignature::new(Opcode::ROR, AddressingMode::Accumulator),
    /*0x6B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x6C*/ InstructionSignature::new(Opcode::JMP, AddressingMode::Indirect),
    /*0x6D*/ InstructionSignature::new(Opcode::ADC, AddressingMode::Absolute),
    /*0x6E*/ InstructionSignature::new(Opcode::ROR, AddressingMode::Absolute),
    /*0x6F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x70*/ InstructionSignature::new(Opcode::BVS, AddressingMode::Relative),
    /*0x71*/ InstructionSignature::new(Opcode::ADC, AddressingMode::IndirectIndexed),
    /*0x72*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x73*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x74*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x75*/ InstructionSignature::new(Opcode::ADC, AddressingMode::ZeroPageX),
    /*0x76*/ InstructionSignature::new(Opcode::ROR, AddressingMode::ZeroPageX),
    /*0x77*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x78*/ InstructionSignature::new(Opcode::SEI, AddressingMode::Implied),
    /*0x79*/ InstructionSignature::new(Opcode::ADC, AddressingMode::AbsoluteY),
    /*0x7A*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x7B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x7C*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x7D*/ InstructionSignature::new(Opcode::ADC, AddressingMode::AbsoluteX),
    /*0x7E*/ InstructionSignature::new(Opcode::ROR, AddressingMode::AbsoluteX),
    /*0x7F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x80*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x81*/ InstructionSignature::new(Opcode::STA, AddressingMode::IndexedIndirect),
    /*0x82*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x83*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x84*/ InstructionSignature::new(Opcode::STY, AddressingMode::ZeroPage),
    /*0x85*/ InstructionSignature::new(Opcode::STA, AddressingMode::ZeroPage),
    /*0x86*/ InstructionSignature::new(Opcode::STX, AddressingMode::ZeroPage),
    /*0x87*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x88*/ InstructionSignature::new(Opcode::DEY, AddressingMode::Implied),
    /*0x89*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x8A*/ InstructionSignature::new(Opcode::TXA, AddressingMode::Implied),
    /*0x8B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x8C*/ InstructionSignature::new(Opcode::STY, AddressingMode::Absolute),
    /*0x8D*/ InstructionSignature::new(Opcode::STA, AddressingMode::Absolute),
    /*0x8E*/ InstructionSignature::new(Opcode::STX, AddressingMode::Absolute),
    /*0x8F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x90*/ InstructionSignature::new(Opcode::BCC, AddressingMode::Relative),
    /*0x91*/ InstructionSignature::new(Opcode::STA, AddressingMode::IndirectIndexed),
    /*0x92*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x93*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x94*/ InstructionSignature::new(Opcode::STY, AddressingMode::ZeroPageX),
    /*0x95*/ InstructionSignature::new(Opcode::STA, AddressingMode::ZeroPageX),
    /*0x96*/ InstructionSignature::new(Opcode::STX, AddressingMode::ZeroPageY),
    /*0x97*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x98*/ InstructionSignature::new(Opcode::TYA, AddressingMode::Implied),
    /*0x99*/ InstructionSignature::new(Opcode::STA, AddressingMode::AbsoluteY),
    /*0x9A*/ InstructionSignature::new(Opcode::TXS, AddressingMode::Implied),
    /*0x9B*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x9C*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x9D*/ InstructionSignature::new(Opcode::STA, AddressingMode::AbsoluteX),
    /*0x9E*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0x9F*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xA0*/ InstructionSignature::new(Opcode::LDY, AddressingMode::Immediate),
    /*0xA1*/ InstructionSignature::new(Opcode::LDA, AddressingMode::IndexedIndirect),
    /*0xA2*/ InstructionSignature::new(Opcode::LDX, AddressingMode::Immediate),
    /*0xA3*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xA4*/ InstructionSignature::new(Opcode::LDY, AddressingMode::ZeroPage),
    /*0xA5*/ InstructionSignature::new(Opcode::LDA, AddressingMode::ZeroPage),
    /*0xA6*/ InstructionSignature::new(Opcode::LDX, AddressingMode::ZeroPage),
    /*0xA7*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xA8*/ InstructionSignature::new(Opcode::TAY, AddressingMode::Implied),
    /*0xA9*/ InstructionSignature::new(Opcode::LDA, AddressingMode::Immediate),
    /*0xAA*/ InstructionSignature::new(Opcode::TAX, AddressingMode::Implied),
    /*0xAB*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xAC*/ InstructionSignature::new(Opcode::LDY, AddressingMode::Absolute),
    /*0xAD*/ InstructionSignature::new(Opcode::LDA, AddressingMode::Absolute),
    /*0xAE*/ InstructionSignature::new(Opcode::LDX, AddressingMode::Absolute),
    /*0xAF*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xB0*/ InstructionSignature::new(Opcode::BCS, AddressingMode::Relative),
    /*0xB1*/ InstructionSignature::new(Opcode::LDA, AddressingMode::IndirectIndexed),
    /*0xB2*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xB3*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xB4*/ InstructionSignature::new(Opcode::LDY, AddressingMode::ZeroPageX),
    /*0xB5*/ InstructionSignature::new(Opcode::LDA, AddressingMode::ZeroPageX),
    /*0xB6*/ InstructionSignature::new(Opcode::LDX, AddressingMode::ZeroPageY),
    /*0xB7*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xB8*/ InstructionSignature::new(Opcode::CLV, AddressingMode::Implied),
    /*0xB9*/ InstructionSignature::new(Opcode::LDA, AddressingMode::AbsoluteY),
    /*0xBA*/ InstructionSignature::new(Opcode::TSX, AddressingMode::Implied),
    /*0xBB*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xBC*/ InstructionSignature::new(Opcode::LDY, AddressingMode::AbsoluteX),
    /*0xBD*/ InstructionSignature::new(Opcode::LDA, AddressingMode::AbsoluteX),
    /*0xBE*/ InstructionSignature::new(Opcode::LDX, AddressingMode::AbsoluteY),
    /*0xBF*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xC0*/ InstructionSignature::new(Opcode::CPY, AddressingMode::Immediate),
    /*0xC1*/ InstructionSignature::new(Opcode::CMP, AddressingMode::IndexedIndirect),
    /*0xC2*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xC3*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xC4*/ InstructionSignature::new(Opcode::CPY, AddressingMode::ZeroPage),
    /*0xC5*/ InstructionSignature::new(Opcode::CMP, AddressingMode::ZeroPage),
    /*0xC6*/ InstructionSignature::new(Opcode::DEC, AddressingMode::ZeroPage),
    /*0xC7*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xC8*/ InstructionSignature::new(Opcode::INY, AddressingMode::Implied),
    /*0xC9*/ InstructionSignature::new(Opcode::CMP, AddressingMode::Immediate),
    /*0xCA*/ InstructionSignature::new(Opcode::DEX, AddressingMode::Implied),
    /*0xCB*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xCC*/ InstructionSignature::new(Opcode::CPY, AddressingMode::Absolute),
    /*0xCD*/ InstructionSignature::new(Opcode::CMP, AddressingMode::Absolute),
    /*0xCE*/ InstructionSignature::new(Opcode::DEC, AddressingMode::Absolute),
    /*0xCF*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xD0*/ InstructionSignature::new(Opcode::BNE, AddressingMode::Relative),
    /*0xD1*/ InstructionSignature::new(Opcode::CMP, AddressingMode::IndirectIndexed),
    /*0xD2*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xD3*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xD4*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xD5*/ InstructionSignature::new(Opcode::CMP, AddressingMode::ZeroPageX),
    /*0xD6*/ InstructionSignature::new(Opcode::DEC, AddressingMode::ZeroPageX),
    /*0xD7*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xD8*/ InstructionSignature::new(Opcode::CLD, AddressingMode::Implied),
    /*0xD9*/ InstructionSignature::new(Opcode::CMP, AddressingMode::AbsoluteY),
    /*0xDA*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xDB*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xDC*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xDD*/ InstructionSignature::new(Opcode::CMP, AddressingMode::AbsoluteX),
    /*0xDE*/ InstructionSignature::new(Opcode::DEC, AddressingMode::AbsoluteX),
    /*0xDF*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xE0*/ InstructionSignature::new(Opcode::CPX, AddressingMode::Immediate),
    /*0xE1*/ InstructionSignature::new(Opcode::SBC, AddressingMode::IndexedIndirect),
    /*0xE2*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xE3*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xE4*/ InstructionSignature::new(Opcode::CPX, AddressingMode::ZeroPage),
    /*0xE5*/ InstructionSignature::new(Opcode::SBC, AddressingMode::ZeroPage),
    /*0xE6*/ InstructionSignature::new(Opcode::INC, AddressingMode::ZeroPage),
    /*0xE7*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xE8*/ InstructionSignature::new(Opcode::INX, AddressingMode::Implied),
    /*0xE9*/ InstructionSignature::new(Opcode::SBC, AddressingMode::Immediate),
    /*0xEA*/ InstructionSignature::new(Opcode::NOP, AddressingMode::Implied),
    /*0xEB*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xEC*/ InstructionSignature::new(Opcode::CPX, AddressingMode::Absolute),
    /*0xED*/ InstructionSignature::new(Opcode::SBC, AddressingMode::Absolute),
    /*0xEE*/ InstructionSignature::new(Opcode::INC, AddressingMode::Absolute),
    /*0xEF*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xF0*/ InstructionSignature::new(Opcode::BEQ, AddressingMode::Relative),
    /*0xF1*/ InstructionSignature::new(Opcode::SBC, AddressingMode::IndirectIndexed),
    /*0xF2*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xF3*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xF4*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xF5*/ InstructionSignature::new(Opcode::SBC, AddressingMode::ZeroPageX),
    /*0xF6*/ InstructionSignature::new(Opcode::INC, AddressingMode::ZeroPageX),
    /*0xF7*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xF8*/ InstructionSignature::new(Opcode::SED, AddressingMode::Implied),
    /*0xF9*/ InstructionSignature::new(Opcode::SBC, AddressingMode::AbsoluteY),
    /*0xFA*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xFB*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xFC*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
    /*0xFD*/ InstructionSignature::new(Opcode::SBC, AddressingMode::AbsoluteX),
    /*0xFE*/ InstructionSignature::new(Opcode::INC, AddressingMode::AbsoluteX),
    /*0xFF*/ InstructionSignature::new(Opcode::UND, AddressingMode::Implied),
];
