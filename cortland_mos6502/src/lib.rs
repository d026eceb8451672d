pub mod mos6502;

pub use mos6502::MOS6502;
