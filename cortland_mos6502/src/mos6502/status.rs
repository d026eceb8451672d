/// Status represents the processor status register, `p` on the `MOS6502`.
///
/// Each bit in `p` has a different meaning:
///
/// ```text
/// +---+---+---+---+---+---+---+---+
/// | N | V |   | B | D | I | Z | C |
/// +---+---+---+---+---+---+---+---+
///   |   |   |   |   |   |   |   |
///   |   |   |   |   |   |   |   \-------- CARRY
///   |   |   |   |   |   |   |
///   |   |   |   |   |   |   \------------ ZERO RESULT
///   |   |   |   |   |   |
///   |   |   |   |   |   \---------------- INTERRUPT DISABLE
///   |   |   |   |   |
///   |   |   |   |   \-------------------- DECIMAL MODE
///   |   |   |   |
///   |   |   |   \------------------------ BREAK COMMAND
///   |   |   |
///   |   |   \---------------------------- UNUSED (always 1)
///   |   |
///   |   \-------------------------------- OVERFLOW
///   |
///   \------------------------------------ NEGATIVE RESULT
/// ```
///
/// Gotchas:
///
/// - The unused bit is hardwired high: every value observed in `p` (pushed
///   to the stack, pulled via `PLP`/`RTI`, left by reset) has bit 5 set.
/// - `Break` is only forced high in the copies pushed by `PHP` and `BRK`;
///   the live register keeps whatever was last written.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Status(pub u8);

impl Status {
    pub fn get(&self, flag: StatusFlag) -> bool {
        let bit = flag as u8;

        (self.0 & (1 << bit)) != 0
    }

    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        let bit = flag as u8;
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }

    pub fn with(mut self, flag: StatusFlag, value: bool) -> Status {
        self.set(flag, value);
        self
    }
}

impl Default for Status {
    fn default() -> Status {
        Status(1 << StatusFlag::Unused as u8)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    DecimalMode = 3,
    Break = 4,
    Unused = 5,
    Overflow = 6,
    Negative = 7,
}
