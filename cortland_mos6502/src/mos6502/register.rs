/// The programmer-visible registers of the 6502, used to share the
/// load/store/transfer implementations across instructions.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Register {
    A,
    X,
    Y,
    P,
    SP,
}
