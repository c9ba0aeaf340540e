use crate::addressing_mode::ResolutionError;
use crate::memory::MemoryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MicrocodeError {
    #[error("memory error during microcode operation: {0}")]
    Memory(#[from] MemoryError),
    #[error("resolution error caught in microcode operation: {0}")]
    Resolution(#[from] ResolutionError),
    // the addressing mode gave no address to an instruction that needs one
    #[error("{mnemonic} at #0x{address:04X} needs an operand, its addressing mode provides none")]
    MissingOperand { mnemonic: &'static str, address: u16 },
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;
