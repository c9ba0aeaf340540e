#[allow(clippy::module_inception)]
mod cpu_instruction;
pub mod microcode;
mod opcodes;

pub use self::cpu_instruction::{CPUInstruction, LogLine, Microcode};
pub use self::opcodes::{OpcodeEntry, OpcodeTable};
