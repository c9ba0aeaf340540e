pub mod addressing_mode;
pub mod alu;
pub mod config;
pub mod console;
pub mod cpu_instruction;
pub mod display;
pub mod loader;
pub mod memory;
pub mod monitor;
mod processing_unit;
pub mod registers;
pub mod runner;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROGRAM_START_ADDR: u16 = 0x0600;
pub const DISPLAY_START_ADDR: usize = 0x0200;
pub const DISPLAY_LEN: usize = 0x0400;

pub use cpu_instruction::microcode::MicrocodeError;
pub use cpu_instruction::{CPUInstruction, LogLine};
pub use memory::{AddressableIO, DebugIO, Memory, MemoryError, MemoryView, PopPolicy, STACK_BASE_ADDR};
pub use processing_unit::*;
pub use registers::Registers;

/// Load a program at `address` on a fresh processor and run it until it
/// halts or stops on a breakpoint.
pub fn execute(address: u16, program: &[u8]) -> Result<(Cpu, Vec<LogLine>), CpuError> {
    let mut cpu = Cpu::new();
    cpu.load_program(address, program)?;
    let log_lines = cpu.execute()?;

    Ok((cpu, log_lines))
}
