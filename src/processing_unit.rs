use std::ops::Range;

use thiserror::Error;
use tracing::{debug, info};

use super::cpu_instruction::microcode::MicrocodeError;
use super::cpu_instruction::{CPUInstruction, LogLine, OpcodeTable};
use super::memory::{AddressableIO, Memory, MemoryError, MEMORY_SIZE};
use super::registers::Registers;
use super::PROGRAM_START_ADDR;

#[derive(Debug, Error)]
pub enum CpuError {
    #[error("instruction failed: {0}")]
    Microcode(#[from] MicrocodeError),
    #[error("memory fault: {0}")]
    Memory(#[from] MemoryError),
}

/*
 * CpuState
 * Idle → Running on start.
 * Running → Breakpointed when the instruction just executed set the B flag,
 * back to Running on resume.
 * Running → Halted when the next instruction is not entirely inside the
 * program region. Halted is terminal.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    Idle,
    Running,
    Halted,
    Breakpointed,
}

impl std::fmt::Display for CpuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CpuState::Idle => "idle",
            CpuState::Running => "running",
            CpuState::Halted => "halted",
            CpuState::Breakpointed => "breakpoint",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one tick. Only memory or microcode faults are errors, the
/// end of the program and breakpoints are normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Executed(LogLine),
    Breakpoint(LogLine),
    EndOfProgram { address: u16 },
    Inactive(CpuState),
}

/*
 * Cpu
 * Owns the register file, the memory and the dispatch table. Each instance
 * is independent.
 */
pub struct Cpu {
    pub registers: Registers,
    pub memory: Memory,
    opcodes: OpcodeTable,
    state: CpuState,
    program: Range<usize>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_memory(Memory::default())
    }

    /// Build a processor on an existing memory. Until a program is loaded
    /// the whole address space is considered as the program.
    pub fn with_memory(memory: Memory) -> Self {
        Cpu {
            registers: Registers::new(PROGRAM_START_ADDR),
            memory,
            opcodes: OpcodeTable::new(),
            state: CpuState::Idle,
            program: 0..MEMORY_SIZE,
        }
    }

    /// Copy the program in memory, make it the program region and point
    /// the command pointer at its first byte.
    pub fn load_program(&mut self, address: u16, program: &[u8]) -> Result<(), CpuError> {
        self.memory.write(address as usize, program)?;
        self.program = address as usize..address as usize + program.len();
        self.registers.command_pointer = address;
        info!(
            "{} bytes loaded at #0x{:04X}",
            program.len(),
            address
        );

        Ok(())
    }

    pub fn program_region(&self) -> Range<usize> {
        self.program.clone()
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CpuState::Running
    }

    pub fn start(&mut self) {
        if self.state == CpuState::Idle {
            self.state = CpuState::Running;
            info!(
                "started at #0x{:04X}",
                self.registers.command_pointer
            );
        }
    }

    /// Leave the breakpoint: the B flag is cleared and ticks are processed
    /// again. Returns false when the processor was not on a breakpoint.
    pub fn resume(&mut self) -> bool {
        if self.state != CpuState::Breakpointed {
            return false;
        }
        self.registers.set_b_flag(false);
        self.state = CpuState::Running;
        info!(
            "resumed at #0x{:04X}",
            self.registers.command_pointer
        );

        true
    }

    /// Back to the state of a fresh processor: zeroed memory and registers.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.registers = Registers::new(PROGRAM_START_ADDR);
        self.program = 0..MEMORY_SIZE;
        self.state = CpuState::Idle;
        info!("reset");
    }

    fn contains(&self, address: u16, len: usize) -> bool {
        let address = address as usize;
        address >= self.program.start && address + len <= self.program.end
    }

    /// Decode the instruction at the command pointer without executing it.
    /// None when it does not lie within the program region.
    pub fn peek_instruction(&self) -> Result<Option<CPUInstruction>, CpuError> {
        let address = self.registers.command_pointer;
        if !self.contains(address, 1) {
            return Ok(None);
        }
        let opcode = self.memory.read_byte(address as usize)?;
        let len = self.opcodes.operand_len(opcode);
        if !self.contains(address, 1 + len) {
            return Ok(None);
        }
        let mut operands = [0x00; 2];
        for (index, operand) in operands.iter_mut().enumerate().take(len) {
            *operand = self
                .memory
                .read_byte(address.wrapping_add(1 + index as u16) as usize)?;
        }

        Ok(Some(self.opcodes.decode(address, opcode, operands)))
    }

    /*
     * tick
     * fetch, decode, execute. The instruction completes entirely before
     * this returns.
     */
    pub fn tick(&mut self) -> Result<Tick, CpuError> {
        if self.state != CpuState::Running {
            return Ok(Tick::Inactive(self.state));
        }

        let cpu_instruction = match self.peek_instruction()? {
            Some(cpu_instruction) => cpu_instruction,
            None => {
                let address = self.registers.command_pointer;
                self.state = CpuState::Halted;
                info!("end of program reached at #0x{:04X}, halted", address);

                return Ok(Tick::EndOfProgram { address });
            }
        };

        let log_line = cpu_instruction.execute(&mut self.memory, &mut self.registers)?;
        debug!("{}", log_line);

        if self.registers.b_flag_is_set() {
            self.state = CpuState::Breakpointed;
            info!(
                "breakpoint at #0x{:04X}",
                log_line.address
            );

            return Ok(Tick::Breakpoint(log_line));
        }

        Ok(Tick::Executed(log_line))
    }

    /// Start if needed and tick until the processor stops running, either
    /// halted or on a breakpoint. A program that never ends keeps this
    /// looping.
    pub fn execute(&mut self) -> Result<Vec<LogLine>, CpuError> {
        self.start();
        let mut log_lines = Vec::new();

        while self.is_running() {
            match self.tick()? {
                Tick::Executed(log_line) | Tick::Breakpoint(log_line) => log_lines.push(log_line),
                Tick::EndOfProgram { .. } | Tick::Inactive(_) => {}
            }
        }

        Ok(log_lines)
    }
}
