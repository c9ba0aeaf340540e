use super::microcode::Result as MicrocodeResult;
use crate::addressing_mode::*;
use crate::memory::Memory;
use crate::registers::Registers;
use std::fmt;

pub type Microcode = fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>;

/*
 * CPUInstruction
 * A decoded instruction: where it sits, its opcode, the addressing mode
 * carrying its operands and the microcode implementing it. It only lives
 * for one tick.
 */
#[derive(Clone)]
pub struct CPUInstruction {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub fn new(
        address: u16,
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic,
            addressing_mode,
            microcode,
        }
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }

    pub fn resolve(
        &self,
        memory: &Memory,
        registers: &Registers,
    ) -> Result<AddressingModeResolution> {
        self.addressing_mode.solve(self.address, memory, registers)
    }

    /// Opcode and operand count, the size of the instruction in memory.
    pub fn size(&self) -> usize {
        1 + self.addressing_mode.operand_len()
    }
}

fn byte_sequence(opcode: u8, operands: &[u8]) -> String {
    format!(
        "({})",
        std::iter::once(&opcode)
            .chain(operands)
            .map(|byte| format!("{:02x}", byte))
            .collect::<Vec<String>>()
            .join(" ")
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}",
            self.address,
            byte_sequence(self.opcode, &self.addressing_mode.get_operands()),
            self.mnemonic,
            format!("{}", self.addressing_mode)
        )
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/*
 * LogLine
 * What an executed instruction did, rendered as one trace line.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub resolution: AddressingModeResolution,
    pub outcome: String,
}

impl LogLine {
    pub fn new(
        cpu_instruction: &CPUInstruction,
        resolution: AddressingModeResolution,
        outcome: String,
    ) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic,
            resolution,
            outcome,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}  {}",
            self.address,
            byte_sequence(self.opcode, &self.resolution.operands),
            self.mnemonic,
            self.resolution,
            self.outcome
        )
    }
}
