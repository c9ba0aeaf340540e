use super::*;
use crate::memory::little_endian;

pub fn rts(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let lo = registers.stack_pull(memory);
    let hi = registers.stack_pull(memory);
    registers.command_pointer = little_endian([lo, hi]).wrapping_add(1);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}]",
            registers.command_pointer, registers.stack_pointer
        ),
    ))
}
