use super::*;

pub fn nop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    next_instruction(registers, &resolution);

    Ok(LogLine::new(cpu_instruction, resolution, String::new()))
}
