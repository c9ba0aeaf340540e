use super::*;

pub fn pha(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let accumulator = registers.accumulator;
    registers.stack_push(memory, accumulator);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:02x}]", registers.stack_pointer),
    ))
}
