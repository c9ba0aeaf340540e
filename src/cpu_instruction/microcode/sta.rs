use super::*;

pub fn sta(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    memory.write_byte(target_address as usize, registers.accumulator)?;
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("(0x{:02x})", registers.accumulator),
    ))
}
