use super::*;

pub fn tya(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.accumulator = registers.register_y;
    registers.set_zn_flags(registers.accumulator);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[A=0x{:02x}][S={}]", registers.accumulator, registers.format_status()),
    ))
}
