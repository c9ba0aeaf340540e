use super::*;

pub fn dey(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.register_y = registers.register_y.wrapping_sub(1);
    registers.set_zn_flags(registers.register_y);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[Y=0x{:02x}][S={}]", registers.register_y, registers.format_status()),
    ))
}
