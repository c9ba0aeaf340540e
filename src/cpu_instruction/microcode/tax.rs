use super::*;

pub fn tax(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.register_x = registers.accumulator;
    registers.set_zn_flags(registers.register_x);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[X=0x{:02x}][S={}]", registers.register_x, registers.format_status()),
    ))
}
