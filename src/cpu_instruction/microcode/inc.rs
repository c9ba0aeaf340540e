use super::*;

pub fn inc(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let target_address = target_address(&resolution, cpu_instruction)? as usize;
    let byte = memory.read_byte(target_address)?.wrapping_add(1);
    memory.write_byte(target_address, byte)?;
    registers.set_zn_flags(byte);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x{:02x}[S={}]", byte, registers.format_status()),
    ))
}
