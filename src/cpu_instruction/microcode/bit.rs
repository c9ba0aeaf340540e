use super::*;

/// # BIT
///
/// Test the accumulator against a memory byte. Z is set when they share no
/// bit, N & V are bits 7 & 6 of the memory byte. The accumulator is left
/// untouched.
pub fn bit(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let byte = read_operand(memory, &resolution, cpu_instruction)?;
    registers.set_z_flag(alu::zero(registers.accumulator & byte));
    registers.set_v_flag(byte & 0b0100_0000 != 0);
    registers.set_n_flag(alu::negative(byte));
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("(0x{:02x})[S={}]", byte, registers.format_status()),
    ))
}
