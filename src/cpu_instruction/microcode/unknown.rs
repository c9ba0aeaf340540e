use super::*;

/*
 * unknown
 * Every opcode missing from the dispatch table ends here: nothing but the
 * command pointer changes and a warning is emitted.
 */
pub fn unknown(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    tracing::warn!(
        opcode = cpu_instruction.opcode,
        address = cpu_instruction.address,
        "unknown opcode 0x{:02X} at #0x{:04X}, skipped",
        cpu_instruction.opcode,
        cpu_instruction.address
    );
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("unknown opcode 0x{:02x}", cpu_instruction.opcode),
    ))
}
