use super::*;
use crate::addressing_mode::AddressingMode;

pub fn lsr(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;

    let byte = match resolution.addressing_mode {
        AddressingMode::Accumulator => {
            let byte = registers.accumulator;
            registers.accumulator = byte >> 1;
            byte
        }
        _ => {
            let target_address = target_address(&resolution, cpu_instruction)? as usize;
            let byte = memory.read_byte(target_address)?;
            memory.write_byte(target_address, byte >> 1)?;
            byte
        }
    };
    registers.set_c_flag(byte & 0x01 == 0x01);
    registers.set_zn_flags(byte >> 1);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x{:02x}[S={}]", byte >> 1, registers.format_status()),
    ))
}
