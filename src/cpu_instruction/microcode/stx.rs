use super::*;

pub fn stx(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let target_address = target_address(&resolution, cpu_instruction)?;
    memory.write_byte(target_address as usize, registers.register_x)?;
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("(0x{:02x})", registers.register_x),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_stx_zero_page() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0x86, "STX", AddressingMode::ZeroPage([0x20]), stx);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x86, 0x20]);
        registers.register_x = 0xaa;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xaa, memory.read_byte(0x0020).unwrap());
        assert_eq!(0x0602, registers.command_pointer);
    }
}
