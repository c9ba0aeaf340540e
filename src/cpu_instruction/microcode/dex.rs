use super::*;

pub fn dex(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.register_x = registers.register_x.wrapping_sub(1);
    registers.set_zn_flags(registers.register_x);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[X=0x{:02x}][S={}]", registers.register_x, registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_dex() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xca, "DEX", AddressingMode::Implied, dex);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xca]);
        registers.register_x = 0x10;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("DEX", log_line.mnemonic);
        assert_eq!(0x0f, registers.register_x);
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert_eq!(0x0601, registers.command_pointer);
    }

    #[test]
    fn test_dex_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xca, "DEX", AddressingMode::Implied, dex);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xca]);
        registers.register_x = 0x00;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xff, registers.register_x);
    }
}
