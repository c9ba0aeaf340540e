use super::*;

pub fn iny(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.register_y = registers.register_y.wrapping_add(1);
    registers.set_zn_flags(registers.register_y);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[Y=0x{:02x}][S={}]", registers.register_y, registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_iny() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc8, "INY", AddressingMode::Implied, iny);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc8]);
        registers.register_y = 0x10;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("INY", log_line.mnemonic);
        assert_eq!(0x11, registers.register_y);
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert_eq!(0x0601, registers.command_pointer);
    }

    #[test]
    fn test_iny_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc8, "INY", AddressingMode::Implied, iny);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc8]);
        registers.register_y = 0xff;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.register_y);
    }
}
