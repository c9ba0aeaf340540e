use super::*;

pub fn tay(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.register_y = registers.accumulator;
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
    fn test_tay() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xa8, "TAY", AddressingMode::Implied, tay);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xa8]);
        registers.accumulator = 0x80;
        registers.register_y = 0x01;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("TAY", log_line.mnemonic);
        assert_eq!(0x80, registers.register_y);
        assert_eq!(0x80, registers.accumulator);
        assert!(registers.n_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert_eq!(0x0601, registers.command_pointer);
    }

    #[test]
    fn test_tay_zero() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xa8, "TAY", AddressingMode::Implied, tay);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xa8]);
        registers.accumulator = 0x00;
        registers.register_y = 0x01;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.register_y);
        assert!(!registers.n_flag_is_set());
        assert!(registers.z_flag_is_set());
    }
}
