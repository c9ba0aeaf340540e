use super::*;

/// # SBC - Subtract with carry
///
/// The carry is the opposite of a borrow: it has to be set before a single
/// byte subtraction and it is cleared when the result went below zero.
pub fn sbc(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let byte = read_operand(memory, &resolution, cpu_instruction)?;
    let sum = alu::subtract_with_carry(registers.accumulator, byte, registers.c_flag_is_set());
    registers.accumulator = sum.value;
    registers.set_c_flag(sum.carry);
    registers.set_v_flag(sum.overflow);
    registers.set_zn_flags(sum.value);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "(0x{:02x})[A=0x{:02x}][S={}]",
            byte,
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_sbc() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xe9, "SBC", AddressingMode::Immediate([0x08]), sbc);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xe9, 0x08]);
        registers.accumulator = 0x0a;
        registers.set_c_flag(true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("SBC", log_line.mnemonic);
        assert_eq!(0x02, registers.accumulator);
        assert!(registers.c_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert_eq!(0x0602, registers.command_pointer);
    }

    #[test]
    fn test_sbc_borrow() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xe9, "SBC", AddressingMode::Immediate([0x01]), sbc);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xe9, 0x01]);
        registers.accumulator = 0x00;
        registers.set_c_flag(true);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xff, registers.accumulator);
        assert!(!registers.c_flag_is_set());
        assert!(registers.n_flag_is_set());
        assert!(!registers.v_flag_is_set());
    }

    #[test]
    fn test_sbc_without_carry() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xe9, "SBC", AddressingMode::Immediate([0x01]), sbc);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xe9, 0x01]);
        registers.accumulator = 0x80;
        registers.set_c_flag(false);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x7e, registers.accumulator);
        assert!(registers.c_flag_is_set());
        assert!(registers.v_flag_is_set());
    }
}
