use super::*;

/// # ADC - Add with carry
///
/// Binary mode only, the D flag is ignored.
/// The formula for the oVerflow bit comes from
/// http://www.righto.com/2012/12/the-6502-overflow-flag-explained.html
pub fn adc(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let byte = read_operand(memory, &resolution, cpu_instruction)?;
    let sum = alu::add_with_carry(registers.accumulator, byte, registers.c_flag_is_set());
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
    fn test_adc() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0x69, "ADC", AddressingMode::Immediate([0x0a]), adc);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x69, 0x0a]);
        registers.accumulator = 0x28;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("ADC", log_line.mnemonic);
        assert_eq!(0x32, registers.accumulator);
        assert!(!registers.c_flag_is_set());
        assert!(!registers.v_flag_is_set());
        assert_eq!(0x0602, registers.command_pointer);
        assert_eq!("(0x0a)[A=0x32][S=nv-bdizc]", log_line.outcome);
    }

    #[test]
    fn test_adc_overflow() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0x69, "ADC", AddressingMode::Immediate([0x01]), adc);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x69, 0x01]);
        registers.accumulator = 0x7f;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x80, registers.accumulator);
        assert!(registers.v_flag_is_set());
        assert!(registers.n_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
    }

    #[test]
    fn test_adc_carry_in_and_out() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0x65, "ADC", AddressingMode::ZeroPage([0x10]), adc);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x65, 0x10]);
        memory.write_byte(0x0010, 0xff).unwrap();
        registers.accumulator = 0x00;
        registers.set_c_flag(true);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.accumulator);
        assert!(registers.c_flag_is_set());
        assert!(registers.z_flag_is_set());
        assert!(!registers.v_flag_is_set());
    }
}
