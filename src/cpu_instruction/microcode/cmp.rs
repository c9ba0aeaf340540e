use super::*;

pub fn cmp(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = registers.accumulator;
    compare(memory, registers, cpu_instruction, register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cmp_equal() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc9, "CMP", AddressingMode::Immediate([0x10]), cmp);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc9, 0x10]);
        registers.accumulator = 0x10;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("CMP", log_line.mnemonic);
        assert_eq!(0x10, registers.accumulator);
        assert!(registers.c_flag_is_set());
        assert!(registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert_eq!(0x0602, registers.command_pointer);
    }

    #[test]
    fn test_cmp_lower() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc9, "CMP", AddressingMode::Immediate([0x10]), cmp);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc9, 0x10]);
        registers.accumulator = 0x0f;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(!registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(registers.n_flag_is_set());
    }

    #[test]
    fn test_cmp_greater() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc9, "CMP", AddressingMode::Immediate([0x10]), cmp);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc9, 0x10]);
        registers.accumulator = 0x11;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
    }
}
