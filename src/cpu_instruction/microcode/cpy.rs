use super::*;

pub fn cpy(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = registers.register_y;
    compare(memory, registers, cpu_instruction, register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cpy_equal() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc0, "CPY", AddressingMode::Immediate([0x10]), cpy);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc0, 0x10]);
        registers.register_y = 0x10;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("CPY", log_line.mnemonic);
        assert_eq!(0x10, registers.register_y);
        assert!(registers.c_flag_is_set());
        assert!(registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
        assert_eq!(0x0602, registers.command_pointer);
    }

    #[test]
    fn test_cpy_lower() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc0, "CPY", AddressingMode::Immediate([0x10]), cpy);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc0, 0x10]);
        registers.register_y = 0x0f;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(!registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(registers.n_flag_is_set());
    }

    #[test]
    fn test_cpy_greater() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc0, "CPY", AddressingMode::Immediate([0x10]), cpy);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc0, 0x10]);
        registers.register_y = 0x11;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.c_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.n_flag_is_set());
    }
}
