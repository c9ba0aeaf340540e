use super::*;

pub fn bmi(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.n_flag_is_set();
    branch(memory, registers, cpu_instruction, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_bmi_branching_forward() {
        let cpu_instruction = CPUInstruction::new(
            0x0600,
            0x30,
            "BMI",
            AddressingMode::Relative(0x0600, [0x0a]),
            bmi,
        );
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x30, 0x0a]);
        registers.set_n_flag(true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("BMI", log_line.mnemonic);
        assert_eq!(0x060c, registers.command_pointer);
    }

    #[test]
    fn test_bmi_branching_backward() {
        let cpu_instruction = CPUInstruction::new(
            0x0610,
            0x30,
            "BMI",
            AddressingMode::Relative(0x0610, [0xf0]),
            bmi,
        );
        let (mut memory, mut registers) = get_stuff(0x0610, vec![0x30, 0xf0]);
        registers.set_n_flag(true);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x0602, registers.command_pointer);
    }

    #[test]
    fn test_bmi_not_branching() {
        let cpu_instruction = CPUInstruction::new(
            0x0600,
            0x30,
            "BMI",
            AddressingMode::Relative(0x0600, [0x0a]),
            bmi,
        );
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x30, 0x0a]);
        registers.set_n_flag(!true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x0602, registers.command_pointer);
        assert_eq!("[CP=0x0602]", log_line.outcome);
    }
}
