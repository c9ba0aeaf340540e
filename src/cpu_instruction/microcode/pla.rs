use super::*;

pub fn pla(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    registers.accumulator = registers.stack_pull(memory);
    registers.set_zn_flags(registers.accumulator);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[A=0x{:02x}][SP=0x{:02x}][S={}]",
            registers.accumulator,
            registers.stack_pointer,
            registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::memory::PopPolicy;

    #[test]
    fn test_pla() {
        let cpu_instruction = CPUInstruction::new(0x0600, 0x68, "PLA", AddressingMode::Implied, pla);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x68]);
        registers.stack_push(&mut memory, 0x80);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("PLA", log_line.mnemonic);
        assert_eq!(0x80, registers.accumulator);
        assert_eq!(0xff, registers.stack_pointer);
        assert!(registers.n_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert_eq!(0x0601, registers.command_pointer);
        assert_eq!(0x80, memory.read_byte(0x01ff).unwrap());
    }

    #[test]
    fn test_pla_clearing_the_stack() {
        let cpu_instruction = CPUInstruction::new(0x0600, 0x68, "PLA", AddressingMode::Implied, pla);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x68]);
        memory.set_pop_policy(PopPolicy::Clear);
        registers.stack_push(&mut memory, 0x00);
        registers.accumulator = 0x12;
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.accumulator);
        assert!(registers.z_flag_is_set());
        assert_eq!(0x00, memory.read_byte(0x01ff).unwrap());
    }
}
