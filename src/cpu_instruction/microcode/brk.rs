use super::*;

/// # BRK
///
/// Software breakpoint.
///
/// * the address two bytes after the BRK instruction is pushed to the stack,
///   high byte first,
/// * the status register is pushed with the B flag set,
/// * the B flag is set and the command pointer moves to the next byte.
///
/// There is no jump through the interrupt vector: the processing unit sees
/// the B flag and pauses until it is told to resume.
pub fn brk(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;

    let bytes = cpu_instruction.address.wrapping_add(2).to_le_bytes();
    registers.stack_push(memory, bytes[1]);
    registers.stack_push(memory, bytes[0]);
    registers.set_b_flag(true);
    let status = registers.status_register;
    registers.stack_push(memory, status);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}][S={}]",
            registers.command_pointer,
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
    use crate::memory::{AddressableIO, STACK_BASE_ADDR};

    #[test]
    fn test_brk() {
        let cpu_instruction = CPUInstruction::new(0x0600, 0x00, "BRK", AddressingMode::Implied, brk);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x00]);
        registers.set_c_flag(true);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("BRK", log_line.mnemonic);
        assert_eq!(0x0601, registers.command_pointer);
        assert_eq!(0xfc, registers.stack_pointer);
        assert!(registers.b_flag_is_set());
        assert!(registers.c_flag_is_set());
        assert_eq!(
            vec![0b0011_0001, 0x02, 0x06],
            memory.read(STACK_BASE_ADDR + 0xfd, 3).unwrap()
        );
        assert_eq!("[CP=0x0601][SP=0xfc][S=nv-BdizC]", log_line.outcome);
    }
}
