use super::*;

/// # JSR
///
/// Push the address of the last byte of the JSR instruction (high byte
/// first) then jump. RTS adds one to what it pulls.
pub fn jsr(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let target_address = target_address(&resolution, cpu_instruction)?;

    let bytes = cpu_instruction
        .address
        .wrapping_add(resolution.operands.len() as u16)
        .to_le_bytes();
    registers.stack_push(memory, bytes[1]);
    registers.stack_push(memory, bytes[0]);
    registers.command_pointer = target_address;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:04X}][SP=0x{:02x}]",
            registers.command_pointer, registers.stack_pointer
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
    fn test_jsr() {
        let cpu_instruction = CPUInstruction::new(
            0x0600,
            0x20,
            "JSR",
            AddressingMode::Absolute([0x10, 0x06]),
            jsr,
        );
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0x20, 0x10, 0x06]);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("JSR", log_line.mnemonic);
        assert_eq!(0x0610, registers.command_pointer);
        assert_eq!(0xfd, registers.stack_pointer);
        assert_eq!(
            vec![0x02, 0x06],
            memory.read(STACK_BASE_ADDR + 0xfe, 2).unwrap()
        );
        assert_eq!("[CP=0x0610][SP=0xfd]", log_line.outcome);
    }
}
