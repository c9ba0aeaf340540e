use super::*;

pub fn dec(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let target_address = target_address(&resolution, cpu_instruction)? as usize;
    let byte = memory.read_byte(target_address)?.wrapping_sub(1);
    memory.write_byte(target_address, byte)?;
    registers.set_zn_flags(byte);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("0x{:02x}[S={}]", byte, registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing_mode::AddressingMode;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_dec() {
        let cpu_instruction =
            CPUInstruction::new(0x0600, 0xc6, "DEC", AddressingMode::ZeroPage([0x0a]), dec);
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xc6, 0x0a]);
        memory.write_byte(0x000a, 0x01).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("DEC", log_line.mnemonic);
        assert_eq!(0x00, memory.read_byte(0x000a).unwrap());
        assert!(registers.z_flag_is_set());
        assert_eq!(0x0602, registers.command_pointer);
    }

    #[test]
    fn test_dec_wraps() {
        let cpu_instruction = CPUInstruction::new(
            0x0600,
            0xce,
            "DEC",
            AddressingMode::Absolute([0x00, 0x02]),
            dec,
        );
        let (mut memory, mut registers) = get_stuff(0x0600, vec![0xce, 0x00, 0x02]);
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xff, memory.read_byte(0x0200).unwrap());
        assert!(registers.n_flag_is_set());
        assert!(!registers.z_flag_is_set());
        assert_eq!(0x0603, registers.command_pointer);
    }
}
