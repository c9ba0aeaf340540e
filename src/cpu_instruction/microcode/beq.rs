use super::*;

pub fn beq(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.z_flag_is_set();
    branch(memory, registers, cpu_instruction, condition)
}
