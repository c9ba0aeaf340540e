use super::*;

pub fn bcs(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.c_flag_is_set();
    branch(memory, registers, cpu_instruction, condition)
}
