use super::*;

pub fn cpx(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = registers.register_x;
    compare(memory, registers, cpu_instruction, register)
}
