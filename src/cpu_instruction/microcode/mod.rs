use super::{CPUInstruction, LogLine};
use crate::addressing_mode::AddressingModeResolution;
use crate::alu;
use crate::memory::Memory;
use crate::registers::Registers;

mod error;
pub use error::{MicrocodeError, Result};

mod adc;
mod and;
mod bcc;
mod bcs;
mod beq;
mod bit;
mod bmi;
mod bne;
mod bpl;
mod brk;
mod clc;
mod cmp;
mod cpx;
mod cpy;
mod dec;
mod dex;
mod dey;
mod inc;
mod inx;
mod iny;
mod jmp;
mod jsr;
mod lda;
mod ldx;
mod ldy;
mod lsr;
mod nop;
mod pha;
mod pla;
mod rts;
mod sbc;
mod sec;
mod sta;
mod stx;
mod sty;
mod tax;
mod tay;
mod txa;
mod tya;
mod unknown;

pub use adc::adc;
pub use and::and;
pub use bcc::bcc;
pub use bcs::bcs;
pub use beq::beq;
pub use bit::bit;
pub use bmi::bmi;
pub use bne::bne;
pub use bpl::bpl;
pub use brk::brk;
pub use clc::clc;
pub use cmp::cmp;
pub use cpx::cpx;
pub use cpy::cpy;
pub use dec::dec;
pub use dex::dex;
pub use dey::dey;
pub use inc::inc;
pub use inx::inx;
pub use iny::iny;
pub use jmp::jmp;
pub use jsr::jsr;
pub use lda::lda;
pub use ldx::ldx;
pub use ldy::ldy;
pub use lsr::lsr;
pub use nop::nop;
pub use pha::pha;
pub use pla::pla;
pub use rts::rts;
pub use sbc::sbc;
pub use sec::sec;
pub use sta::sta;
pub use stx::stx;
pub use sty::sty;
pub use tax::tax;
pub use tay::tay;
pub use txa::txa;
pub use tya::tya;
pub use unknown::unknown;

fn target_address(
    resolution: &AddressingModeResolution,
    cpu_instruction: &CPUInstruction,
) -> Result<u16> {
    resolution
        .target_address
        .ok_or(MicrocodeError::MissingOperand {
            mnemonic: cpu_instruction.mnemonic,
            address: cpu_instruction.address,
        })
}

fn read_operand(
    memory: &Memory,
    resolution: &AddressingModeResolution,
    cpu_instruction: &CPUInstruction,
) -> Result<u8> {
    let address = target_address(resolution, cpu_instruction)?;

    Ok(memory.read_byte(address as usize)?)
}

fn next_instruction(registers: &mut Registers, resolution: &AddressingModeResolution) {
    registers.advance(1 + resolution.operands.len());
}

/*
 * shared by CMP, CPX & CPY
 */
fn compare(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    register: u8,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;
    let byte = read_operand(memory, &resolution, cpu_instruction)?;
    let comparison = alu::compare(register, byte);
    registers.set_c_flag(comparison.carry);
    registers.set_z_flag(comparison.zero);
    registers.set_n_flag(comparison.negative);
    next_instruction(registers, &resolution);

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("(0x{:02x})[S={}]", byte, registers.format_status()),
    ))
}

/*
 * shared by the conditional branches
 * When the condition holds the command pointer goes to the resolved
 * destination, otherwise to the next instruction.
 */
fn branch(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    condition: bool,
) -> Result<LogLine> {
    let resolution = cpu_instruction.resolve(memory, registers)?;

    if condition {
        registers.command_pointer = target_address(&resolution, cpu_instruction)?;
    } else {
        next_instruction(registers, &resolution);
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[CP=0x{:04X}]", registers.command_pointer),
    ))
}
