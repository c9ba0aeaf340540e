use super::alu::branch_target;
use super::memory::{little_endian, Memory, MemoryError};
use super::registers::Registers;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolutionError>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Error)]
pub enum ResolutionError {
    #[error("memory error during addressing mode resolution: {0}")]
    Memory(#[from] MemoryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressingModeResolution {
    pub operands: Vec<u8>,
    pub addressing_mode: AddressingMode,
    pub target_address: Option<u16>,
}

impl AddressingModeResolution {
    fn new(operands: Vec<u8>, addressing_mode: AddressingMode, target_address: Option<u16>) -> Self {
        AddressingModeResolution {
            operands,
            addressing_mode,
            target_address,
        }
    }
}

impl fmt::Display for AddressingModeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target_address {
            Some(addr) => write!(
                f,
                "{: <9}(#0x{:04X})",
                format!("{}", self.addressing_mode),
                addr
            ),
            None => write!(f, "{: <9}         ", format!("{}", self.addressing_mode)),
        }
    }
}

/*
 * AddressingMode
 * Each variant carries the operand bytes as they sit in memory (low byte
 * first). The dispatch table holds variants with blank operands that are
 * filled by `with_operands` when an instruction is decoded.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate([u8; 1]),
    ZeroPage([u8; 1]),
    ZeroPageXIndexed([u8; 1]),
    ZeroPageYIndexed([u8; 1]),
    ZeroPageXIndexedIndirect([u8; 1]),
    ZeroPageIndirectYIndexed([u8; 1]),
    Absolute([u8; 2]),
    AbsoluteXIndexed([u8; 2]),
    AbsoluteYIndexed([u8; 2]),
    Indirect([u8; 2]),
    Relative(u16, [u8; 1]),
}

impl AddressingMode {
    /*
     * solve
     * Compute the effective address of the operand from the operand bytes,
     * the index registers and, for indirect modes, the memory. Immediate
     * resolves to the address of its operand byte. Relative resolves to the
     * branch destination. Nothing is mutated.
     */
    pub fn solve(
        &self,
        opcode_address: u16,
        memory: &Memory,
        registers: &Registers,
    ) -> Result<AddressingModeResolution> {
        let target_address = match *self {
            AddressingMode::Implied | AddressingMode::Accumulator => None,
            AddressingMode::Immediate(_) => Some(opcode_address.wrapping_add(1)),
            AddressingMode::ZeroPage(v) => Some(v[0] as u16),
            AddressingMode::ZeroPageXIndexed(v) => Some(v[0].wrapping_add(registers.register_x) as u16),
            AddressingMode::ZeroPageYIndexed(v) => Some(v[0].wrapping_add(registers.register_y) as u16),
            AddressingMode::ZeroPageXIndexedIndirect(v) => {
                Some(zero_page_pointer(memory, v[0].wrapping_add(registers.register_x))?)
            }
            AddressingMode::ZeroPageIndirectYIndexed(v) => Some(
                zero_page_pointer(memory, v[0])?.wrapping_add(registers.register_y as u16),
            ),
            AddressingMode::Absolute(v) => Some(little_endian(v)),
            AddressingMode::AbsoluteXIndexed(v) => {
                Some(little_endian(v).wrapping_add(registers.register_x as u16))
            }
            AddressingMode::AbsoluteYIndexed(v) => {
                Some(little_endian(v).wrapping_add(registers.register_y as u16))
            }
            AddressingMode::Indirect(v) => {
                let pointer = little_endian(v);
                Some(little_endian([
                    memory.read_byte(pointer as usize)?,
                    memory.read_byte(pointer.wrapping_add(1) as usize)?,
                ]))
            }
            AddressingMode::Relative(addr, v) => Some(branch_target(addr, v[0])),
        };

        Ok(AddressingModeResolution::new(
            self.get_operands(),
            *self,
            target_address,
        ))
    }

    /// Number of bytes following the opcode.
    pub fn operand_len(&self) -> usize {
        match *self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute(_)
            | AddressingMode::AbsoluteXIndexed(_)
            | AddressingMode::AbsoluteYIndexed(_)
            | AddressingMode::Indirect(_) => 2,
            _ => 1,
        }
    }

    /// Same mode carrying the operands read after the opcode at `address`.
    /// Only the first `operand_len()` bytes are taken into account.
    pub fn with_operands(&self, address: u16, operands: [u8; 2]) -> AddressingMode {
        let [lo, hi] = operands;

        match *self {
            AddressingMode::Implied => AddressingMode::Implied,
            AddressingMode::Accumulator => AddressingMode::Accumulator,
            AddressingMode::Immediate(_) => AddressingMode::Immediate([lo]),
            AddressingMode::ZeroPage(_) => AddressingMode::ZeroPage([lo]),
            AddressingMode::ZeroPageXIndexed(_) => AddressingMode::ZeroPageXIndexed([lo]),
            AddressingMode::ZeroPageYIndexed(_) => AddressingMode::ZeroPageYIndexed([lo]),
            AddressingMode::ZeroPageXIndexedIndirect(_) => {
                AddressingMode::ZeroPageXIndexedIndirect([lo])
            }
            AddressingMode::ZeroPageIndirectYIndexed(_) => {
                AddressingMode::ZeroPageIndirectYIndexed([lo])
            }
            AddressingMode::Absolute(_) => AddressingMode::Absolute([lo, hi]),
            AddressingMode::AbsoluteXIndexed(_) => AddressingMode::AbsoluteXIndexed([lo, hi]),
            AddressingMode::AbsoluteYIndexed(_) => AddressingMode::AbsoluteYIndexed([lo, hi]),
            AddressingMode::Indirect(_) => AddressingMode::Indirect([lo, hi]),
            AddressingMode::Relative(_, _) => AddressingMode::Relative(address, [lo]),
        }
    }

    pub fn get_operands(&self) -> Vec<u8> {
        match *self {
            AddressingMode::Implied | AddressingMode::Accumulator => vec![],
            AddressingMode::Immediate(v)
            | AddressingMode::ZeroPage(v)
            | AddressingMode::ZeroPageXIndexed(v)
            | AddressingMode::ZeroPageYIndexed(v)
            | AddressingMode::ZeroPageXIndexedIndirect(v)
            | AddressingMode::ZeroPageIndirectYIndexed(v)
            | AddressingMode::Relative(_, v) => v.to_vec(),
            AddressingMode::Absolute(v)
            | AddressingMode::AbsoluteXIndexed(v)
            | AddressingMode::AbsoluteYIndexed(v)
            | AddressingMode::Indirect(v) => v.to_vec(),
        }
    }
}

// the pointer high byte is read in the zero page as well
fn zero_page_pointer(memory: &Memory, pointer: u8) -> Result<u16> {
    Ok(little_endian([
        memory.read_byte(pointer as usize)?,
        memory.read_byte(pointer.wrapping_add(1) as usize)?,
    ]))
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AddressingMode::Implied => write!(f, ""),
            AddressingMode::Accumulator => write!(f, "A"),
            AddressingMode::Immediate(v) => write!(f, "#${:02x}", v[0]),
            AddressingMode::ZeroPage(v) => write!(f, "${:02x}", v[0]),
            AddressingMode::ZeroPageXIndexed(v) => write!(f, "${:02x},X", v[0]),
            AddressingMode::ZeroPageYIndexed(v) => write!(f, "${:02x},Y", v[0]),
            AddressingMode::ZeroPageXIndexedIndirect(v) => write!(f, "(${:02x},X)", v[0]),
            AddressingMode::ZeroPageIndirectYIndexed(v) => write!(f, "(${:02x}),Y", v[0]),
            AddressingMode::Absolute(v) => write!(f, "${:02X}{:02X}", v[1], v[0]),
            AddressingMode::AbsoluteXIndexed(v) => write!(f, "${:02X}{:02X},X", v[1], v[0]),
            AddressingMode::AbsoluteYIndexed(v) => write!(f, "${:02X}{:02X},Y", v[1], v[0]),
            AddressingMode::Indirect(v) => write!(f, "(${:02X}{:02X})", v[1], v[0]),
            AddressingMode::Relative(addr, v) => write!(f, "${:04X}", branch_target(addr, v[0])),
        }
    }
}
