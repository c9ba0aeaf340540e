use std::fmt;

use super::memory::Memory;

/*
 * 6502 register file
 * accumulator, X & Y registers are 8 bits general purpose registers.
 * status flags register:
 * bit 7: Negative flag
 * bit 6: oVerflow flag
 * bit 5: not used, always set
 * bit 4: Break
 * bit 3: Decimal mode (never honored)
 * bit 2: Interrupt disable
 * bit 1: Zero flag
 * bit 0: Carry flag
 *
 * command pointer: 16 bits address register
 * stack pointer: 8 bits offset in page 0x0100, set at 0xff at start.
 * All arithmetic on registers wraps at their width.
 */
const FLAG_N: u8 = 0b1000_0000;
const FLAG_V: u8 = 0b0100_0000;
const FLAG_UNUSED: u8 = 0b0010_0000;
const FLAG_B: u8 = 0b0001_0000;
const FLAG_D: u8 = 0b0000_1000;
const FLAG_I: u8 = 0b0000_0100;
const FLAG_Z: u8 = 0b0000_0010;
const FLAG_C: u8 = 0b0000_0001;

pub const INIT_STATUS: u8 = FLAG_UNUSED;
pub const INIT_STACK_POINTER: u8 = 0xff;

#[derive(Clone, PartialEq, Eq)]
pub struct Registers {
    pub accumulator: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub status_register: u8,
    pub command_pointer: u16,
    pub stack_pointer: u8,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new(0x0000)
    }
}

impl Registers {
    pub fn new(init_address: u16) -> Registers {
        Registers {
            accumulator: 0x00,
            register_x: 0x00,
            register_y: 0x00,
            status_register: INIT_STATUS,
            command_pointer: init_address,
            stack_pointer: INIT_STACK_POINTER,
        }
    }

    /// Write the byte at the current stack slot then move the pointer down.
    pub fn stack_push(&mut self, memory: &mut Memory, byte: u8) {
        memory.push(byte, self.stack_pointer);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    /// Move the pointer up then take the byte from the stack slot.
    pub fn stack_pull(&mut self, memory: &mut Memory) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        memory.pop(self.stack_pointer)
    }

    /// Advance the command pointer, wrapping at the end of the address space.
    pub fn advance(&mut self, len: usize) {
        self.command_pointer = self.command_pointer.wrapping_add(len as u16);
    }

    fn flag(&self, mask: u8) -> bool {
        self.status_register & mask == mask
    }

    fn set_flag(&mut self, mask: u8, flag: bool) {
        if flag {
            self.status_register |= mask;
        } else {
            self.status_register &= !mask;
        }
    }

    pub fn n_flag_is_set(&self) -> bool {
        self.flag(FLAG_N)
    }

    pub fn v_flag_is_set(&self) -> bool {
        self.flag(FLAG_V)
    }

    pub fn b_flag_is_set(&self) -> bool {
        self.flag(FLAG_B)
    }

    pub fn d_flag_is_set(&self) -> bool {
        self.flag(FLAG_D)
    }

    pub fn i_flag_is_set(&self) -> bool {
        self.flag(FLAG_I)
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.flag(FLAG_Z)
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.flag(FLAG_C)
    }

    pub fn set_n_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_N, flag)
    }

    pub fn set_v_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_V, flag)
    }

    pub fn set_b_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_B, flag)
    }

    pub fn set_z_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_Z, flag)
    }

    pub fn set_c_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_C, flag)
    }

    /// Update Z & N from a value just stored in a register or in memory.
    pub fn set_zn_flags(&mut self, value: u8) {
        self.set_z_flag(super::alu::zero(value));
        self.set_n_flag(super::alu::negative(value));
    }

    pub fn format_status(&self) -> String {
        [
            (FLAG_N, 'N'),
            (FLAG_V, 'V'),
            (FLAG_UNUSED, '-'),
            (FLAG_B, 'B'),
            (FLAG_D, 'D'),
            (FLAG_I, 'I'),
            (FLAG_Z, 'Z'),
            (FLAG_C, 'C'),
        ]
        .iter()
        .map(|(mask, name)| match (*name, self.flag(*mask)) {
            ('-', _) => '-',
            (name, true) => name,
            (name, false) => name.to_ascii_lowercase(),
        })
        .collect()
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, X:0x{:02x}, Y:0x{:02x} | SP:0x{:02x} PC:0x{:04x} | {}]",
            self.accumulator,
            self.register_x,
            self.register_y,
            self.stack_pointer,
            self.command_pointer,
            self.format_status()
        )
    }
}
