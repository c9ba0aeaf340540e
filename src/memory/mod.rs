use serde::Deserialize;

mod error;
mod ram;
mod view;

pub use error::MemoryError;
pub use ram::Memory;
pub use view::MemoryView;

pub const MEMMAX: usize = 65535;
pub const MEMORY_SIZE: usize = MEMMAX + 1;
pub const STACK_BASE_ADDR: usize = 0x0100;

/// Assemble a 16 bits word from two bytes taken in memory order (low byte
/// first).
pub fn little_endian(bytes: [u8; 2]) -> u16 {
    (bytes[1] as u16) << 8 | bytes[0] as u16
}

/*
 * PopPolicy
 * What happens to the stack byte once it has been pulled.
 * Preserve leaves it in place (the hardware behavior), Clear zeroes it.
 */
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PopPolicy {
    #[default]
    Preserve,
    Clear,
}

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}

/*
 * DebugIO
 * Hexadecimal dump of any addressable memory, 16 bytes per line.
 */
pub trait DebugIO: AddressableIO {
    fn dump(&self, start: usize, lines: usize) -> Result<Vec<String>, MemoryError> {
        let address = start - (start % 16);
        let bytes = self.read(address, 16 * lines)?;

        Ok(bytes
            .chunks(16)
            .enumerate()
            .map(|(lineno, row)| {
                let (left, right) = row.split_at(row.len().min(8));
                format!(
                    "#{:04X}:  {}  {}",
                    address + lineno * 16,
                    spaced_hex(left),
                    spaced_hex(right)
                )
            })
            .collect())
    }
}

fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| hex::encode([*byte]))
        .collect::<Vec<String>>()
        .join(" ")
}
