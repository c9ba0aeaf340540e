use thiserror::Error;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Error)]
pub enum MemoryError {
    #[error("address 0x{0:04X} is outside of the addressable space (0x0000 → 0xFFFF)")]
    Address(usize),
    #[error("could not READ {0} bytes at address 0x{1:04X}, address max is 0xFFFF")]
    ReadOverflow(usize, usize), // read len, address
    #[error("could not WRITE {0} bytes at address 0x{1:04X}, address max is 0xFFFF")]
    WriteOverflow(usize, usize), // write len, address
    #[error("trying to write at address 0x{0:04X} through a read-only memory view")]
    ReadOnly(usize),
}
