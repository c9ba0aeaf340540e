use super::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Read-only window on a [`Memory`], it can be sent to another thread.
///
/// Reads never block the processor and may return a snapshot mixing the
/// results of several ticks.
#[derive(Clone)]
pub struct MemoryView {
    cells: Arc<[AtomicU8]>,
    start: usize,
    len: usize,
}

impl MemoryView {
    pub(super) fn new(cells: Arc<[AtomicU8]>, start: usize, len: usize) -> Self {
        Self { cells, start, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.start + self.len
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.cells[self.start..self.start + self.len]
            .iter()
            .map(|cell| cell.load(Ordering::Relaxed))
            .collect()
    }
}

impl AddressableIO for MemoryView {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr < self.start || addr + len > self.start + self.len {
            Err(MemoryError::ReadOverflow(len, addr))
        } else {
            Ok(self.cells[addr..addr + len]
                .iter()
                .map(|cell| cell.load(Ordering::Relaxed))
                .collect())
        }
    }

    fn write(&mut self, location: usize, _data: &[u8]) -> Result<(), MemoryError> {
        Err(MemoryError::ReadOnly(location))
    }

    fn get_size(&self) -> usize {
        self.len
    }
}

impl DebugIO for MemoryView {}

impl std::fmt::Debug for MemoryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MemoryView #0x{:04X} → #0x{:04X}, size = {} bytes",
            self.start,
            self.start + self.len - 1,
            self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_follows_memory() {
        let mut memory = Memory::default();
        let view = memory.view(0x0200, 0x0400).unwrap();
        assert_eq!(vec![0x00; 0x400], view.snapshot());
        memory.write(0x0200, &[0x0f, 0x01]).unwrap();
        memory.write(0x05ff, &[0x07]).unwrap();
        let snapshot = view.snapshot();
        assert_eq!(0x0f, snapshot[0]);
        assert_eq!(0x01, snapshot[1]);
        assert_eq!(0x07, snapshot[0x3ff]);
    }

    #[test]
    fn test_view_bounds() {
        let memory = Memory::default();
        let view = memory.view(0x0200, 0x0400).unwrap();
        assert!(view.contains(0x0200));
        assert!(view.contains(0x05ff));
        assert!(!view.contains(0x0600));
        assert!(!view.contains(0x01ff));
        assert!(view.read(0x01ff, 2).is_err());
        assert!(view.read(0x05ff, 2).is_err());
        assert_eq!(vec![0x00], view.read(0x05ff, 1).unwrap());
        assert!(memory.view(0xff00, 0x101).is_err());
    }

    #[test]
    fn test_view_is_read_only() {
        let memory = Memory::default();
        let mut view = memory.view(0x0200, 0x10).unwrap();
        assert_eq!(
            Err(MemoryError::ReadOnly(0x0200)),
            view.write(0x0200, &[0x01])
        );
        assert_eq!(
            "MemoryView #0x0200 → #0x020F, size = 16 bytes",
            format!("{:?}", view)
        );
    }
}
