use super::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Flat, zero initialized, 64 KiB memory.
///
/// Bytes are stored in relaxed atomics so a [`MemoryView`] held by another
/// thread (the display sampler) can read them while the processor runs,
/// without any lock on the processor side. Such a reader gets no
/// consistency guarantee: a sampled window may mix bytes written by
/// different ticks.
///
/// [`Memory::share`] hands out another handle on the same bytes, this is how
/// a pre-existing image is injected into a processor while the caller keeps
/// an eye on it.
pub struct Memory {
    cells: Arc<[AtomicU8]>,
    pop_policy: PopPolicy,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(PopPolicy::default())
    }
}

impl Memory {
    pub fn new(pop_policy: PopPolicy) -> Self {
        let cells: Vec<AtomicU8> = (0..MEMORY_SIZE).map(|_| AtomicU8::new(0x00)).collect();

        Self {
            cells: cells.into(),
            pop_policy,
        }
    }

    pub fn from_image(address: usize, image: &[u8]) -> Result<Self, MemoryError> {
        let mut memory = Self::default();
        memory.write(address, image)?;

        Ok(memory)
    }

    pub fn share(&self) -> Self {
        Self {
            cells: Arc::clone(&self.cells),
            pop_policy: self.pop_policy,
        }
    }

    pub fn view(&self, start: usize, len: usize) -> Result<MemoryView, MemoryError> {
        if start + len > MEMORY_SIZE {
            return Err(MemoryError::ReadOverflow(len, start));
        }

        Ok(MemoryView::new(Arc::clone(&self.cells), start, len))
    }

    pub fn pop_policy(&self) -> PopPolicy {
        self.pop_policy
    }

    pub fn set_pop_policy(&mut self, pop_policy: PopPolicy) {
        self.pop_policy = pop_policy;
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8, MemoryError> {
        self.cells
            .get(addr)
            .map(|cell| cell.load(Ordering::Relaxed))
            .ok_or(MemoryError::Address(addr))
    }

    pub fn write_byte(&mut self, addr: usize, byte: u8) -> Result<(), MemoryError> {
        self.cells
            .get(addr)
            .map(|cell| cell.store(byte, Ordering::Relaxed))
            .ok_or(MemoryError::Address(addr))
    }

    /// Write in the stack page at the given offset, the stack pointer itself
    /// is the caller's business.
    pub fn push(&mut self, value: u8, stack_pointer: u8) {
        self.cells[STACK_BASE_ADDR + stack_pointer as usize].store(value, Ordering::Relaxed);
    }

    pub fn pop(&mut self, stack_pointer: u8) -> u8 {
        let cell = &self.cells[STACK_BASE_ADDR + stack_pointer as usize];

        match self.pop_policy {
            PopPolicy::Preserve => cell.load(Ordering::Relaxed),
            PopPolicy::Clear => cell.swap(0x00, Ordering::Relaxed),
        }
    }

    pub fn clear(&mut self) {
        self.cells
            .iter()
            .for_each(|cell| cell.store(0x00, Ordering::Relaxed));
    }
}

impl AddressableIO for Memory {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr + len > self.cells.len() {
            Err(MemoryError::ReadOverflow(len, addr))
        } else {
            Ok(self.cells[addr..addr + len]
                .iter()
                .map(|cell| cell.load(Ordering::Relaxed))
                .collect())
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        if location + data.len() > self.cells.len() {
            Err(MemoryError::WriteOverflow(data.len(), location))
        } else {
            self.cells[location..location + data.len()]
                .iter()
                .zip(data)
                .for_each(|(cell, byte)| cell.store(*byte, Ordering::Relaxed));

            Ok(())
        }
    }

    fn get_size(&self) -> usize {
        self.cells.len()
    }
}

impl DebugIO for Memory {}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Memory {{ size: {} bytes, pop_policy: {:?} }}",
            self.cells.len(),
            self.pop_policy
        )
    }
}
