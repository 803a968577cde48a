use std::fmt;

use crate::MEMORY_SIZE;

/// Flat 64 KiB address space.
///
/// Every cell is writable; there is no banking and no protected region.
/// Addresses are `u16`, so an access can never fall outside the array.
#[derive(Clone)]
pub struct Memory {
    cells: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            cells: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.cells.len())
            .finish()
    }
}

impl Memory {
    /// Build a zero-filled memory with `image` copied to address 0.
    ///
    /// Only the first `MEMORY_SIZE` bytes of the image are used.
    pub fn with_image(image: &[u8]) -> Self {
        let mut memory = Self::default();
        let len = image.len().min(MEMORY_SIZE);
        memory.cells[..len].copy_from_slice(&image[..len]);
        memory
    }

    #[inline]
    pub fn read8(&self, addr: u16) -> u8 {
        self.cells[addr as usize]
    }

    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;
    }

    /// Little-endian word read; the high byte wraps to 0x0000 at the top
    /// of the address space.
    #[inline]
    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
