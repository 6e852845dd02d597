use crate::constants;
use byteorder::ByteOrder;
use util::Endian;

/// Main memory: a single zero-initialized block of
/// [`MEM_SIZE`](constants/constant.MEM_SIZE.html) bytes. Code and data
/// segments are copied in by the loader; everything else stays zero.
///
/// Accessors take 64-bit addresses because that is what registers hold;
/// any range that does not fit inside the block is an error. Alignment is
/// not checked here, it is the processor's concern.
///
/// # Examples
/// ```
/// use tinker::Memory;
///
/// let mut memory = Memory::new();
/// memory.write_dword(0x2000, 0xABCD).unwrap();
/// assert_eq!(memory.read_dword(0x2000), Ok(0xABCD));
/// assert!(memory.read_dword(tinker::constants::MEM_SIZE - 7).is_err());
/// ```
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            data: vec![0; constants::MEM_SIZE as usize],
        }
    }

    pub fn length(&self) -> u64 {
        self.data.len() as u64
    }

    /// Checks whether `[address..address+length]` lies inside the block.
    pub fn check_range(&self, address: u64, length: u64) -> bool {
        let len = self.data.len() as u64;
        address <= len && length <= len - address
    }

    pub fn slice(&self, address: u64, length: u64) -> Result<&[u8], ()> {
        if self.check_range(address, length) {
            Ok(&self.data[address as usize..(address + length) as usize])
        } else {
            Err(())
        }
    }

    pub fn slice_mut(&mut self, address: u64, length: u64) -> Result<&mut [u8], ()> {
        if self.check_range(address, length) {
            Ok(&mut self.data[address as usize..(address + length) as usize])
        } else {
            Err(())
        }
    }

    /// Reads one instruction word.
    pub fn read_word(&self, address: u64) -> Result<u32, ()> {
        Ok(Endian::read_u32(
            self.slice(address, constants::WORD_BYTES)?,
        ))
    }

    /// Reads one 8-byte data word.
    pub fn read_dword(&self, address: u64) -> Result<u64, ()> {
        Ok(Endian::read_u64(
            self.slice(address, constants::DWORD_BYTES)?,
        ))
    }

    /// Writes one 8-byte data word.
    pub fn write_dword(&mut self, address: u64, value: u64) -> Result<(), ()> {
        Endian::write_u64(self.slice_mut(address, constants::DWORD_BYTES)?, value);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}
