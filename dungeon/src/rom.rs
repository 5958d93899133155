use crate::error::RenderError;

/// Read-only view over a ROM image.
///
/// Only the handful of little-endian table reads the renderer needs are
/// exposed; parsing room headers and object streams happens elsewhere.
#[derive(Debug, Default, Clone)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    #[must_use]
    pub const fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        !self.data.is_empty()
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn read_byte(&self, address: usize) -> Result<u8, RenderError> {
        if !self.is_loaded() {
            return Err(RenderError::RomNotLoaded);
        }

        self.data
            .get(address)
            .copied()
            .ok_or(RenderError::RomOutOfRange {
                address,
                size: self.data.len(),
            })
    }

    pub fn read_word(&self, address: usize) -> Result<u16, RenderError> {
        let lo = self.read_byte(address)?;
        let hi = self.read_byte(address + 1)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_word_is_little_endian() {
        let rom = Rom::new(vec![0x34, 0x12, 0xFF]);
        assert_eq!(rom.read_word(0).unwrap(), 0x1234);
    }

    #[test]
    fn read_past_end_fails() {
        let rom = Rom::new(vec![0x34, 0x12, 0xFF]);
        assert!(matches!(
            rom.read_word(2),
            Err(RenderError::RomOutOfRange { address: 3, size: 3 })
        ));
    }

    #[test]
    fn empty_rom_is_not_loaded() {
        let rom = Rom::default();
        assert!(!rom.is_loaded());
        assert!(matches!(rom.read_byte(0), Err(RenderError::RomNotLoaded)));
    }
}
