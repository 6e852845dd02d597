use std::{error::Error, fmt};

/// Byte order for every multi-byte value the toolchain reads or writes:
/// instruction words, header fields and data words. The object file format
/// is host-endian, so the assembler and the simulator must run on machines
/// of the same endianness.
pub type Endian = byteorder::NativeEndian;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to parse \"{}\" as {}.",
            &self.value, &self.enum_name
        )
    }
}

impl Error for ParseEnumError {}

pub trait EnumFromStr: Sized {
    fn from_str(s: &str) -> Result<Self, ParseEnumError>;
}
