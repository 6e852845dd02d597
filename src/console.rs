use std::io::{Read, Write};

/// The console port the `priv` instruction talks to.
///
/// Splitting this out keeps the execute loop free of process-global I/O,
/// so tests can feed input and capture output in memory.
pub trait Console {
    /// Reads one whitespace-delimited token from the input stream and
    /// parses it as a nonnegative decimal integer. Returns `None` on end
    /// of input, a sign character, a non-digit, or overflow.
    fn read_u64(&mut self) -> Option<u64>;

    /// Port 1: prints the value as an unsigned decimal followed by a
    /// newline.
    fn put_decimal(&mut self, value: u64);

    /// Port 3: writes the value as one raw byte.
    fn put_byte(&mut self, value: u8);
}

/// Console backed by the process standard streams.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_u64(&mut self) -> Option<u64> {
        let stdin = std::io::stdin();
        read_decimal_token(&mut stdin.lock())
    }

    fn put_decimal(&mut self, value: u64) {
        println!("{}", value);
    }

    fn put_byte(&mut self, value: u8) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(&[value]);
        let _ = handle.flush();
    }
}

/// Skips leading whitespace, then consumes one token and parses it as a
/// nonnegative decimal u64 with overflow checking.
fn read_decimal_token<R: Read>(reader: &mut R) -> Option<u64> {
    let mut bytes = reader.bytes();

    let mut first = None;
    for byte in &mut bytes {
        let byte = byte.ok()?;
        if !byte.is_ascii_whitespace() {
            first = Some(byte);
            break;
        }
    }

    let mut value: u64 = decimal_digit(first?)?;
    for byte in &mut bytes {
        let byte = byte.ok()?;
        if byte.is_ascii_whitespace() {
            break;
        }
        value = value
            .checked_mul(10)?
            .checked_add(decimal_digit(byte)?)?;
    }

    Some(value)
}

fn decimal_digit(byte: u8) -> Option<u64> {
    if byte.is_ascii_digit() {
        Some(u64::from(byte - b'0'))
    } else {
        None
    }
}
