//! Loads `.tko` program images and runs them on the Tinker processor.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tinker::{Console, ExitCode, Memory, Processor, StdConsole};
use tkofile::Program;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    BadExtension(PathBuf),
    SegmentBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Reading program file failed: {}", err),
            Error::BadExtension(path) => write!(
                f,
                "Invalid tinker filepath \"{}\" (expected a .tko file)",
                path.display()
            ),
            Error::SegmentBounds => f.write_str("Segment exceeds memory bounds"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// Places both segments of the image into memory at their declared
/// addresses and points the processor at the entry point. Registers start
/// zeroed with `r31` at the top of memory; untouched memory stays zero.
pub fn load_program(
    program: &Program,
    memory: &mut Memory,
    processor: &mut Processor,
) -> Result<(), Error> {
    let header = program.header();

    memory
        .slice_mut(header.code_seg_begin, header.code_seg_size)
        .map_err(|_| Error::SegmentBounds)?
        .copy_from_slice(program.code());
    memory
        .slice_mut(header.data_seg_begin, header.data_seg_size)
        .map_err(|_| Error::SegmentBounds)?
        .copy_from_slice(program.data());

    processor.set_program_counter(header.code_seg_begin);
    Ok(())
}

/// Loads the image into a fresh machine and runs it to completion on the
/// given console.
pub fn run_program(
    program: &Program,
    console: &mut dyn Console,
) -> Result<(Processor, Memory, ExitCode), Error> {
    let mut memory = Memory::new();
    let mut processor = Processor::new();

    load_program(program, &mut memory, &mut processor)?;
    let exit_code = processor.run(&mut memory, console);

    Ok((processor, memory, exit_code))
}

/// Runs an object file on the standard console. The file name must end in
/// `.tko`.
pub fn run_file<P: AsRef<Path>>(path: P) -> Result<ExitCode, Error> {
    let path = path.as_ref();
    if path.extension().and_then(|extension| extension.to_str()) != Some("tko") {
        return Err(Error::BadExtension(path.to_owned()));
    }

    let program = tkofile::read_file(path)?;
    let (_, _, exit_code) = run_program(&program, &mut StdConsole)?;
    Ok(exit_code)
}
