//! The `.tko` object file format: a 40-byte header followed by the raw
//! code segment image and the raw data segment image.
//!
//! All header fields are 64-bit unsigned integers in host byte order;
//! there is no magic number and no checksum. The `file_type` field is
//! reserved, written as zero and never validated.

use byteorder::{ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use util::Endian;

/// Size of the serialized header in bytes.
pub const HEADER_BYTES: u64 = 40;

/// The five header fields, in file order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_type: u64,
    pub code_seg_begin: u64,
    pub code_seg_size: u64,
    pub data_seg_begin: u64,
    pub data_seg_size: u64,
}

impl FileHeader {
    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<FileHeader> {
        Ok(FileHeader {
            file_type: reader.read_u64::<Endian>()?,
            code_seg_begin: reader.read_u64::<Endian>()?,
            code_seg_size: reader.read_u64::<Endian>()?,
            data_seg_begin: reader.read_u64::<Endian>()?,
            data_seg_size: reader.read_u64::<Endian>()?,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u64::<Endian>(self.file_type)?;
        writer.write_u64::<Endian>(self.code_seg_begin)?;
        writer.write_u64::<Endian>(self.code_seg_size)?;
        writer.write_u64::<Endian>(self.data_seg_begin)?;
        writer.write_u64::<Endian>(self.data_seg_size)?;
        Ok(())
    }
}

/// A loadable program image: the header plus both segment images. The
/// segment sizes in the header always equal the image lengths.
#[derive(Debug, PartialEq)]
pub struct Program {
    header: FileHeader,
    code: Vec<u8>,
    data: Vec<u8>,
}

impl Program {
    pub fn new(code_seg_begin: u64, code: Vec<u8>, data_seg_begin: u64, data: Vec<u8>) -> Program {
        let header = FileHeader {
            file_type: 0,
            code_seg_begin,
            code_seg_size: code.len() as u64,
            data_seg_begin,
            data_seg_size: data.len() as u64,
        };
        Program { header, code, data }
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn code(&self) -> &[u8] {
        &self.code[..]
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }
}

/// Reads a program image. A header or segment that ends early is an
/// `UnexpectedEof` error; trailing bytes after the data segment are
/// ignored.
pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Program> {
    let header = FileHeader::read(reader)?;

    let mut code = vec![0; header.code_seg_size as usize];
    reader.read_exact(&mut code)?;

    let mut data = vec![0; header.data_seg_size as usize];
    reader.read_exact(&mut data)?;

    Ok(Program { header, code, data })
}

pub fn write<W: Write>(writer: &mut W, program: &Program) -> std::io::Result<()> {
    program.header.write(writer)?;
    writer.write_all(&program.code[..])?;
    writer.write_all(&program.data[..])?;
    Ok(())
}

pub trait ReadTkoExt: Read + Sized {
    fn read_tko(&mut self) -> std::io::Result<Program> {
        read(self)
    }
}

impl<R: Read + Sized> ReadTkoExt for R {}

pub trait WriteTkoExt: Write + Sized {
    fn write_tko(&mut self, program: &Program) -> std::io::Result<()> {
        write(self, program)
    }
}

impl<W: Write + Sized> WriteTkoExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Program> {
    BufReader::new(File::open(path)?).read_tko()
}

pub fn write_file<P: AsRef<Path>>(path: P, program: &Program) -> std::io::Result<()> {
    BufWriter::new(File::create(path)?).write_tko(program)
}
