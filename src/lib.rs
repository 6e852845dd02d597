//! Simulator core for the Tinker 64-bit register machine.
//!
//! The crate provides the pieces shared by the toolchain: the instruction
//! word codec around [`Opcode`](enum.Opcode.html), the register file, the
//! 512 KiB main memory, and the fetch/decode/execute loop of the
//! [`Processor`](struct.Processor.html). Loading `.tko` images and driving
//! the processor from the command line live in the `tsim` crate; the
//! assembler lives in `tasm`.

pub mod constants;
mod console;
mod instructions;
mod memory;
mod processor;
mod register;

pub use crate::console::{Console, StdConsole};
pub use crate::instructions::{
    code_from_words, imm_field, imm_signed, make_instruction, op_field, rd_field, rs_field,
    rt_field, Opcode,
};
pub use crate::memory::Memory;
pub use crate::processor::{ExitCode, Processor};
pub use crate::register::Register;
pub use util::Endian;

/// A single encoded instruction.
pub type Word = u32;
