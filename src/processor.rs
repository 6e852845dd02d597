mod logic;

use std::fmt;

use crate::{constants, Console, Memory, Register};
use self::logic::TickResult;

/// Outcome of a simulation run.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    Halted,          // priv 0 was executed (normal shutdown)
    DivisionByZero,  // integer or float division by zero
    BadMemoryAccess, // memory access or fetch out of bounds
    BadAlignment,    // fetch not 4-aligned, or store/stack slot not 8-aligned
    StackUnderflow,  // call/ret with the stack pointer below the return slot
    InvalidOpcode,   // opcode field was not recognized
    InvalidPrivCode, // priv subcode was not recognized
    InvalidPort,     // output port was neither 1 nor 3
    BadInput,        // console input was not a nonnegative decimal
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            ExitCode::Halted => "halted",
            ExitCode::DivisionByZero => "division by zero",
            ExitCode::BadMemoryAccess => "memory access out of bounds",
            ExitCode::BadAlignment => "misaligned memory access",
            ExitCode::StackUnderflow => "stack underflow",
            ExitCode::InvalidOpcode => "invalid opcode",
            ExitCode::InvalidPrivCode => "invalid priv operation",
            ExitCode::InvalidPort => "invalid output port",
            ExitCode::BadInput => "malformed console input",
        };
        f.write_str(message)
    }
}

/// The Tinker processor: 32 64-bit registers and a program counter.
///
/// Memory is passed in per call so a loaded image can be inspected
/// independently of the register state. A fresh processor starts with the
/// program counter at the default code origin and `r31` at the top of
/// memory; the loader overrides the program counter with the entry point
/// from the image header.
pub struct Processor {
    registers: [Register; constants::REGISTER_COUNT],
    program_counter: u64,
}

impl Processor {
    pub fn new() -> Processor {
        let mut registers = [Register::default(); constants::REGISTER_COUNT];
        registers[constants::STACK_POINTER].set_u(constants::MEM_SIZE);

        Processor {
            registers,
            program_counter: constants::CODE_SEG_BEGIN,
        }
    }

    pub fn register(&self, index: usize) -> Register {
        self.registers[index]
    }

    pub fn register_mut(&mut self, index: usize) -> &mut Register {
        &mut self.registers[index]
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers[..]
    }

    pub fn program_counter(&self) -> u64 {
        self.program_counter
    }

    pub fn set_program_counter(&mut self, address: u64) {
        self.program_counter = address;
    }

    /// Fetches, decodes and executes a single instruction. Returns `None`
    /// while the program is still running.
    pub fn tick(&mut self, memory: &mut Memory, console: &mut dyn Console) -> Option<ExitCode> {
        let current_pc = self.program_counter;

        if current_pc % constants::WORD_BYTES != 0 {
            return Some(ExitCode::BadAlignment);
        }
        let instruction = match memory.read_word(current_pc) {
            Ok(word) => word,
            Err(()) => return Some(ExitCode::BadMemoryAccess),
        };
        self.program_counter = current_pc + constants::WORD_BYTES;

        match logic::execute(&mut self.registers, memory, console, instruction, current_pc) {
            TickResult::Next => None,
            TickResult::Jump(target) => {
                self.program_counter = target;
                None
            }
            TickResult::Stop(exit_code) => Some(exit_code),
        }
    }

    /// Runs until the program halts or faults. There is no instruction
    /// limit; a program that never halts never returns.
    pub fn run(&mut self, memory: &mut Memory, console: &mut dyn Console) -> ExitCode {
        loop {
            if let Some(exit_code) = self.tick(memory, console) {
                return exit_code;
            }
        }
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
