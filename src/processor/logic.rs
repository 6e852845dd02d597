use num::FromPrimitive;

use crate::{
    constants, imm_field, imm_signed, op_field, rd_field, rs_field, rt_field, Console, ExitCode,
    Memory, Opcode, Register, Word,
};

pub enum TickResult {
    Next,
    Jump(u64),
    Stop(ExitCode),
}

/// Shift with the count taken at face value: anything at or beyond the
/// register width shifts every bit out.
fn shift_left(value: u64, count: u64) -> u64 {
    if count < 64 {
        value << count
    } else {
        0
    }
}

fn shift_right(value: u64, count: u64) -> u64 {
    if count < 64 {
        value >> count
    } else {
        0
    }
}

/// Resolves a `(base)(displacement)` effective address. Negative addresses
/// are invalid; bounds are checked by the caller or by `Memory`.
fn effective_address(base: u64, displacement: i64) -> Result<u64, ()> {
    let address = (base as i64).wrapping_add(displacement);
    if address < 0 {
        Err(())
    } else {
        Ok(address as u64)
    }
}

/// Executes one decoded instruction. `program_counter` is the address the
/// instruction was fetched from; the caller has already advanced past it.
pub fn execute(
    registers: &mut [Register; constants::REGISTER_COUNT],
    memory: &mut Memory,
    console: &mut dyn Console,
    instruction: Word,
    program_counter: u64,
) -> TickResult {
    let op = match Opcode::from_u32(op_field(instruction)) {
        Some(op) => op,
        None => return TickResult::Stop(ExitCode::InvalidOpcode),
    };

    let rdid = rd_field(instruction) as usize;
    let rsid = rs_field(instruction) as usize;
    let rtid = rt_field(instruction) as usize;

    let rd = registers[rdid].u();
    let rs = registers[rsid].u();
    let rt = registers[rtid].u();

    let imm_u = u64::from(imm_field(instruction));
    let imm_s = i64::from(imm_signed(instruction));

    let next_pc = program_counter + constants::WORD_BYTES;

    match op {
        Opcode::AND => registers[rdid].set_u(rs & rt),
        Opcode::OR => registers[rdid].set_u(rs | rt),
        Opcode::XOR => registers[rdid].set_u(rs ^ rt),
        Opcode::NOT => registers[rdid].set_u(!rs),

        Opcode::SHFTR => registers[rdid].set_u(shift_right(rs, rt)),
        Opcode::SHFTRI => registers[rdid].set_u(shift_right(rd, imm_u)),
        Opcode::SHFTL => registers[rdid].set_u(shift_left(rs, rt)),
        Opcode::SHFTLI => registers[rdid].set_u(shift_left(rd, imm_u)),

        Opcode::BR => return TickResult::Jump(rd),
        Opcode::BRR => return TickResult::Jump(program_counter.wrapping_add(rd)),
        Opcode::BRRI => return TickResult::Jump(program_counter.wrapping_add(imm_s as u64)),
        Opcode::BRNZ => {
            if rs != 0 {
                return TickResult::Jump(rd);
            }
        }
        Opcode::BRGT => {
            if rs > rt {
                return TickResult::Jump(rd);
            }
        }

        Opcode::CALL => {
            let sp = registers[constants::STACK_POINTER].u();
            let slot = match sp.checked_sub(constants::DWORD_BYTES) {
                Some(slot) => slot,
                None => return TickResult::Stop(ExitCode::StackUnderflow),
            };
            if slot % constants::DWORD_BYTES != 0 {
                return TickResult::Stop(ExitCode::BadAlignment);
            }
            // The return address goes below r31 without moving it; the
            // callee owns the stack discipline.
            if memory.write_dword(slot, next_pc).is_err() {
                return TickResult::Stop(ExitCode::BadMemoryAccess);
            }
            return TickResult::Jump(rd);
        }
        Opcode::RET => {
            let sp = registers[constants::STACK_POINTER].u();
            let slot = match sp.checked_sub(constants::DWORD_BYTES) {
                Some(slot) => slot,
                None => return TickResult::Stop(ExitCode::StackUnderflow),
            };
            if slot % constants::DWORD_BYTES != 0 {
                return TickResult::Stop(ExitCode::BadAlignment);
            }
            match memory.read_dword(slot) {
                Ok(address) => return TickResult::Jump(address),
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            }
        }

        Opcode::PRIV => match imm_u {
            0 => return TickResult::Stop(ExitCode::Halted),
            3 => match console.read_u64() {
                Some(value) => registers[rdid].set_u(value),
                None => return TickResult::Stop(ExitCode::BadInput),
            },
            4 => match rd {
                1 => console.put_decimal(rs),
                3 => console.put_byte(rs as u8),
                _ => return TickResult::Stop(ExitCode::InvalidPort),
            },
            _ => return TickResult::Stop(ExitCode::InvalidPrivCode),
        },

        Opcode::MOVML => {
            let address = match effective_address(rs, imm_s) {
                Ok(address) => address,
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            };
            // Loads tolerate unaligned addresses; only bounds matter.
            match memory.read_dword(address) {
                Ok(value) => registers[rdid].set_u(value),
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            }
        }
        Opcode::MOVRR => registers[rdid].set_u(rs),
        Opcode::MOVL => {
            let mask = u64::from(constants::IMM_MASK);
            registers[rdid].set_u((rd & !mask) | imm_u);
        }
        Opcode::MOVSM => {
            let address = match effective_address(rd, imm_s) {
                Ok(address) => address,
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            };
            if address % constants::DWORD_BYTES != 0 {
                return TickResult::Stop(ExitCode::BadAlignment);
            }
            if memory.write_dword(address, rs).is_err() {
                return TickResult::Stop(ExitCode::BadMemoryAccess);
            }
        }

        Opcode::ADDF => registers[rdid].set_f(registers[rsid].f() + registers[rtid].f()),
        Opcode::SUBF => registers[rdid].set_f(registers[rsid].f() - registers[rtid].f()),
        Opcode::MULF => registers[rdid].set_f(registers[rsid].f() * registers[rtid].f()),
        Opcode::DIVF => {
            let divisor = registers[rtid].f();
            if divisor == 0.0 {
                return TickResult::Stop(ExitCode::DivisionByZero);
            }
            registers[rdid].set_f(registers[rsid].f() / divisor);
        }

        Opcode::ADD => registers[rdid].set_u(rs.wrapping_add(rt)),
        Opcode::ADDI => registers[rdid].set_u(rd.wrapping_add(imm_u)),
        Opcode::SUB => registers[rdid].set_u(rs.wrapping_sub(rt)),
        Opcode::SUBI => registers[rdid].set_u(rd.wrapping_sub(imm_u)),
        Opcode::MUL => registers[rdid].set_u(rs.wrapping_mul(rt)),
        Opcode::DIV => {
            if rt == 0 {
                return TickResult::Stop(ExitCode::DivisionByZero);
            }
            registers[rdid].set_u(rs / rt);
        }
    }

    TickResult::Next
}
