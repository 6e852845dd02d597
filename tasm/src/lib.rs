//! Assembler for the Tinker virtual machine.
//!
//! [`assemble`](fn.assemble.html) translates Tinker assembly into a
//! loadable [`Program`](../tkofile/struct.Program.html) image in two
//! passes. Pass one walks every line computing the address each statement
//! will occupy — macros expand to a fixed number of primitives, so the
//! size of every statement is known up front and forward label references
//! resolve exactly. Pass two re-walks the same parse tree, expands macros
//! and encodes each primitive against the completed symbol table.
//!
//! Parsing is implemented with [pest]; the crate's [`Error`](type.Error.html)
//! type is an alias of `pest::error::Error`, so every diagnostic carries
//! the span of the offending source and pretty-prints with line and
//! column.
//!
//! # Source format
//!
//! Tinker assembly is line-oriented and tab-significant:
//!
//! - A line whose first character is a space is rejected.
//! - `;` starts a comment running to the end of the line.
//! - `.code` and `.data` switch the active section; code is active
//!   initially.
//! - `:name` alone on a line declares a label at the current address of
//!   the active section. Names match `[A-Za-z_][A-Za-z0-9_]*`.
//! - Every other nonblank line is a statement and must begin with a tab.
//!
//! A data statement is a single nonnegative decimal literal or `:label`
//! reference, stored as 8 host-endian bytes. A code statement is a
//! mnemonic followed by up to four operands separated by spaces, tabs or
//! commas. Operands are registers (`r0`..`r31`), memory operands
//! `(rB)(D)`, integer literals (decimal, `0x` hexadecimal or `0` octal,
//! optionally suffixed with `u`/`U`), and label references (`:name`).
//!
//! ## Mnemonics
//!
//! Primitive mnemonics map one-to-one onto processor opcodes:
//!
//! Mnemonic  | Syntax                  | Notes
//! ----------|-------------------------|----------------------------------
//! `and`, `or`, `xor` | `op rd, rs, rt` |
//! `not`     | `not rd, rs`            |
//! `shftr`, `shftl` | `op rd, rs, rt`  |
//! `shftri`, `shftli` | `op rd, imm`   | shifts `rd` in place
//! `br`      | `br rd`                 | jump to register value
//! `brr`     | `brr rd` / `brr L` / `brr :label` | relative branch
//! `brnz`    | `brnz rd, rs`           | jump to `rd` if `rs` nonzero
//! `call`    | `call rd`               | return address stored at `r31 - 8`
//! `ret`     | `ret`                   | `return` is accepted as an alias
//! `brgt`    | `brgt rd, rs, rt`       | jump to `rd` if `rs > rt` unsigned
//! `priv`    | `priv rd, rs, rt, imm`  | halt / input / output
//! `mov`     | see below               |
//! `addf`, `subf`, `mulf`, `divf` | `op rd, rs, rt` | binary64
//! `add`, `sub`, `mul`, `div` | `op rd, rs, rt` |
//! `addi`, `subi` | `op rd, imm`       | accumulate into `rd`
//!
//! `mov` selects its encoding from the operand shapes: `mov rd, rs`
//! copies a register, `mov rd, (rs)(D)` loads 8 bytes, `mov (rd)(D), rs`
//! stores 8 bytes, and `mov rd, L` sets the low 12 bits of `rd`.
//!
//! ## Macros
//!
//! Macro mnemonics expand to fixed sequences of primitives at assembly
//! time:
//!
//! Mnemonic | Expansion
//! ---------|------------------------------------------------
//! `clr rd` | `xor rd, rd, rd`
//! `halt`   | `priv r0, r0, r0, 0`
//! `in rd, rs`  | `priv rd, rs, r0, 3`
//! `out rd, rs` | `priv rd, rs, r0, 4`
//! `push rs`| `mov (r31)(-8), rs` ; `subi r31, 8`
//! `pop rd` | `mov rd, (r31)(0)` ; `addi r31, 8`
//! `ld rd, L` | twelve primitives depositing the 64-bit value
//!
//! [pest]: https://docs.rs/pest/

mod encode;
mod int_util;
mod layout;
mod lines;
mod mnemonics;
mod parser;
mod symbols;


use parser::TinkerParser;
use pest::iterators::Pair;
use pest::{Parser, Span};
use tkofile::Program;

pub use parser::Rule;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles Tinker source into a loadable program image.
pub fn assemble(input: &str) -> Result<Program> {
    let file = parse(input)?;
    let lines = file.into_inner();

    let (header, symbols) = layout::pass_one(lines.clone())?;
    let (code, data) = encode::pass_two(lines, &symbols)?;

    debug_assert_eq!(header.code_seg_size, code.len() as u64);
    debug_assert_eq!(header.data_seg_size, data.len() as u64);

    Ok(Program::new(
        header.code_seg_begin,
        code,
        header.data_seg_begin,
        data,
    ))
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(TinkerParser::parse(Rule::file, input)?.next().unwrap())
}
