use byteorder::ByteOrder;
use pest::iterators::{Pair, Pairs};
use pest::Span;
use tinker::constants::{
    CODE_SEG_BEGIN, DWORD_BYTES, IMM_S_MAX, IMM_S_MIN, IMM_U_MAX, WORD_BYTES,
};
use tinker::{code_from_words, make_instruction, Opcode, Word};
use util::Endian;

use crate::int_util::{
    parse_int, parse_int_decimal, parse_uint, parse_uint_decimal, strip_unsigned_suffix,
};
use crate::lines::{classify, is_valid_label_name, Line, Section};
use crate::mnemonics::Mnemonic;
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result, Rule};

/// Pass two: re-walks the source with the completed symbol table, expands
/// macros into primitive instructions and emits the code and data segment
/// images.
pub fn pass_two(lines: Pairs<Rule>, symbols: &SymbolTable) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut code: Vec<u8> = Vec::new();
    let mut data: Vec<u8> = Vec::new();
    let mut section = Section::Code;

    for line in lines.filter(|pair| pair.as_rule() == Rule::line) {
        match classify(line)? {
            Line::Blank | Line::Label { .. } => {}
            Line::Directive(new_section) => section = new_section,
            Line::Statement { tokens, text, span } => match section {
                Section::Data => encode_data(text, span, symbols, &mut data)?,
                Section::Code => {
                    if tokens.is_empty() {
                        continue;
                    }
                    let address = CODE_SEG_BEGIN + code.len() as u64;
                    let words = encode_statement(&tokens, address, symbols)?;
                    code.extend_from_slice(&code_from_words(&words));
                }
            },
        }
    }

    Ok((code, data))
}

/// A data statement is one nonnegative decimal literal or label reference
/// per line, emitted as 8 raw bytes.
fn encode_data(text: &str, span: Span, symbols: &SymbolTable, data: &mut Vec<u8>) -> Result<()> {
    let token = strip_unsigned_suffix(text);
    let value = if token.starts_with(':') {
        let name = &token[1..];
        if is_valid_label_name(name) {
            symbols.lookup(name)
        } else {
            None
        }
    } else {
        parse_uint_decimal(token)
    };
    let value =
        value.ok_or_else(|| new_parser_error(span, "Invalid data value".to_owned()))?;

    let start = data.len();
    data.resize(start + DWORD_BYTES as usize, 0);
    Endian::write_u64(&mut data[start..], value);
    Ok(())
}

fn parse_register(pair: &Pair<Rule>) -> Result<u32> {
    register_from_str(pair.as_str())
        .ok_or_else(|| new_parser_error(pair.as_span(), "Invalid register".to_owned()))
}

fn register_from_str(token: &str) -> Option<u32> {
    if !token.starts_with('r') {
        return None;
    }
    let digits = &token[1..];
    if digits.is_empty() {
        return None;
    }
    let mut value = 0u32;
    for c in digits.chars() {
        value = value * 10 + c.to_digit(10)?;
        if value > 31 {
            return None;
        }
    }
    Some(value)
}

/// Parses a `(rB)(D)` memory operand. The displacement may be any signed
/// integer literal or a label reference.
fn mem_operand_from_str(token: &str, symbols: &SymbolTable) -> Option<(u32, i64)> {
    if !token.starts_with('(') {
        return None;
    }
    let rest = &token[1..];
    let close = rest.find(')')?;
    let base = register_from_str(&rest[..close])?;

    let rest = &rest[close + 1..];
    if !rest.starts_with('(') {
        return None;
    }
    let rest = &rest[1..];
    let close = rest.find(')')?;
    let displacement = resolve_value_str(&rest[..close], symbols)?;

    if !rest[close + 1..].is_empty() {
        return None;
    }
    Some((base, displacement))
}

fn parse_mem_operand(pair: &Pair<Rule>, symbols: &SymbolTable) -> Result<(u32, i64)> {
    mem_operand_from_str(pair.as_str(), symbols)
        .ok_or_else(|| new_parser_error(pair.as_span(), "Invalid memory operand".to_owned()))
}

/// Resolves a value operand: a label reference or an integer literal in
/// any base, with the optional `u`/`U` suffix stripped.
fn resolve_value_str(token: &str, symbols: &SymbolTable) -> Option<i64> {
    let token = strip_unsigned_suffix(token);
    if token.starts_with(':') {
        let name = &token[1..];
        if !is_valid_label_name(name) {
            return None;
        }
        symbols.lookup(name).map(|address| address as i64)
    } else {
        parse_int(token)
    }
}

fn resolve_value(pair: &Pair<Rule>, symbols: &SymbolTable) -> Result<i64> {
    resolve_value_str(pair.as_str(), symbols)
        .ok_or_else(|| new_parser_error(pair.as_span(), "Invalid literal or label".to_owned()))
}

/// Resolves the 64-bit operand of `ld`: an unsigned literal in any base
/// or a label address.
fn resolve_word(pair: &Pair<Rule>, symbols: &SymbolTable) -> Result<u64> {
    let token = strip_unsigned_suffix(pair.as_str());
    let value = if token.starts_with(':') {
        let name = &token[1..];
        if is_valid_label_name(name) {
            symbols.lookup(name)
        } else {
            None
        }
    } else {
        parse_uint(token)
    };
    value.ok_or_else(|| {
        new_parser_error(pair.as_span(), "Invalid literal or label in ld".to_owned())
    })
}

fn check_signed_12(value: i64, span: Span, message: &str) -> Result<u32> {
    if value < IMM_S_MIN || value > IMM_S_MAX {
        Err(new_parser_error(span, message.to_owned()))
    } else {
        Ok(value as u32 & 0xFFF)
    }
}

fn check_unsigned_12(value: i64, span: Span, message: &str) -> Result<u32> {
    if value < 0 || value > IMM_U_MAX {
        Err(new_parser_error(span, message.to_owned()))
    } else {
        Ok(value as u32)
    }
}

fn check_operand_count(mnemonic: &Pair<Rule>, args: &[Pair<Rule>], expected: usize) -> Result<()> {
    if args.len() != expected {
        Err(new_parser_error(
            mnemonic.as_span(),
            format!(
                "{} expects {} operand(s), got {}",
                mnemonic.as_str(),
                expected,
                args.len()
            ),
        ))
    } else {
        Ok(())
    }
}

fn three_registers(args: &[Pair<Rule>]) -> Result<(u32, u32, u32)> {
    Ok((
        parse_register(&args[0])?,
        parse_register(&args[1])?,
        parse_register(&args[2])?,
    ))
}

/// Encodes one code statement into its primitive instruction words.
/// `address` is the statement's own address, needed for `brr :label`.
fn encode_statement(
    tokens: &[Pair<Rule>],
    address: u64,
    symbols: &SymbolTable,
) -> Result<Vec<Word>> {
    let mnemonic_pair = &tokens[0];
    let args = &tokens[1..];

    if args.len() > 4 {
        return Err(new_parser_error(
            args[4].as_span(),
            "Too many operands".to_owned(),
        ));
    }

    let mnemonic = Mnemonic::resolve(mnemonic_pair.as_str()).ok_or_else(|| {
        new_parser_error(mnemonic_pair.as_span(), "Unknown instruction".to_owned())
    })?;

    let words = match mnemonic {
        // R-type primitives: rd, rs, rt.
        Mnemonic::AND
        | Mnemonic::OR
        | Mnemonic::XOR
        | Mnemonic::SHFTR
        | Mnemonic::SHFTL
        | Mnemonic::ADDF
        | Mnemonic::SUBF
        | Mnemonic::MULF
        | Mnemonic::DIVF
        | Mnemonic::ADD
        | Mnemonic::SUB
        | Mnemonic::MUL
        | Mnemonic::DIV
        | Mnemonic::BRGT => {
            check_operand_count(mnemonic_pair, args, 3)?;
            let (rd, rs, rt) = three_registers(args)?;
            let op = match mnemonic {
                Mnemonic::AND => Opcode::AND,
                Mnemonic::OR => Opcode::OR,
                Mnemonic::XOR => Opcode::XOR,
                Mnemonic::SHFTR => Opcode::SHFTR,
                Mnemonic::SHFTL => Opcode::SHFTL,
                Mnemonic::ADDF => Opcode::ADDF,
                Mnemonic::SUBF => Opcode::SUBF,
                Mnemonic::MULF => Opcode::MULF,
                Mnemonic::DIVF => Opcode::DIVF,
                Mnemonic::ADD => Opcode::ADD,
                Mnemonic::SUB => Opcode::SUB,
                Mnemonic::MUL => Opcode::MUL,
                Mnemonic::DIV => Opcode::DIV,
                Mnemonic::BRGT => Opcode::BRGT,
                _ => unreachable!(),
            };
            vec![make_instruction(op, rd, rs, rt, 0)]
        }

        // Two-register primitives: rd, rs.
        Mnemonic::NOT | Mnemonic::BRNZ => {
            check_operand_count(mnemonic_pair, args, 2)?;
            let rd = parse_register(&args[0])?;
            let rs = parse_register(&args[1])?;
            let op = match mnemonic {
                Mnemonic::NOT => Opcode::NOT,
                Mnemonic::BRNZ => Opcode::BRNZ,
                _ => unreachable!(),
            };
            vec![make_instruction(op, rd, rs, 0, 0)]
        }

        // Immediate arithmetic and shifts: rd, value. These accumulate
        // into rd, so rs stays zero in the encoding.
        Mnemonic::ADDI | Mnemonic::SUBI | Mnemonic::SHFTRI | Mnemonic::SHFTLI => {
            check_operand_count(mnemonic_pair, args, 2)?;
            let rd = parse_register(&args[0])?;
            let value = resolve_value(&args[1], symbols)?;
            let span = args[1].as_span();
            if value < 0 {
                return Err(new_parser_error(span, "Unsigned literal required".to_owned()));
            }
            let shift = mnemonic == Mnemonic::SHFTRI || mnemonic == Mnemonic::SHFTLI;
            let message = if shift {
                "Shift amount out of range"
            } else {
                "Literal exceeds 12-bit unsigned range"
            };
            let imm = check_unsigned_12(value, span, message)?;
            let op = match mnemonic {
                Mnemonic::ADDI => Opcode::ADDI,
                Mnemonic::SUBI => Opcode::SUBI,
                Mnemonic::SHFTRI => Opcode::SHFTRI,
                Mnemonic::SHFTLI => Opcode::SHFTLI,
                _ => unreachable!(),
            };
            vec![make_instruction(op, rd, 0, 0, imm)]
        }

        Mnemonic::BR => {
            check_operand_count(mnemonic_pair, args, 1)?;
            let rd = parse_register(&args[0])?;
            vec![make_instruction(Opcode::BR, rd, 0, 0, 0)]
        }

        Mnemonic::BRR => vec![encode_brr(mnemonic_pair, args, address, symbols)?],

        Mnemonic::CALL => {
            check_operand_count(mnemonic_pair, args, 1)?;
            let rd = parse_register(&args[0])?;
            vec![make_instruction(Opcode::CALL, rd, 0, 0, 0)]
        }

        Mnemonic::RET => {
            check_operand_count(mnemonic_pair, args, 0)?;
            vec![make_instruction(Opcode::RET, 0, 0, 0, 0)]
        }

        Mnemonic::PRIV => {
            check_operand_count(mnemonic_pair, args, 4)?;
            let (rd, rs, rt) = three_registers(args)?;
            let value = parse_int_decimal(strip_unsigned_suffix(args[3].as_str()))
                .ok_or_else(|| {
                    new_parser_error(args[3].as_span(), "Invalid priv operand".to_owned())
                })?;
            let imm = check_unsigned_12(
                value,
                args[3].as_span(),
                "Literal exceeds 12-bit unsigned range",
            )?;
            vec![make_instruction(Opcode::PRIV, rd, rs, rt, imm)]
        }

        Mnemonic::MOV => encode_mov(mnemonic_pair, args, symbols)?,

        // Macros.
        Mnemonic::CLR => {
            check_operand_count(mnemonic_pair, args, 1)?;
            let rd = parse_register(&args[0])?;
            vec![make_instruction(Opcode::XOR, rd, rd, rd, 0)]
        }

        Mnemonic::HALT => {
            check_operand_count(mnemonic_pair, args, 0)?;
            vec![make_instruction(Opcode::PRIV, 0, 0, 0, 0)]
        }

        Mnemonic::IN | Mnemonic::OUT => {
            check_operand_count(mnemonic_pair, args, 2)?;
            let rd = parse_register(&args[0])?;
            let rs = parse_register(&args[1])?;
            let subcode = if mnemonic == Mnemonic::IN { 3 } else { 4 };
            vec![make_instruction(Opcode::PRIV, rd, rs, 0, subcode)]
        }

        Mnemonic::PUSH => {
            check_operand_count(mnemonic_pair, args, 1)?;
            let rs = parse_register(&args[0])?;
            vec![
                // mov (r31)(-8), rs ; subi r31, 8
                make_instruction(Opcode::MOVSM, 31, rs, 0, (-8i32) as u32),
                make_instruction(Opcode::SUBI, 31, 0, 0, 8),
            ]
        }

        Mnemonic::POP => {
            check_operand_count(mnemonic_pair, args, 1)?;
            let rd = parse_register(&args[0])?;
            vec![
                // mov rd, (r31)(0) ; addi r31, 8
                make_instruction(Opcode::MOVML, rd, 31, 0, 0),
                make_instruction(Opcode::ADDI, 31, 0, 0, 8),
            ]
        }

        Mnemonic::LD => {
            check_operand_count(mnemonic_pair, args, 2)?;
            let rd = parse_register(&args[0])?;
            let value = resolve_word(&args[1], symbols)?;
            expand_ld(rd, value)
        }
    };

    debug_assert_eq!(
        words.len() as u64 * WORD_BYTES,
        mnemonic.encoded_size(),
        "pass-one size table out of sync"
    );

    Ok(words)
}

/// `brr` takes a register, a label, or a byte offset. A label resolves to
/// `(target - (address + 4)) / 4`, the distance in instructions from the
/// already-advanced program counter.
fn encode_brr(
    mnemonic: &Pair<Rule>,
    args: &[Pair<Rule>],
    address: u64,
    symbols: &SymbolTable,
) -> Result<Word> {
    check_operand_count(mnemonic, args, 1)?;
    let text = args[0].as_str();
    let span = args[0].as_span();

    if text.starts_with('r') {
        let rd = parse_register(&args[0])?;
        return Ok(make_instruction(Opcode::BRR, rd, 0, 0, 0));
    }

    let offset = if text.starts_with(':') {
        let target = symbols
            .lookup(&text[1..])
            .ok_or_else(|| new_parser_error(span.clone(), "Label not found".to_owned()))?;
        (target as i64 - (address + WORD_BYTES) as i64) / WORD_BYTES as i64
    } else {
        parse_int_decimal(strip_unsigned_suffix(text))
            .ok_or_else(|| new_parser_error(span.clone(), "Invalid branch offset".to_owned()))?
    };

    let imm = check_signed_12(offset, span, "Branch offset too large for 12 bits")?;
    Ok(make_instruction(Opcode::BRRI, 0, 0, 0, imm))
}

/// `mov` picks its opcode from the operand shapes: register/register,
/// load from memory, store to memory, or set-low-12 literal.
fn encode_mov(
    mnemonic: &Pair<Rule>,
    args: &[Pair<Rule>],
    symbols: &SymbolTable,
) -> Result<Vec<Word>> {
    check_operand_count(mnemonic, args, 2)?;

    let word = if args[1].as_str().contains('(') {
        let rd = parse_register(&args[0])?;
        let (base, displacement) = parse_mem_operand(&args[1], symbols)?;
        let imm = check_signed_12(
            displacement,
            args[1].as_span(),
            "Literal exceeds 12-bit signed range",
        )?;
        make_instruction(Opcode::MOVML, rd, base, 0, imm)
    } else if args[0].as_str().contains('(') {
        let rs = parse_register(&args[1])?;
        let (base, displacement) = parse_mem_operand(&args[0], symbols)?;
        let imm = check_signed_12(
            displacement,
            args[0].as_span(),
            "Literal exceeds 12-bit signed range",
        )?;
        make_instruction(Opcode::MOVSM, base, rs, 0, imm)
    } else if args[1].as_str().starts_with('r') {
        let rd = parse_register(&args[0])?;
        let rs = parse_register(&args[1])?;
        make_instruction(Opcode::MOVRR, rd, rs, 0, 0)
    } else {
        let rd = parse_register(&args[0])?;
        let span = args[1].as_span();
        let value = parse_int_decimal(strip_unsigned_suffix(args[1].as_str()))
            .ok_or_else(|| new_parser_error(span.clone(), "Invalid mov literal".to_owned()))?;
        if value < 0 {
            return Err(new_parser_error(span, "Unsigned literal required".to_owned()));
        }
        let imm = check_unsigned_12(
            value,
            args[1].as_span(),
            "Literal exceeds 12-bit unsigned range",
        )?;
        make_instruction(Opcode::MOVL, rd, 0, 0, imm)
    };

    Ok(vec![word])
}

/// `ld rd, L` clears `rd`, then deposits the 64-bit value most
/// significant bits first: five 12-bit chunks interleaved with shifts,
/// then a shift by 4 and the low nibble. The final shift must be 4, not
/// 12, so the last chunk lands in bits 3..0.
fn expand_ld(rd: u32, value: u64) -> Vec<Word> {
    vec![
        make_instruction(Opcode::XOR, rd, rd, rd, 0),
        make_instruction(Opcode::ADDI, rd, 0, 0, ((value >> 52) & 0xFFF) as u32),
        make_instruction(Opcode::SHFTLI, rd, 0, 0, 12),
        make_instruction(Opcode::ADDI, rd, 0, 0, ((value >> 40) & 0xFFF) as u32),
        make_instruction(Opcode::SHFTLI, rd, 0, 0, 12),
        make_instruction(Opcode::ADDI, rd, 0, 0, ((value >> 28) & 0xFFF) as u32),
        make_instruction(Opcode::SHFTLI, rd, 0, 0, 12),
        make_instruction(Opcode::ADDI, rd, 0, 0, ((value >> 16) & 0xFFF) as u32),
        make_instruction(Opcode::SHFTLI, rd, 0, 0, 12),
        make_instruction(Opcode::ADDI, rd, 0, 0, ((value >> 4) & 0xFFF) as u32),
        make_instruction(Opcode::SHFTLI, rd, 0, 0, 4),
        make_instruction(Opcode::ADDI, rd, 0, 0, (value & 0xF) as u32),
    ]
}
