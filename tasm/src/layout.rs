use pest::iterators::Pairs;
use tinker::constants::{CODE_SEG_BEGIN, DATA_SEG_BEGIN, DWORD_BYTES, WORD_BYTES};
use tkofile::FileHeader;

use crate::lines::{classify, Line, Section};
use crate::mnemonics::Mnemonic;
use crate::symbols::SymbolTable;
use crate::{new_parser_error, Result, Rule};

/// Pass one: computes the address every statement will occupy, inserts
/// each label at the current address of its section, and produces the
/// file header. Macro statements advance the code address by their full
/// expansion size so forward references resolve to final addresses.
pub fn pass_one(lines: Pairs<Rule>) -> Result<(FileHeader, SymbolTable)> {
    let mut symbols = SymbolTable::new();
    let mut section = Section::Code;
    let mut code_addr = CODE_SEG_BEGIN;
    let mut data_addr = DATA_SEG_BEGIN;

    for line in lines.filter(|pair| pair.as_rule() == Rule::line) {
        match classify(line)? {
            Line::Blank => {}
            Line::Directive(new_section) => section = new_section,
            Line::Label { name, span } => {
                let address = match section {
                    Section::Code => code_addr,
                    Section::Data => data_addr,
                };
                symbols
                    .insert(name, address)
                    .map_err(|_| new_parser_error(span, "Duplicate label".to_owned()))?;
            }
            Line::Statement { tokens, .. } => match section {
                Section::Data => data_addr += DWORD_BYTES,
                Section::Code => {
                    if let Some(mnemonic) = tokens.first() {
                        // Unknown mnemonics take the default size here;
                        // pass two rejects them.
                        code_addr += Mnemonic::resolve(mnemonic.as_str())
                            .map_or(WORD_BYTES, Mnemonic::encoded_size);
                    }
                }
            },
        }
    }

    let header = FileHeader {
        file_type: 0,
        code_seg_begin: CODE_SEG_BEGIN,
        code_seg_size: code_addr - CODE_SEG_BEGIN,
        data_seg_begin: DATA_SEG_BEGIN,
        data_seg_size: data_addr - DATA_SEG_BEGIN,
    };

    Ok((header, symbols))
}
