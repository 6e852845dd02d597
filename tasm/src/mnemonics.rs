use tinker::constants::WORD_BYTES;
use util::EnumFromStr;
use util_derive::EnumFromStr;

/// Every mnemonic the assembler accepts: the primitive instructions plus
/// the macros that expand to fixed sequences of primitives.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumFromStr)]
pub enum Mnemonic {
    ADD,
    ADDI,
    ADDF,
    SUB,
    SUBI,
    SUBF,
    MUL,
    MULF,
    DIV,
    DIVF,
    AND,
    OR,
    XOR,
    NOT,
    SHFTR,
    SHFTRI,
    SHFTL,
    SHFTLI,
    BR,
    BRR,
    BRNZ,
    CALL,
    RET,
    BRGT,
    PRIV,
    MOV,
    CLR,
    HALT,
    IN,
    OUT,
    LD,
    PUSH,
    POP,
}

impl Mnemonic {
    /// Mnemonics are matched case-insensitively; `return` is an alias for
    /// `ret`.
    pub fn resolve(token: &str) -> Option<Mnemonic> {
        let upper = token.to_uppercase();
        if upper == "RETURN" {
            return Some(Mnemonic::RET);
        }
        upper.parse().ok()
    }

    /// Bytes the statement occupies once macros are expanded. Pass one
    /// consults this table so labels resolve to final addresses.
    pub fn encoded_size(self) -> u64 {
        match self {
            Mnemonic::LD => 12 * WORD_BYTES,
            Mnemonic::PUSH | Mnemonic::POP => 2 * WORD_BYTES,
            _ => WORD_BYTES,
        }
    }
}
