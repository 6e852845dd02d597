use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Marker for a rejected duplicate insertion.
#[derive(Debug, PartialEq, Eq)]
pub struct DuplicateLabel;

/// Maps label names to absolute addresses. Populated during pass one and
/// read-only afterwards; the assembler does not distinguish code labels
/// from data labels at lookup time.
pub struct SymbolTable {
    symbols: HashMap<String, u64>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, address: u64) -> Result<(), DuplicateLabel> {
        match self.symbols.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(DuplicateLabel),
            Entry::Vacant(entry) => {
                entry.insert(address);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<u64> {
        self.symbols.get(name).copied()
    }
}
