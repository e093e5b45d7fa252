//! Symbol table tracking the current name of every renamed identifier.
//!
//! Later entries rename identifiers introduced by earlier ones, so each entry
//! records the names its markers were written against. Replaying those
//! bindings in plan order turns a stale marker into a [`HistoryError::SymbolOrder`]
//! instead of a confusing missing-marker failure deep into a run.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::SymbolBinding;
use crate::error::HistoryError;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Maps a stable symbol key (e.g. `Calculator.add`) to its current identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: BTreeMap<String, String>,
}

impl SymbolTable {
    /// Register `symbol` with its baseline identifier.
    pub fn declare(&mut self, symbol: &str, name: &str) -> Result<(), HistoryError> {
        validate_identifier(name)?;
        if self.names.contains_key(symbol) {
            return Err(HistoryError::DuplicateSymbol {
                symbol: symbol.to_string(),
            });
        }
        self.names.insert(symbol.to_string(), name.to_string());
        Ok(())
    }

    pub fn current(&self, symbol: &str) -> Result<&str, HistoryError> {
        self.names
            .get(symbol)
            .map(String::as_str)
            .ok_or_else(|| HistoryError::UnknownSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Check a binding against the current names and apply any rename.
    pub fn bind(&mut self, binding: &SymbolBinding) -> Result<(), HistoryError> {
        match binding {
            SymbolBinding::Refers { symbol, name } => self.expect_current(symbol, name),
            SymbolBinding::Renames { symbol, from, to } => {
                self.expect_current(symbol, from)?;
                validate_identifier(to)?;
                self.names.insert(symbol.clone(), to.clone());
                Ok(())
            }
        }
    }

    pub fn bind_all(&mut self, bindings: &[SymbolBinding]) -> Result<(), HistoryError> {
        bindings.iter().try_for_each(|binding| self.bind(binding))
    }

    fn expect_current(&self, symbol: &str, expected: &str) -> Result<(), HistoryError> {
        let actual = self.current(symbol)?;
        if actual != expected {
            return Err(HistoryError::SymbolOrder {
                symbol: symbol.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }
}

pub fn validate_identifier(name: &str) -> Result<(), HistoryError> {
    if IDENTIFIER_RE.is_match(name) {
        Ok(())
    } else {
        Err(HistoryError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renames(symbol: &str, from: &str, to: &str) -> SymbolBinding {
        SymbolBinding::Renames {
            symbol: symbol.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn table() -> SymbolTable {
        let mut table = SymbolTable::default();
        table.declare("Calculator.add", "add").expect("declare");
        table
    }

    #[test]
    fn rename_chain_tracks_latest_name() {
        let mut table = table();
        table
            .bind_all(&[
                renames("Calculator.add", "add", "addNumbers"),
                renames("Calculator.add", "addNumbers", "addValues"),
            ])
            .expect("bind");
        assert_eq!(table.current("Calculator.add").expect("current"), "addValues");
    }

    #[test]
    fn out_of_order_rename_is_rejected() {
        let mut table = table();
        let err = table
            .bind(&renames("Calculator.add", "addNumbers", "addValues"))
            .expect_err("stale rename");
        match err {
            HistoryError::SymbolOrder {
                expected, actual, ..
            } => {
                assert_eq!(expected, "addNumbers");
                assert_eq!(actual, "add");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn refers_checks_without_renaming() {
        let mut table = table();
        table
            .bind(&SymbolBinding::Refers {
                symbol: "Calculator.add".to_string(),
                name: "add".to_string(),
            })
            .expect("refers");
        assert_eq!(table.current("Calculator.add").expect("current"), "add");
    }

    #[test]
    fn rejects_unknown_duplicate_and_invalid_names() {
        let mut table = table();
        assert!(matches!(
            table.current("Calculator.sub"),
            Err(HistoryError::UnknownSymbol { .. })
        ));
        assert!(matches!(
            table.declare("Calculator.add", "add"),
            Err(HistoryError::DuplicateSymbol { .. })
        ));
        assert!(matches!(
            table.bind(&renames("Calculator.add", "add", "add values")),
            Err(HistoryError::InvalidIdentifier { .. })
        ));
    }
}
