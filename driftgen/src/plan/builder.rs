//! Incremental plan construction backed by a symbol table.
//!
//! Markers and messages are templates. `{name}` expands to a symbol's current
//! identifier; rename messages additionally expand `{from}` and `{to}`. Because
//! names come from the table, an entry written after a rename automatically
//! targets the renamed identifier.

use crate::core::symbols::{SymbolTable, validate_identifier};
use crate::core::types::{
    Category, ExpectedCounts, Plan, PlanEntry, ReplaceMode, Substitution, SymbolBinding,
};
use crate::error::HistoryError;

pub struct PlanBuilder {
    name: String,
    expected: ExpectedCounts,
    default_mode: ReplaceMode,
    baseline: SymbolTable,
    symbols: SymbolTable,
    entries: Vec<PlanEntry>,
}

impl PlanBuilder {
    pub fn new(name: &str, expected: ExpectedCounts, default_mode: ReplaceMode) -> Self {
        Self {
            name: name.to_string(),
            expected,
            default_mode,
            baseline: SymbolTable::default(),
            symbols: SymbolTable::default(),
            entries: Vec::with_capacity(expected.total()),
        }
    }

    /// Register a symbol under its baseline identifier.
    pub fn declare(&mut self, symbol: &str, name: &str) -> Result<&mut Self, HistoryError> {
        self.baseline.declare(symbol, name)?;
        self.symbols.declare(symbol, name)?;
        Ok(self)
    }

    /// Declare several `(symbol, name)` pairs.
    pub fn declare_all(&mut self, symbols: &[(&str, &str)]) -> Result<&mut Self, HistoryError> {
        for (symbol, name) in symbols {
            self.declare(symbol, name)?;
        }
        Ok(self)
    }

    /// Code entry renaming `symbol` to `to`.
    ///
    /// `shape` is the marker around the identifier, e.g. `"int {name}("`.
    pub fn rename(
        &mut self,
        message: &str,
        file: &str,
        symbol: &str,
        shape: &str,
        to: &str,
    ) -> Result<&mut PlanEntry, HistoryError> {
        validate_identifier(to)?;
        let from = self.symbols.current(symbol)?.to_string();
        let message = message.replace("{from}", &from).replace("{to}", to);
        let substitutions = vec![Substitution::new(
            expand(shape, &from),
            expand(shape, to),
        )];
        let binding = SymbolBinding::Renames {
            symbol: symbol.to_string(),
            from,
            to: to.to_string(),
        };
        self.push(message, Category::Code, file, substitutions, binding)
    }

    /// Code entry editing the body or signature of `symbol` without renaming it.
    pub fn revise(
        &mut self,
        message: &str,
        file: &str,
        symbol: &str,
        pairs: &[(&str, &str)],
    ) -> Result<&mut PlanEntry, HistoryError> {
        self.refer(message, Category::Code, file, symbol, pairs)
    }

    /// Documentation entry editing the comment text attached to `symbol`.
    pub fn document(
        &mut self,
        message: &str,
        file: &str,
        symbol: &str,
        pairs: &[(&str, &str)],
    ) -> Result<&mut PlanEntry, HistoryError> {
        self.refer(message, Category::Documentation, file, symbol, pairs)
    }

    pub fn build(self) -> Plan {
        Plan {
            name: self.name,
            expected: self.expected,
            symbols: self.baseline,
            entries: self.entries,
        }
    }

    fn refer(
        &mut self,
        message: &str,
        category: Category,
        file: &str,
        symbol: &str,
        pairs: &[(&str, &str)],
    ) -> Result<&mut PlanEntry, HistoryError> {
        let name = self.symbols.current(symbol)?.to_string();
        let substitutions = pairs
            .iter()
            .map(|(search, replace)| Substitution::new(expand(search, &name), expand(replace, &name)))
            .collect();
        let binding = SymbolBinding::Refers {
            symbol: symbol.to_string(),
            name: name.clone(),
        };
        self.push(expand(message, &name), category, file, substitutions, binding)
    }

    fn push(
        &mut self,
        message: String,
        category: Category,
        file: &str,
        substitutions: Vec<Substitution>,
        binding: SymbolBinding,
    ) -> Result<&mut PlanEntry, HistoryError> {
        self.symbols.bind(&binding)?;
        let mut entry = PlanEntry::new(message, category, file, substitutions, self.default_mode);
        entry.bindings.push(binding);
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }
}

fn expand(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan_rules::validate_plan;

    fn builder() -> PlanBuilder {
        let mut b = PlanBuilder::new(
            "test",
            ExpectedCounts {
                code: 3,
                documentation: 1,
            },
            ReplaceMode::All,
        );
        b.declare("Calculator.add", "add").expect("declare");
        b
    }

    #[test]
    fn markers_and_messages_follow_current_name() {
        let mut b = builder();
        b.rename(
            "REFACTOR: rename Calculator.{from} to {to}",
            "Calculator.java",
            "Calculator.add",
            "int {name}(",
            "addNumbers",
        )
        .expect("rename");
        b.revise(
            "REFACTOR: rename params in {name}",
            "Calculator.java",
            "Calculator.add",
            &[("{name}(int a, int b)", "{name}(int left, int right)")],
        )
        .expect("revise")
        .with_mode(ReplaceMode::First);
        b.rename(
            "REFACTOR: rename {from} to {to}",
            "Calculator.java",
            "Calculator.add",
            "{name}(",
            "addValues",
        )
        .expect("rename again");
        b.document(
            "JAVADOC: drift {name} description",
            "Calculator.java",
            "Calculator.add",
            &[("Adds two integers.", "Adds three integers.")],
        )
        .expect("document");

        let plan = b.build();
        let messages: Vec<&str> = plan.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "REFACTOR: rename Calculator.add to addNumbers",
                "REFACTOR: rename params in addNumbers",
                "REFACTOR: rename addNumbers to addValues",
                "JAVADOC: drift addValues description",
            ]
        );
        assert_eq!(
            plan.entries[0].step.substitutions,
            vec![Substitution::new("int add(", "int addNumbers(")]
        );
        assert_eq!(
            plan.entries[1].step.substitutions,
            vec![Substitution::new(
                "addNumbers(int a, int b)",
                "addNumbers(int left, int right)"
            )]
        );
        assert_eq!(plan.entries[1].step.mode, ReplaceMode::First);
        assert_eq!(plan.entries[2].step.mode, ReplaceMode::All);
        assert_eq!(plan.symbols.current("Calculator.add").expect("baseline"), "add");
        validate_plan(&plan).expect("valid");
    }

    #[test]
    fn unknown_symbol_fails_construction() {
        let mut b = builder();
        let err = b
            .rename("m", "Calculator.java", "Calculator.sub", "int {name}(", "minus")
            .expect_err("unknown symbol");
        assert!(matches!(err, HistoryError::UnknownSymbol { .. }));
    }

    #[test]
    fn invalid_target_identifier_fails_construction() {
        let mut b = builder();
        let err = b
            .rename("m", "Calculator.java", "Calculator.add", "int {name}(", "add-numbers")
            .expect_err("invalid identifier");
        assert!(matches!(err, HistoryError::InvalidIdentifier { .. }));
    }
}
