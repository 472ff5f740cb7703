use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde_json::Value;

use crate::{
    error::{Error, Result},
    grammar::RuleRecord,
    scope::Scope,
};

/// Scope key under which the rule table lives.
pub const RULES_KEY: &str = "rules";

/// An ordered list of rule declarations. Insertion order is output order and
/// the same name may appear more than once.
///
/// All mutating methods consume the table and hand back a new one. The table is
/// meant to be read out of a [`Scope`], transformed and stored back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<RuleRecord>,
}

impl RuleTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[RuleRecord] {
        &self.rules
    }

    /// Number of rules, duplicates included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` if no rule was added since the table was created.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a new rule without an emitter.
    pub fn with_rule<N: Into<String>, P: Into<String>>(mut self, name: N, pattern: P) -> Self {
        self.rules.push(RuleRecord::new(name, pattern));
        self
    }

    /// Set the emitter of the first rule called `name`. Later rules with the
    /// same name are left alone.
    pub fn with_emitter<S: Into<String>>(mut self, name: &str, emitter: S) -> Result<Self> {
        match self.rules.iter_mut().find(|rule| rule.name() == name) {
            Some(rule) => rule.set_emitter(emitter.into()),
            None => return Err(Error::RuleNotFound(name.to_string())),
        }

        Ok(self)
    }

    /// Read the table that is currently visible in `scope`.
    pub fn load<S: Scope + ?Sized>(scope: &S) -> Result<Self> {
        let value = scope.get(RULES_KEY)?;

        if !value.is_array() {
            return Err(Error::malformed(RULES_KEY, "expected an array of rules"));
        }

        let rules = serde_json::from_value(value).map_err(|e| Error::malformed(RULES_KEY, e.to_string()))?;
        Ok(Self {
            rules,
        })
    }

    /// Overwrite the visible binding of the table in `scope` with this table.
    pub fn store<S: Scope + ?Sized>(&self, scope: &mut S) -> Result<()> {
        scope.modify(RULES_KEY, self.to_value()?)
    }

    pub(crate) fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.rules)?)
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.rules.iter().map(|rule| format!("\n{}", rule)).join(""))
    }
}

/// Bind a fresh, empty table in the current scope. Everything that was added
/// before is no longer visible afterwards.
pub fn create_empty_tables<S: Scope + ?Sized>(scope: &mut S) -> Result<()> {
    scope.add(RULES_KEY, RuleTable::new().to_value()?);
    Ok(())
}

/// Append a rule with the given `pattern` to the table.
pub fn add_rule<S: Scope + ?Sized>(scope: &mut S, name: &str, pattern: &str) -> Result<()> {
    let table = RuleTable::load(&*scope)?.with_rule(name, pattern);
    log::debug!("Added rule {} (now {} rules)", name, table.len());
    table.store(scope)
}

/// Attach `emitter` to the first rule named `name`.
///
/// Fails with [`Error::RuleNotFound`] if there is no such rule. The table is not
/// touched in that case.
pub fn add_emitter<S: Scope + ?Sized>(scope: &mut S, name: &str, emitter: &str) -> Result<()> {
    let table = RuleTable::load(&*scope)?.with_emitter(name, emitter)?;
    log::debug!("Attached emitter to rule {}", name);
    table.store(scope)
}

/// Print every rule as a `(define-peg name pattern emitter)` form, each one
/// preceded by a newline.
pub fn construct_peg<S: Scope + ?Sized>(scope: &S) -> Result<String> {
    Ok(RuleTable::load(scope)?.to_string())
}
