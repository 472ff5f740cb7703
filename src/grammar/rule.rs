use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// What gets printed in place of an emitter that was never attached.
pub const MISSING_EMITTER: &str = "undefined";

/// A single rule declaration: a grammar symbol, its PEG pattern and the action
/// that runs when the pattern matches.
///
/// Pattern and emitter are opaque text. Nothing in this crate parses them.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    name: String,
    pattern: String,
    #[serde(default)]
    emitter: Option<String>,
}

impl RuleRecord {
    /// Create a record without an emitter.
    pub fn new<N: Into<String>, P: Into<String>>(name: N, pattern: P) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            emitter: None,
        }
    }

    /// The grammar symbol this rule defines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The PEG pattern exactly as the template wrote it.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// `None` until [`add_emitter`](crate::grammar::add_emitter) targets this rule.
    pub fn emitter(&self) -> Option<&str> {
        self.emitter.as_deref()
    }

    pub(crate) fn set_emitter(&mut self, emitter: String) {
        self.emitter = Some(emitter);
    }
}

impl Display for RuleRecord {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "(define-peg {} {} {})",
            self.name,
            self.pattern,
            self.emitter().unwrap_or(MISSING_EMITTER)
        )
    }
}
