//! The rule table that collects PEG rule declarations while a template renders.
//!
//! A template drives it like this:
//! ```
//! use pegrules::{grammar, scope::ScopeStack};
//!
//! let mut scope = ScopeStack::new();
//! grammar::create_empty_tables(&mut scope).unwrap();
//!
//! // Declare a rule, then attach the action that runs on a match
//! grammar::add_rule(&mut scope, "Digit", "[0-9]").unwrap();
//! grammar::add_emitter(&mut scope, "Digit", "(lambda (x) x)").unwrap();
//!
//! assert_eq!(
//!     grammar::construct_peg(&scope).unwrap(),
//!     "\n(define-peg Digit [0-9] (lambda (x) x))",
//! );
//! ```
//! The table itself lives in the [`Scope`](crate::scope::Scope) under [`RULES_KEY`].
//! Every operation reads it, transforms a copy and writes it back.

mod rule;
mod table;

pub use rule::*;
pub use table::*;
