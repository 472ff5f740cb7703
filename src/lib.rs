//! This library contains the template functions that collect PEG rules while a template renders.
//!
//! It consists of
//! - __grammar__: A rule table. Templates declare rules with a pattern, attach emitters to them
//!   and finally print the whole table as `(define-peg name pattern emitter)` forms.
//! - __variables__: A counter that hands out fresh names `v0`, `v1`, ... for generated rule bodies.
//! - __scope__: The key/value store both of them keep their state in. A template engine can bring
//!   its own by implementing [`Scope`](scope::Scope).
//! - __functions__: Name-based dispatch, so a template engine can call `addRule` etc. directly.
//! - __render__: A small stand-in for a template engine that executes JSON render scripts.
//! - __backends__: Export a rule table in other formats. Currently only `json`.
//!
//! ## Getting Started
//! ```
//! use pegrules::{grammar, variables, scope::ScopeStack};
//!
//! let mut scope = ScopeStack::new();
//! grammar::create_empty_tables(&mut scope).unwrap();
//! variables::reset_variables(&mut scope);
//!
//! let var = variables::genvar(&mut scope).unwrap();
//! grammar::add_rule(&mut scope, "Number", &format!("(: {} (+ Digit))", var)).unwrap();
//! grammar::add_emitter(&mut scope, "Number", &format!("(string->number {})", var)).unwrap();
//!
//! assert_eq!(
//!     grammar::construct_peg(&scope).unwrap(),
//!     "\n(define-peg Number (: v0 (+ Digit)) (string->number v0))",
//! );
//! ```

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod scope;
pub mod grammar;
pub mod variables;
pub mod functions;
pub mod render;
pub mod backends;
