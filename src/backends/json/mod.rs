//! Export a rule table as JSON.
//! 
//! Use it like so:
//! ```no_run
//! use pegrules::{backends::json::JsonGenerator, grammar::RuleTable, render::Renderer};
//!
//! // First, render a script. This leaves the rule table in the root scope.
//! let mut renderer = Renderer::new();
//! renderer.render_file("my-template.json").unwrap();
//! 
//! // Then, write the collected rules to disk.
//! let table = RuleTable::load(renderer.scope()).unwrap();
//! JsonGenerator::new().generate("rules.json", &table).unwrap();
//! ```

mod generator;

pub use generator::JsonGenerator;
