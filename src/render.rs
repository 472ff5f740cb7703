//! Drive the template functions from a render script instead of a real template engine.
//!
//! A render script is a JSON array (C-style comments allowed) of steps:
//! - `"text"`: copied to the output as-is
//! - `["addRule", "Digit", "[0-9]"]`: calls a template function and appends its result
//! - `{"scope": [...]}`: renders the nested steps in their own scope
//!
//! ```
//! use pegrules::render::Renderer;
//!
//! let steps = Renderer::parse(r#"[
//!     ["createEmptyTables"],
//!     ["addRule", "Digit", "[0-9]"],
//!     "grammar:",
//!     ["constructpeg"]
//! ]"#).unwrap();
//!
//! let output = Renderer::new().render(&steps).unwrap();
//! assert_eq!(output, "grammar:\n(define-peg Digit [0-9] undefined)");
//! ```

use std::path::Path;

use crate::{
    error::{ParsingError, Result},
    functions::TemplateFunction,
    parser::script,
    scope::ScopeStack,
};

/// One instruction of a render script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Literal text
    Text(String),

    /// A call to a template function
    Call {
        /// Which function to call
        function: TemplateFunction,
        /// Its arguments
        args: Vec<String>,
    },

    /// Steps that run inside a nested scope
    Scope(Vec<Step>),
}

/// Executes render scripts against a [`ScopeStack`].
pub struct Renderer {
    scope: ScopeStack,
}

impl Renderer {
    /// Create a renderer with an empty root scope.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            scope: ScopeStack::new(),
        }
    }

    /// Load a render script from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Vec<Step>, ParsingError> {
        script::parse_json(path.as_ref())
    }

    /// Parse a render script held in memory.
    pub fn parse(source: &str) -> std::result::Result<Vec<Step>, ParsingError> {
        script::parse_str(source).map_err(|e| ParsingError::new("<memory>", e))
    }

    /// The root scope, including everything the rendered steps left in it.
    pub fn scope(&self) -> &ScopeStack {
        &self.scope
    }

    /// Render `steps` and return the concatenated output. The first failing step aborts rendering.
    pub fn render(&mut self, steps: &[Step]) -> Result<String> {
        let mut output = String::new();
        self.render_into(steps, &mut output)?;
        Ok(output)
    }

    /// Render the script at `path` and return its output.
    pub fn render_file<P: AsRef<Path>>(&mut self, path: P) -> Result<String> {
        let steps = Self::load(path)?;
        self.render(&steps)
    }

    fn render_into(&mut self, steps: &[Step], output: &mut String) -> Result<()> {
        for step in steps {
            match step {
                Step::Text(text) => {
                    log::trace!("Emitting {:?}", text);
                    output.push_str(text);
                },
                Step::Call {
                    function,
                    args,
                } => {
                    let text = function.invoke(&mut self.scope, args)?;
                    log::trace!("{} returned {:?}", function, text);
                    output.push_str(&text);
                },
                Step::Scope(nested) => {
                    self.scope.push();
                    log::debug!("Entering scope at depth {}", self.scope.depth());

                    let result = self.render_into(nested, output);

                    log::debug!("Leaving scope at depth {}", self.scope.depth());
                    self.scope.pop()?;
                    result?;
                },
            }
        }

        Ok(())
    }
}

impl From<ScopeStack> for Renderer {
    fn from(scope: ScopeStack) -> Self {
        Self {
            scope,
        }
    }
}
