//! The functions a template engine calls by name.
//!
//! Every function takes its arguments as strings and returns the text that
//! replaces the call in the rendered document:
//! ```
//! use pegrules::{functions::TemplateFunction, scope::ScopeStack};
//!
//! let mut scope = ScopeStack::new();
//! let call = |scope: &mut ScopeStack, name: &str, args: &[&str]| {
//!     let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
//!     name.parse::<TemplateFunction>().unwrap().invoke(scope, &args).unwrap()
//! };
//!
//! call(&mut scope, "resetVariables", &[]);
//! assert_eq!(call(&mut scope, "genvar", &[]), "v0");
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    grammar,
    scope::Scope,
    variables,
};

/// One of the operations that template code can call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TemplateFunction {
    /// `createEmptyTables()`
    CreateEmptyTables,
    /// `addRule(name, pattern)`
    AddRule,
    /// `addEmitter(name, emitter)`
    AddEmitter,
    /// `constructpeg()`
    ConstructPeg,
    /// `resetVariables()`
    ResetVariables,
    /// `genvar()`
    GenVar,
}

impl TemplateFunction {
    /// All functions in the order they are documented.
    pub const ALL: [TemplateFunction; 6] = [
        TemplateFunction::CreateEmptyTables,
        TemplateFunction::AddRule,
        TemplateFunction::AddEmitter,
        TemplateFunction::ConstructPeg,
        TemplateFunction::ResetVariables,
        TemplateFunction::GenVar,
    ];

    /// The name under which the template engine knows this function.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateFunction::CreateEmptyTables => "createEmptyTables",
            TemplateFunction::AddRule => "addRule",
            TemplateFunction::AddEmitter => "addEmitter",
            TemplateFunction::ConstructPeg => "constructpeg",
            TemplateFunction::ResetVariables => "resetVariables",
            TemplateFunction::GenVar => "genvar",
        }
    }

    /// Number of arguments this function expects.
    pub fn arity(&self) -> usize {
        match self {
            TemplateFunction::AddRule | TemplateFunction::AddEmitter => 2,
            _ => 0,
        }
    }

    /// Run the function against `scope` and return the text that replaces the call.
    pub fn invoke<S: Scope + ?Sized>(&self, scope: &mut S, args: &[String]) -> Result<String> {
        if args.len() != self.arity() {
            return Err(Error::ArityMismatch {
                function: self.name().to_string(),
                expected: self.arity(),
                found: args.len(),
            });
        }

        log::debug!("Calling {}({:?})", self, args);

        match self {
            TemplateFunction::CreateEmptyTables => {
                grammar::create_empty_tables(scope)?;
                Ok(String::new())
            },
            TemplateFunction::AddRule => {
                grammar::add_rule(scope, &args[0], &args[1])?;
                Ok(String::new())
            },
            TemplateFunction::AddEmitter => {
                grammar::add_emitter(scope, &args[0], &args[1])?;
                Ok(String::new())
            },
            TemplateFunction::ConstructPeg => grammar::construct_peg(&*scope),
            TemplateFunction::ResetVariables => {
                variables::reset_variables(scope);
                Ok(String::new())
            },
            TemplateFunction::GenVar => variables::genvar(scope),
        }
    }
}

impl FromStr for TemplateFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or_else(|| Error::UnknownFunction(s.to_string()))
    }
}

impl Display for TemplateFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeStack;

    fn call(scope: &mut ScopeStack, name: &str, args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        name.parse::<TemplateFunction>()?.invoke(scope, &args)
    }

    #[test]
    fn test_names_roundtrip() {
        for function in TemplateFunction::ALL {
            assert_eq!(function.name().parse::<TemplateFunction>().unwrap(), function);
        }
    }

    #[test]
    fn test_unknown_function() {
        assert!(matches!("addrule".parse::<TemplateFunction>(), Err(Error::UnknownFunction(name)) if name == "addrule"));
    }

    #[test]
    fn test_outputs() {
        let mut scope = ScopeStack::new();

        assert_eq!(call(&mut scope, "createEmptyTables", &[]).unwrap(), "");
        assert_eq!(call(&mut scope, "addRule", &["Digit", "[0-9]"]).unwrap(), "");
        assert_eq!(call(&mut scope, "addEmitter", &["Digit", "(lambda (x) x)"]).unwrap(), "");
        assert_eq!(call(&mut scope, "constructpeg", &[]).unwrap(), "\n(define-peg Digit [0-9] (lambda (x) x))");
        assert_eq!(call(&mut scope, "resetVariables", &[]).unwrap(), "");
        assert_eq!(call(&mut scope, "genvar", &[]).unwrap(), "v0");
        assert_eq!(call(&mut scope, "genvar", &[]).unwrap(), "v1");
    }

    #[test]
    fn test_arity() {
        let mut scope = ScopeStack::new();
        call(&mut scope, "createEmptyTables", &[]).unwrap();

        let err = call(&mut scope, "addRule", &["Digit"]).unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { expected: 2, found: 1, .. }));

        let err = call(&mut scope, "genvar", &["x"]).unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { expected: 0, found: 1, .. }));

        assert_eq!(call(&mut scope, "constructpeg", &[]).unwrap(), "");
    }

    #[test]
    fn test_rule_not_found() {
        let mut scope = ScopeStack::new();
        call(&mut scope, "createEmptyTables", &[]).unwrap();
        assert!(matches!(call(&mut scope, "addEmitter", &["Nope", "e"]), Err(Error::RuleNotFound(_))));
    }
}
