//! Fresh variable names for generated rule bodies.
//!
//! The counter is stored in the [`Scope`] under [`VARIABLE_KEY`] and must be
//! reset before the first name is generated. Names are `v0`, `v1`, `v2`, ...

use serde_json::Value;

use crate::{
    error::{Error, Result},
    scope::Scope,
};

/// Scope key under which the counter lives.
pub const VARIABLE_KEY: &str = "variable";

/// Prefix of every generated name.
pub const VARIABLE_PREFIX: &str = "v";

/// Restart numbering at zero in the current scope.
pub fn reset_variables<S: Scope + ?Sized>(scope: &mut S) {
    scope.add(VARIABLE_KEY, Value::from(0u64));
}

fn current<S: Scope + ?Sized>(scope: &S) -> Result<u64> {
    let value = scope.get(VARIABLE_KEY)?;
    value.as_u64().ok_or_else(|| Error::malformed(VARIABLE_KEY, format!("expected a non-negative integer, found {}", value)))
}

/// Return the next unused name and advance the counter.
pub fn genvar<S: Scope + ?Sized>(scope: &mut S) -> Result<String> {
    let id = current(&*scope)?;
    let next = id.checked_add(1).ok_or_else(|| Error::malformed(VARIABLE_KEY, "counter exhausted"))?;
    scope.modify(VARIABLE_KEY, Value::from(next))?;
    Ok(format!("{}{}", VARIABLE_PREFIX, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeStack;

    #[test]
    fn test_sequence() {
        let mut scope = ScopeStack::new();
        reset_variables(&mut scope);

        let names: Vec<String> = (0..100).map(|_| genvar(&mut scope).unwrap()).collect();

        for (i, name) in names.iter().enumerate() {
            assert_eq!(*name, format!("v{}", i));
        }
    }

    #[test]
    fn test_reset_restarts() {
        let mut scope = ScopeStack::new();
        reset_variables(&mut scope);
        assert_eq!(genvar(&mut scope).unwrap(), "v0");
        assert_eq!(genvar(&mut scope).unwrap(), "v1");

        reset_variables(&mut scope);
        assert_eq!(genvar(&mut scope).unwrap(), "v0");
    }

    #[test]
    fn test_uninitialized() {
        let mut scope = ScopeStack::new();
        assert!(matches!(genvar(&mut scope), Err(Error::UninitializedState { key }) if key == VARIABLE_KEY));
    }

    #[test]
    fn test_malformed_counter() {
        let mut scope = ScopeStack::new();
        scope.add(VARIABLE_KEY, Value::from("zero"));
        assert!(matches!(genvar(&mut scope), Err(Error::MalformedState { .. })));

        scope.add(VARIABLE_KEY, Value::from(-1));
        assert!(matches!(genvar(&mut scope), Err(Error::MalformedState { .. })));
    }

    #[test]
    fn test_counter_at_max() {
        let mut scope = ScopeStack::new();
        scope.add(VARIABLE_KEY, Value::from(u64::MAX));

        assert!(matches!(genvar(&mut scope), Err(Error::MalformedState { key, .. }) if key == VARIABLE_KEY));
        assert_eq!(scope.get(VARIABLE_KEY).unwrap(), Value::from(u64::MAX));
    }

    #[test]
    fn test_counter_below_max() {
        let mut scope = ScopeStack::new();
        scope.add(VARIABLE_KEY, Value::from(u64::MAX - 1));

        assert_eq!(genvar(&mut scope).unwrap(), format!("v{}", u64::MAX - 1));
        assert!(genvar(&mut scope).is_err());
    }

    #[test]
    fn test_nested_counter() {
        let mut scope = ScopeStack::new();
        reset_variables(&mut scope);
        genvar(&mut scope).unwrap();

        scope.push();
        reset_variables(&mut scope);
        assert_eq!(genvar(&mut scope).unwrap(), "v0");
        scope.pop().unwrap();

        assert_eq!(genvar(&mut scope).unwrap(), "v1");
    }

    #[test]
    fn test_nested_scope_shares_outer_counter() {
        let mut scope = ScopeStack::new();
        reset_variables(&mut scope);

        scope.push();
        assert_eq!(genvar(&mut scope).unwrap(), "v0");
        scope.pop().unwrap();

        assert_eq!(genvar(&mut scope).unwrap(), "v1");
    }
}
