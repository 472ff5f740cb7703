//! The key/value store that template functions keep their state in.
//!
//! A template engine usually provides this itself. The core only talks to it
//! through the [`Scope`] trait, so any host can plug in its own store.
//! [`ScopeStack`] is a ready-made implementation with nested frames:
//! ```
//! use pegrules::scope::{Scope, ScopeStack};
//!
//! let mut scope = ScopeStack::new();
//! scope.add("variable", 0.into());
//!
//! scope.push();
//! scope.add("variable", 10.into());
//! assert_eq!(scope.get("variable").unwrap(), 10);
//! scope.pop().unwrap();
//!
//! assert_eq!(scope.get("variable").unwrap(), 0);
//! ```

use std::collections::HashMap;

use ahash::RandomState;
use serde_json::Value;

use crate::error::{Error, Result};

/// Access to a scoped key/value store.
///
/// Values are handed out as copies. Changes only become visible to other
/// callers once they are written back with [`Scope::modify`].
pub trait Scope {
    /// Read the nearest visible binding of `key`.
    fn get(&self, key: &str) -> Result<Value>;

    /// Define a new binding of `key` that is visible in the current and all nested scopes.
    fn add(&mut self, key: &str, value: Value);

    /// Overwrite the value of the nearest visible binding of `key`.
    fn modify(&mut self, key: &str, value: Value) -> Result<()>;
}

type Frame = HashMap<String, Value, RandomState>;

/// A stack of frames. Entering a lexical unit pushes a frame and leaving it pops the frame
/// together with every binding that was added in it.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    /// Create a store that consists of a single root frame.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
        }
    }

    /// Enter a nested scope.
    pub fn push(&mut self) {
        self.frames.push(Frame::default());
        log::trace!("Entered scope at depth {}", self.depth());
    }

    /// Leave the innermost scope. The root scope cannot be left.
    pub fn pop(&mut self) -> Result<()> {
        if self.frames.len() <= 1 {
            return Err(Error::ScopeUnderflow);
        }

        self.frames.pop();
        log::trace!("Left scope, now at depth {}", self.depth());
        Ok(())
    }

    /// Number of frames, including the root frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn lookup_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.frames.iter_mut().rev().find_map(|frame| frame.get_mut(key))
    }
}

impl Scope for ScopeStack {
    fn get(&self, key: &str) -> Result<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(key))
            .cloned()
            .ok_or_else(|| Error::uninitialized(key))
    }

    fn add(&mut self, key: &str, value: Value) {
        // The stack is never empty, new() creates the root and pop() keeps it
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(key.to_string(), value);
        }
    }

    fn modify(&mut self, key: &str, value: Value) -> Result<()> {
        match self.lookup_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(Error::uninitialized(key)),
        }
    }
}
