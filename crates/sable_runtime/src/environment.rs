//! The runtime environment chain.
//!
//! One environment exists per activation of a block or function call, linked
//! to the environment of the enclosing activation. Environments are shared
//! (`Rc`) because closures keep their defining chain alive after the creating
//! call returns, and mutable under sharing (`RefCell`) because assignment
//! must work through any handle.

use crate::error::RuntimeError;
use crate::value::Value;
use rustc_hash::FxHashMap;
use sable_ast::token::Token;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an environment.
pub type EnvRef = Rc<RefCell<Environment>>;

/// Runtime storage for one scope activation.
#[derive(Debug, Default)]
pub struct Environment {
    enclosing: Option<EnvRef>,
    values: FxHashMap<String, Value>,
}

impl Environment {
    /// The root (global) environment.
    pub fn global() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A fresh environment nested inside `enclosing`.
    pub fn with_enclosing(enclosing: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self {
            enclosing: Some(enclosing),
            values: FxHashMap::default(),
        }))
    }

    /// Insert or overwrite a binding in this environment only.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Look up a binding in this environment only. This is also the global
    /// fallback path: references the resolver left out of its table are
    /// looked up dynamically against the root environment.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.values
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.lexeme.clone(),
                span: name.span,
            })
    }

    /// Overwrite an existing binding in this environment only.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        match self.values.get_mut(&name.lexeme) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::UndefinedVariable {
                name: name.lexeme.clone(),
                span: name.span,
            }),
        }
    }

    /// Walk exactly `distance` enclosing links. `None` means the chain is
    /// shorter than the resolver thought, which callers surface as a
    /// [`RuntimeError::StaleResolution`].
    pub fn ancestor(env: &EnvRef, distance: usize) -> Option<EnvRef> {
        let mut current = Rc::clone(env);
        for _ in 0..distance {
            let parent = current.borrow().enclosing.as_ref().map(Rc::clone);
            current = parent?;
        }
        Some(current)
    }

    /// Read `name` from the environment exactly `distance` hops up. The hop
    /// count comes from the resolver, so a miss here is a
    /// resolver/runtime desynchronization, not a user error.
    pub fn get_at(env: &EnvRef, distance: usize, name: &Token) -> Result<Value, RuntimeError> {
        let stale = || RuntimeError::StaleResolution {
            name: name.lexeme.clone(),
            depth: distance,
        };
        let target = Self::ancestor(env, distance).ok_or_else(stale)?;
        let value = target.borrow().values.get(&name.lexeme).cloned();
        value.ok_or_else(stale)
    }

    /// Overwrite `name` in the environment exactly `distance` hops up.
    pub fn assign_at(
        env: &EnvRef,
        distance: usize,
        name: &Token,
        value: Value,
    ) -> Result<(), RuntimeError> {
        let stale = || RuntimeError::StaleResolution {
            name: name.lexeme.clone(),
            depth: distance,
        };
        let target = Self::ancestor(env, distance).ok_or_else(stale)?;
        let mut target = target.borrow_mut();
        match target.values.get_mut(&name.lexeme) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(stale()),
        }
    }
}
