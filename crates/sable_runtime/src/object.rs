//! The object model: classes, instances, and the callable contract.

use crate::error::RuntimeError;
use crate::value::Value;
use rustc_hash::FxHashMap;
use sable_ast::token::Token;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Anything a call expression can invoke.
pub trait Callable {
    fn arity(&self) -> usize;
    fn call(&self, arguments: &[Value]) -> Result<Value, RuntimeError>;
}

/// A class value. Shared read-only by every instance created from it.
///
/// Classes in this slice take no constructor arguments and declare no
/// methods; a method table is the natural extension point here.
#[derive(Debug)]
pub struct Class {
    name: String,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Calling a class is how constructor syntax is realized: each call allocates
/// a distinct instance bound to this class.
impl Callable for Rc<Class> {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _arguments: &[Value]) -> Result<Value, RuntimeError> {
        let instance = Instance::new(Rc::clone(self));
        Ok(Value::Instance(Rc::new(RefCell::new(instance))))
    }
}

/// A runtime object: mutable named fields plus a link back to its class.
#[derive(Debug)]
pub struct Instance {
    class: Rc<Class>,
    fields: FxHashMap<String, Value>,
}

impl Instance {
    /// A fresh instance with no fields.
    pub fn new(class: Rc<Class>) -> Self {
        Self {
            class,
            fields: FxHashMap::default(),
        }
    }

    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Read a field. There is no method-table fallback in this slice.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.fields
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedProperty {
                name: name.lexeme.clone(),
                span: name.span,
            })
    }

    /// Write a field. Fields spring into being on first assignment.
    pub fn set(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instance", self.class.name)
    }
}
