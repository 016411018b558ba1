//! Scope management for the resolver.

use indexmap::IndexMap;

/// Lifecycle state of a binding within its declaring scope.
///
/// A binding moves `Declared` → `Defined` → `Used` as the resolver walks the
/// code that declares, initializes, and finally references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// The name exists but its initializer has not been resolved yet.
    Declared,
    /// The initializer (if any) has been resolved; the name is readable.
    Defined,
    /// The name has been read or assigned through at least once.
    Used,
}

/// A single lexical scope: the names declared in one block or function body.
///
/// Bindings keep declaration order so unused-variable reports are
/// deterministic.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: IndexMap<String, BindingState>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn state(&self, name: &str) -> Option<BindingState> {
        self.bindings.get(name).copied()
    }

    /// Insert or overwrite a binding. Last write wins.
    pub fn insert(&mut self, name: &str, state: BindingState) {
        self.bindings.insert(name.to_string(), state);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Names never marked `Used`, in declaration order.
    pub fn unused_names(&self) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|(_, state)| **state != BindingState::Used)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// The resolver's stack of lexical scopes, outermost at index 0.
///
/// An empty stack means the resolver is at global level; global names are not
/// tracked at all.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a fresh scope.
    pub fn begin(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope and return its unused names, or `None` when
    /// the stack is empty (unbalanced pop, a resolver bug).
    pub fn end(&mut self) -> Option<Vec<String>> {
        self.scopes.pop().map(|scope| scope.unused_names())
    }

    /// Whether scope tracking is inactive (global level).
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn peek(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Scope> {
        self.scopes.last_mut()
    }

    /// Iterate scopes outermost-first, mutably. The resolver scans this in
    /// reverse for lexical distance.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Scope> {
        self.scopes.iter_mut()
    }
}
