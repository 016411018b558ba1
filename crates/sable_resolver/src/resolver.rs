//! The static resolver.
//!
//! Walks the whole AST exactly once before evaluation, maintaining a stack of
//! lexical scopes. For every local variable reference it records how many
//! enclosing scopes separate the reference from its declaration; the runtime
//! later uses that hop count to address the environment chain directly.
//! Binding errors (redeclaration, use in own initializer, top-level return,
//! unused variables) are accumulated as diagnostics; the pass never aborts on
//! them.

use crate::scope::{BindingState, ScopeStack};
use rustc_hash::FxHashMap;
use sable_ast::node::{Expr, FunctionDecl, Stmt};
use sable_ast::token::Token;
use sable_ast::types::NodeId;
use sable_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// Whether the resolver is currently inside a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionContext {
    None,
    Function,
}

/// The hop-count side table produced by resolution.
///
/// One entry per variable reference or assignment target that resolved to a
/// local binding; global references have no entry and fall back to a dynamic
/// lookup in the root environment.
#[derive(Debug, Clone, Default)]
pub struct ResolvedLocals {
    locals: FxHashMap<NodeId, usize>,
}

impl ResolvedLocals {
    /// The number of enclosing-environment hops for a reference node, or
    /// `None` for a global reference.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        self.locals.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.locals.iter().map(|(id, depth)| (*id, *depth))
    }
}

/// Everything a resolve pass produces.
#[derive(Debug)]
pub struct ResolveOutput {
    pub locals: ResolvedLocals,
    pub diagnostics: DiagnosticCollection,
}

/// Resolve a whole program in one pass.
pub fn resolve(statements: &[Stmt]) -> ResolveOutput {
    let mut resolver = Resolver::new();
    resolver.resolve_program(statements);
    resolver.finish()
}

/// Single-pass AST visitor computing lexical distances and binding errors.
pub struct Resolver {
    scopes: ScopeStack,
    current_function: FunctionContext,
    locals: FxHashMap<NodeId, usize>,
    diagnostics: DiagnosticCollection,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
            current_function: FunctionContext::None,
            locals: FxHashMap::default(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Resolve a sequence of top-level statements.
    pub fn resolve_program(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    /// Consume the resolver and hand back the locals table and diagnostics.
    pub fn finish(self) -> ResolveOutput {
        ResolveOutput {
            locals: ResolvedLocals {
                locals: self.locals,
            },
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) | Stmt::Print(expr) => self.resolve_expr(expr),
            Stmt::Var { name, initializer } => {
                self.declare(name);
                if let Some(initializer) = initializer {
                    self.resolve_expr(initializer);
                }
                self.define(name);
            }
            Stmt::Block(statements) => {
                self.scopes.begin();
                for statement in statements {
                    self.resolve_stmt(statement);
                }
                self.end_scope(None);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            Stmt::Function(decl) => {
                // The function's own name is bound in the surrounding scope
                // before the body resolves, so it can recurse.
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(decl);
            }
            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionContext::None {
                    self.diagnostics.add(Diagnostic::with_span(
                        keyword.span,
                        &messages::CANNOT_RETURN_FROM_TOP_LEVEL_CODE,
                        &[],
                    ));
                }
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
            Stmt::Class { name } => {
                self.declare(name);
                self.define(name);
            }
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl) {
        let enclosing = std::mem::replace(&mut self.current_function, FunctionContext::Function);

        self.scopes.begin();
        for param in &decl.params {
            self.declare(param);
            self.define(param);
        }
        for statement in &decl.body {
            self.resolve_stmt(statement);
        }
        self.end_scope(Some(&decl.name));

        self.current_function = enclosing;
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}
            Expr::Grouping(inner) => self.resolve_expr(inner),
            Expr::Unary { right, .. } => self.resolve_expr(right),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            Expr::Call {
                callee, arguments, ..
            } => {
                self.resolve_expr(callee);
                for argument in arguments {
                    self.resolve_expr(argument);
                }
            }
            Expr::Variable { id, name } => {
                if let Some(scope) = self.scopes.peek() {
                    if scope.state(&name.lexeme) == Some(BindingState::Declared) {
                        self.diagnostics.add(Diagnostic::with_span(
                            name.span,
                            &messages::CANNOT_READ_LOCAL_VARIABLE_IN_ITS_OWN_INITIALIZER,
                            &[&name.lexeme],
                        ));
                    }
                }
                self.resolve_local(*id, name);
            }
            Expr::Assign { id, name, value } => {
                self.resolve_expr(value);
                self.resolve_local(*id, name);
            }
            Expr::Get { object, .. } => self.resolve_expr(object),
            Expr::Set { object, value, .. } => {
                self.resolve_expr(value);
                self.resolve_expr(object);
            }
        }
    }

    // ========================================================================
    // Scope bookkeeping
    // ========================================================================

    /// Pop the innermost scope and report its unused names as one diagnostic.
    /// For a function body scope the report points at the function's name
    /// token; plain blocks have no token to point at.
    fn end_scope(&mut self, owner: Option<&Token>) {
        let Some(unused) = self.scopes.end() else {
            return;
        };
        if unused.is_empty() {
            return;
        }
        let joined = unused.join(", ");
        let diagnostic = match owner {
            Some(token) => {
                Diagnostic::with_span(token.span, &messages::UNUSED_VARIABLES_0, &[&joined])
            }
            None => Diagnostic::new(&messages::UNUSED_VARIABLES_0, &[&joined]),
        };
        self.diagnostics.add(diagnostic);
    }

    fn declare(&mut self, name: &Token) {
        // Global declarations are not tracked.
        let Some(scope) = self.scopes.peek_mut() else {
            return;
        };
        if scope.contains(&name.lexeme) {
            self.diagnostics.add(Diagnostic::with_span(
                name.span,
                &messages::VARIABLE_ALREADY_DECLARED_IN_THIS_SCOPE,
                &[&name.lexeme],
            ));
        }
        scope.insert(&name.lexeme, BindingState::Declared);
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.peek_mut() {
            scope.insert(&name.lexeme, BindingState::Defined);
        }
    }

    /// Find the scope declaring `name`, innermost first; record the hop count
    /// for this reference and mark the binding used where it was found. No
    /// hit means the reference is global and stays out of the table.
    fn resolve_local(&mut self, id: NodeId, name: &Token) {
        let depth = self.scopes.depth();
        for (index, scope) in self.scopes.iter_mut().enumerate().rev() {
            if scope.contains(&name.lexeme) {
                scope.insert(&name.lexeme, BindingState::Used);
                self.locals.insert(id, depth - 1 - index);
                return;
            }
        }
    }
}
