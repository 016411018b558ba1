//! AST node definitions for the Sable interpreter.
//!
//! Statements and expressions are plain owned enums; child nodes are boxed.
//! The parser assigns every variable reference and assignment target a
//! [`NodeId`] so later phases can attach per-reference data without relying
//! on node identity.

use crate::token::Token;
use crate::types::NodeId;
use std::fmt;

// ============================================================================
// Literals
// ============================================================================

/// A literal value as it appears in source.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant. Terminal node, nothing to resolve.
    Literal(LiteralValue),
    /// A parenthesized expression.
    Grouping(Box<Expr>),
    /// A prefix operator application.
    Unary { operator: Token, right: Box<Expr> },
    /// An infix arithmetic or comparison operation.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// Short-circuiting `and` / `or`.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// A call expression. `paren` is the closing parenthesis token, kept for
    /// runtime error positions.
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
    /// A variable read. Keyed by `id` in the resolver's locals table.
    Variable { id: NodeId, name: Token },
    /// An assignment to a named variable. Keyed by `id` like a read.
    Assign {
        id: NodeId,
        name: Token,
        value: Box<Expr>,
    },
    /// A property read: `object.name`.
    Get { object: Box<Expr>, name: Token },
    /// A property write: `object.name = value`.
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },
}

impl Expr {
    /// The node id of this expression, for reference nodes.
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Expr::Variable { id, .. } | Expr::Assign { id, .. } => Some(*id),
            _ => None,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A function declaration: name, parameter tokens, body statements.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var name = initializer;` with the initializer optional.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    /// A braced block introducing a new scope.
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While { condition: Expr, body: Box<Stmt> },
    /// `fun name(params) { body }`
    Function(FunctionDecl),
    /// `return value;` where `keyword` is the `return` token for diagnostics.
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
    /// `class Name {}`, a zero-argument, method-less class.
    Class { name: Token },
}
