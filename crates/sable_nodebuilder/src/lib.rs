//! sable_nodebuilder: Programmatic AST construction.
//!
//! Builds statement and expression nodes the way the parser would: every
//! variable reference and assignment target gets a fresh, strictly increasing
//! [`NodeId`], and every token gets a distinct synthetic span. Used by tests
//! and by embedders that construct programs without going through source
//! text.

use sable_ast::node::{Expr, FunctionDecl, LiteralValue, Stmt};
use sable_ast::token::{Token, TokenKind};
use sable_ast::types::NodeId;
use sable_core::text::TextSpan;

/// Builds AST nodes with parser-like id and span assignment.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    next_node_id: u32,
    pos: u32,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of node ids handed out so far.
    pub fn node_count(&self) -> u32 {
        self.next_node_id
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn next_span(&mut self, len: u32) -> TextSpan {
        let span = TextSpan::new(self.pos, len);
        self.pos += len + 1;
        span
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    /// A token of the given kind; the span advances past the lexeme.
    pub fn token(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let span = self.next_span(lexeme.len() as u32);
        Token::new(kind, lexeme, span)
    }

    /// An identifier token.
    pub fn ident(&mut self, name: &str) -> Token {
        self.token(TokenKind::Identifier, name)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn literal(&self, value: LiteralValue) -> Expr {
        Expr::Literal(value)
    }

    pub fn number(&self, value: f64) -> Expr {
        Expr::Literal(LiteralValue::Number(value))
    }

    pub fn string(&self, value: &str) -> Expr {
        Expr::Literal(LiteralValue::String(value.to_string()))
    }

    pub fn nil(&self) -> Expr {
        Expr::Literal(LiteralValue::Nil)
    }

    pub fn grouping(&self, inner: Expr) -> Expr {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(&mut self, operator_kind: TokenKind, operator: &str, right: Expr) -> Expr {
        Expr::Unary {
            operator: self.token(operator_kind, operator),
            right: Box::new(right),
        }
    }

    pub fn binary(&mut self, left: Expr, operator_kind: TokenKind, operator: &str, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator: self.token(operator_kind, operator),
            right: Box::new(right),
        }
    }

    pub fn logical_and(&mut self, left: Expr, right: Expr) -> Expr {
        Expr::Logical {
            left: Box::new(left),
            operator: self.token(TokenKind::And, "and"),
            right: Box::new(right),
        }
    }

    pub fn logical_or(&mut self, left: Expr, right: Expr) -> Expr {
        Expr::Logical {
            left: Box::new(left),
            operator: self.token(TokenKind::Or, "or"),
            right: Box::new(right),
        }
    }

    pub fn call(&mut self, callee: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            paren: self.token(TokenKind::RightParen, ")"),
            arguments,
        }
    }

    /// A variable read of `name`, with a fresh node id.
    pub fn variable(&mut self, name: &str) -> Expr {
        Expr::Variable {
            id: self.next_id(),
            name: self.ident(name),
        }
    }

    /// An assignment `name = value`, with a fresh node id.
    pub fn assign(&mut self, name: &str, value: Expr) -> Expr {
        Expr::Assign {
            id: self.next_id(),
            name: self.ident(name),
            value: Box::new(value),
        }
    }

    pub fn get(&mut self, object: Expr, name: &str) -> Expr {
        Expr::Get {
            object: Box::new(object),
            name: self.ident(name),
        }
    }

    pub fn set(&mut self, object: Expr, name: &str, value: Expr) -> Expr {
        Expr::Set {
            object: Box::new(object),
            name: self.ident(name),
            value: Box::new(value),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn expr_stmt(&self, expr: Expr) -> Stmt {
        Stmt::Expression(expr)
    }

    pub fn print_stmt(&self, expr: Expr) -> Stmt {
        Stmt::Print(expr)
    }

    pub fn var_stmt(&mut self, name: &str, initializer: Option<Expr>) -> Stmt {
        Stmt::Var {
            name: self.ident(name),
            initializer,
        }
    }

    pub fn block(&self, statements: Vec<Stmt>) -> Stmt {
        Stmt::Block(statements)
    }

    pub fn if_stmt(&self, condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_stmt(&self, condition: Expr, body: Stmt) -> Stmt {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn function(&mut self, name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
        let name = self.ident(name);
        let params = params.iter().map(|p| self.ident(p)).collect();
        Stmt::Function(FunctionDecl { name, params, body })
    }

    pub fn return_stmt(&mut self, value: Option<Expr>) -> Stmt {
        Stmt::Return {
            keyword: self.token(TokenKind::Return, "return"),
            value,
        }
    }

    pub fn class_stmt(&mut self, name: &str) -> Stmt {
        Stmt::Class {
            name: self.ident(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique_and_increasing() {
        let mut b = NodeBuilder::new();
        let a = b.variable("a");
        let c = b.assign("c", Expr::Literal(LiteralValue::Nil));
        assert_eq!(a.node_id(), Some(NodeId(0)));
        assert_eq!(c.node_id(), Some(NodeId(1)));
        assert_eq!(b.node_count(), 2);
    }

    #[test]
    fn token_spans_do_not_overlap() {
        let mut b = NodeBuilder::new();
        let first = b.ident("alpha");
        let second = b.ident("beta");
        assert!(second.span.start > first.span.end());
    }

    #[test]
    fn non_reference_nodes_have_no_id() {
        let b = NodeBuilder::new();
        let lit = b.number(1.0);
        assert_eq!(lit.node_id(), None);
        assert_eq!(b.node_count(), 0);
    }
}
