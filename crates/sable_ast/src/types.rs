//! Identifier types shared across the AST.

/// Unique, stable identifier for an AST node, assigned at construction time.
///
/// Only variable reference and assignment nodes need one: the resolver keys
/// its hop-count side table on them instead of relying on node address
/// identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);
