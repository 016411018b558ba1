//! sable_core: Shared primitives for the Sable interpreter.
//!
//! Currently just source-text location tracking; everything that needs to
//! point back into source code goes through [`text::TextSpan`].

pub mod text;
