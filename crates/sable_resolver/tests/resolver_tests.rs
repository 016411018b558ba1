//! Resolver integration tests.
//!
//! Programs are built with the nodebuilder (standing in for the parser) and
//! fed through a full resolve pass; tests assert on the hop-count table and
//! the diagnostics that come back.

use sable_ast::{LiteralValue, TokenKind};
use sable_nodebuilder::NodeBuilder;
use sable_resolver::{resolve, ResolveOutput};

/// Diagnostic codes in report order.
fn codes(output: &ResolveOutput) -> Vec<u32> {
    output
        .diagnostics
        .diagnostics()
        .iter()
        .map(|d| d.code)
        .collect()
}

// ============================================================================
// Lexical distance
// ============================================================================

#[test]
fn same_scope_reference_has_zero_hops() {
    let mut b = NodeBuilder::new();
    let read = b.variable("x");
    let read_id = read.node_id().unwrap();
    let decl = b.var_stmt("x", Some(b.number(1.0)));
    let program = vec![b.block(vec![decl, b.print_stmt(read)])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(read_id), Some(0));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn nested_blocks_count_hops() {
    let mut b = NodeBuilder::new();
    let read = b.variable("x");
    let read_id = read.node_id().unwrap();
    let inner = b.block(vec![b.print_stmt(read)]);
    let middle = b.block(vec![inner]);
    let decl = b.var_stmt("x", Some(b.number(1.0)));
    let program = vec![b.block(vec![decl, middle])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(read_id), Some(2));
}

#[test]
fn global_references_are_not_recorded() {
    let mut b = NodeBuilder::new();
    let read = b.variable("g");
    let read_id = read.node_id().unwrap();
    let decl = b.var_stmt("g", Some(b.number(1.0)));
    let program = vec![decl, b.print_stmt(read)];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(read_id), None);
    assert!(output.locals.is_empty());
}

#[test]
fn one_table_entry_per_local_reference() {
    let mut b = NodeBuilder::new();
    let first = b.variable("x");
    let second = b.variable("x");
    let global = b.variable("g");
    let decl = b.var_stmt("x", Some(b.number(1.0)));
    let program = vec![b.block(vec![
        decl,
        b.print_stmt(first),
        b.print_stmt(second),
        b.print_stmt(global),
    ])];

    let output = resolve(&program);
    // Two local reads recorded, the global one not.
    assert_eq!(output.locals.len(), 2);
}

#[test]
fn parameters_resolve_at_zero_hops() {
    let mut b = NodeBuilder::new();
    let read = b.variable("a");
    let read_id = read.node_id().unwrap();
    let program = vec![b.function("f", &["a"], vec![b.print_stmt(read)])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(read_id), Some(0));
}

#[test]
fn recursive_function_resolves_its_own_name() {
    // fun outer() { fun inner() { inner(); } inner(); }
    let mut b = NodeBuilder::new();
    let recursive_read = b.variable("inner");
    let recursive_id = recursive_read.node_id().unwrap();
    let recursive_call = b.call(recursive_read, vec![]);
    let inner = b.function("inner", &[], vec![b.expr_stmt(recursive_call)]);

    let outer_read = b.variable("inner");
    let outer_call = b.call(outer_read, vec![]);
    let program = vec![b.function("outer", &[], vec![inner, b.expr_stmt(outer_call)])];

    let output = resolve(&program);
    // `inner` is declared in outer's body scope; from inside inner's own body
    // that is one hop out.
    assert_eq!(output.locals.depth_of(recursive_id), Some(1));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn assignment_target_gets_a_hop_count() {
    let mut b = NodeBuilder::new();
    let write = b.assign("x", b.number(2.0));
    let write_id = write.node_id().unwrap();
    let decl = b.var_stmt("x", None);
    let program = vec![b.block(vec![decl, b.expr_stmt(write)])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(write_id), Some(0));
}

#[test]
fn if_condition_and_branches_resolve_references() {
    // { var flag = true; var n = 1; if (flag and !(n)) print n; else print flag; }
    let mut b = NodeBuilder::new();
    let cond_flag = b.variable("flag");
    let cond_flag_id = cond_flag.node_id().unwrap();
    let cond_n = b.variable("n");
    let cond_n_id = cond_n.node_id().unwrap();
    let negated = b.unary(TokenKind::Bang, "!", b.grouping(cond_n));
    let condition = b.logical_and(cond_flag, negated);
    let then_n = b.variable("n");
    let then_n_id = then_n.node_id().unwrap();
    let else_flag = b.variable("flag");
    let else_flag_id = else_flag.node_id().unwrap();
    let branch = b.if_stmt(condition, b.print_stmt(then_n), Some(b.print_stmt(else_flag)));
    let decl_flag = b.var_stmt("flag", Some(b.literal(LiteralValue::Boolean(true))));
    let decl_n = b.var_stmt("n", Some(b.number(1.0)));
    let program = vec![b.block(vec![decl_flag, decl_n, branch])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(cond_flag_id), Some(0));
    assert_eq!(output.locals.depth_of(cond_n_id), Some(0));
    assert_eq!(output.locals.depth_of(then_n_id), Some(0));
    assert_eq!(output.locals.depth_of(else_flag_id), Some(0));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn while_condition_and_body_resolve_references() {
    // { var keep = nil; var msg = "tick"; while (keep or msg) { print msg; } }
    let mut b = NodeBuilder::new();
    let cond_keep = b.variable("keep");
    let cond_keep_id = cond_keep.node_id().unwrap();
    let cond_msg = b.variable("msg");
    let cond_msg_id = cond_msg.node_id().unwrap();
    let condition = b.logical_or(cond_keep, cond_msg);
    let body_msg = b.variable("msg");
    let body_msg_id = body_msg.node_id().unwrap();
    let body = b.block(vec![b.print_stmt(body_msg)]);
    let loop_stmt = b.while_stmt(condition, body);
    let decl_keep = b.var_stmt("keep", Some(b.nil()));
    let decl_msg = b.var_stmt("msg", Some(b.string("tick")));
    let program = vec![b.block(vec![decl_keep, decl_msg, loop_stmt])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(cond_keep_id), Some(0));
    assert_eq!(output.locals.depth_of(cond_msg_id), Some(0));
    // The loop body opens one more scope between the read and the binding.
    assert_eq!(output.locals.depth_of(body_msg_id), Some(1));
    assert!(output.diagnostics.is_empty());
}

// ============================================================================
// Self-referential initializers
// ============================================================================

#[test]
fn reading_local_in_its_own_initializer_is_reported() {
    let mut b = NodeBuilder::new();
    let self_read = b.variable("x");
    let decl = b.var_stmt("x", Some(self_read));
    let later_read = b.variable("x");
    let program = vec![b.block(vec![decl, b.print_stmt(later_read)])];

    let output = resolve(&program);
    assert_eq!(codes(&output), vec![5002]);
}

#[test]
fn global_self_initializer_is_legal() {
    // `var x = x;` at top level binds to whatever global `x` was, or fails
    // at runtime; the resolver has nothing to say about it.
    let mut b = NodeBuilder::new();
    let self_read = b.variable("x");
    let program = vec![b.var_stmt("x", Some(self_read))];

    let output = resolve(&program);
    assert!(output.diagnostics.is_empty());
    assert!(output.locals.is_empty());
}

#[test]
fn shadowing_initializer_reading_outer_variable_is_still_reported() {
    // var a = 1; { var a = a; }
    // The inner read sees the half-declared inner `a`, not the outer one.
    let mut b = NodeBuilder::new();
    let outer = b.var_stmt("a", Some(b.number(1.0)));
    let self_read = b.variable("a");
    let inner_decl = b.var_stmt("a", Some(self_read));
    let later_read = b.variable("a");
    let program = vec![outer, b.block(vec![inner_decl, b.print_stmt(later_read)])];

    let output = resolve(&program);
    assert_eq!(codes(&output), vec![5002]);
}

// ============================================================================
// Redeclaration
// ============================================================================

#[test]
fn redeclaration_in_same_scope_is_reported_once_per_extra() {
    let mut b = NodeBuilder::new();
    let mut statements = vec![
        b.var_stmt("x", Some(b.number(1.0))),
        b.var_stmt("x", Some(b.number(2.0))),
        b.var_stmt("x", Some(b.number(3.0))),
    ];
    let read = b.variable("x");
    statements.push(b.print_stmt(read));
    let program = vec![b.block(statements)];

    let output = resolve(&program);
    assert_eq!(codes(&output), vec![5001, 5001]);
}

#[test]
fn shadowing_in_nested_scopes_is_legal() {
    let mut b = NodeBuilder::new();
    let outer_read = b.variable("x");
    let inner_read = b.variable("x");
    let inner_decl = b.var_stmt("x", Some(b.number(2.0)));
    let inner = b.block(vec![inner_decl, b.print_stmt(inner_read)]);
    let outer_decl = b.var_stmt("x", Some(b.number(1.0)));
    let program = vec![b.block(vec![outer_decl, inner, b.print_stmt(outer_read)])];

    let output = resolve(&program);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn resolution_continues_after_redeclaration() {
    // The second declaration overwrites the first; later misuse is still
    // caught.
    let mut b = NodeBuilder::new();
    let first = b.var_stmt("x", Some(b.number(1.0)));
    let self_read = b.variable("x");
    let second = b.var_stmt("x", Some(self_read));
    let later_read = b.variable("x");
    let program = vec![b.block(vec![first, second, b.print_stmt(later_read)])];

    let output = resolve(&program);
    assert_eq!(codes(&output), vec![5001, 5002]);
}

// ============================================================================
// Unused variables
// ============================================================================

#[test]
fn unused_variable_reported_when_block_closes() {
    let mut b = NodeBuilder::new();
    let decl = b.var_stmt("dead", Some(b.number(1.0)));
    let program = vec![b.block(vec![decl])];

    let output = resolve(&program);
    assert_eq!(codes(&output), vec![5004]);
    assert_eq!(
        output.diagnostics.diagnostics()[0].message_text,
        "Unused variables: dead."
    );
}

#[test]
fn unused_names_listed_in_declaration_order() {
    let mut b = NodeBuilder::new();
    let statements = vec![
        b.var_stmt("b", None),
        b.var_stmt("a", None),
        b.var_stmt("c", None),
    ];
    let program = vec![b.block(statements)];

    let output = resolve(&program);
    assert_eq!(
        output.diagnostics.diagnostics()[0].message_text,
        "Unused variables: b, a, c."
    );
}

#[test]
fn read_and_assigned_variables_are_not_flagged() {
    let mut b = NodeBuilder::new();
    let read = b.variable("x");
    let write = b.assign("y", b.number(2.0));
    let decl_x = b.var_stmt("x", Some(b.number(1.0)));
    let decl_y = b.var_stmt("y", None);
    let program = vec![b.block(vec![
        decl_x,
        decl_y,
        b.print_stmt(read),
        b.expr_stmt(write),
    ])];

    let output = resolve(&program);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn unused_parameter_report_points_at_function_name() {
    let mut b = NodeBuilder::new();
    let program = vec![b.function("f", &["unused"], vec![])];

    let output = resolve(&program);
    let diags = output.diagnostics.diagnostics();
    assert_eq!(codes(&output), vec![5004]);
    assert!(diags[0].span.is_some());
    assert_eq!(diags[0].message_text, "Unused variables: unused.");
}

#[test]
fn block_unused_report_has_no_span() {
    let mut b = NodeBuilder::new();
    let decl = b.var_stmt("x", None);
    let program = vec![b.block(vec![decl])];

    let output = resolve(&program);
    assert!(output.diagnostics.diagnostics()[0].span.is_none());
}

#[test]
fn unused_function_name_is_flagged_in_enclosing_block() {
    let mut b = NodeBuilder::new();
    let inner_fn = b.function("helper", &[], vec![]);
    let program = vec![b.block(vec![inner_fn])];

    let output = resolve(&program);
    assert_eq!(
        output.diagnostics.diagnostics()[0].message_text,
        "Unused variables: helper."
    );
}

// ============================================================================
// Return placement
// ============================================================================

#[test]
fn top_level_return_is_reported() {
    let mut b = NodeBuilder::new();
    let program = vec![b.return_stmt(Some(b.number(1.0)))];

    let output = resolve(&program);
    assert_eq!(codes(&output), vec![5003]);
}

#[test]
fn return_inside_function_is_legal() {
    let mut b = NodeBuilder::new();
    let read = b.variable("a");
    let ret = b.return_stmt(Some(read));
    let program = vec![b.function("f", &["a"], vec![ret])];

    let output = resolve(&program);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn function_context_is_restored_after_body() {
    let mut b = NodeBuilder::new();
    let inner_return = b.return_stmt(None);
    let read = b.variable("f");
    let call = b.call(read, vec![]);
    let decl = b.function("f", &[], vec![inner_return]);
    let trailing_return = b.return_stmt(None);
    let program = vec![decl, b.expr_stmt(call), trailing_return];

    let output = resolve(&program);
    // Only the trailing top-level return is an error.
    assert_eq!(codes(&output), vec![5003]);
}

// ============================================================================
// Classes and property expressions
// ============================================================================

#[test]
fn class_declaration_binds_its_name() {
    let mut b = NodeBuilder::new();
    let read = b.variable("Box");
    let read_id = read.node_id().unwrap();
    let call = b.call(read, vec![]);
    let decl = b.class_stmt("Box");
    let program = vec![b.block(vec![decl, b.expr_stmt(call)])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(read_id), Some(0));
    assert!(output.diagnostics.is_empty());
}

#[test]
fn property_access_resolves_the_object_expression() {
    // { class Box {} var box = Box(); box.value = 1; print box.value; }
    let mut b = NodeBuilder::new();
    let class_decl = b.class_stmt("Box");
    let ctor_read = b.variable("Box");
    let ctor_call = b.call(ctor_read, vec![]);
    let var_decl = b.var_stmt("box", Some(ctor_call));
    let set_target = b.variable("box");
    let set_id = set_target.node_id().unwrap();
    let set = b.set(set_target, "value", b.number(1.0));
    let get_target = b.variable("box");
    let get_id = get_target.node_id().unwrap();
    let get = b.get(get_target, "value");
    let program = vec![b.block(vec![
        class_decl,
        var_decl,
        b.expr_stmt(set),
        b.print_stmt(get),
    ])];

    let output = resolve(&program);
    assert_eq!(output.locals.depth_of(set_id), Some(0));
    assert_eq!(output.locals.depth_of(get_id), Some(0));
    assert!(output.diagnostics.is_empty());
}

// ============================================================================
// Whole-pass behavior
// ============================================================================

#[test]
fn errors_do_not_stop_the_pass() {
    let mut b = NodeBuilder::new();
    let top_return = b.return_stmt(None);
    let self_read = b.variable("x");
    let decl_x = b.var_stmt("x", Some(self_read));
    let late_read = b.variable("y");
    let late_id = late_read.node_id().unwrap();
    let decl_y = b.var_stmt("y", Some(b.number(1.0)));
    let program = vec![
        top_return,
        b.block(vec![decl_x, decl_y, b.print_stmt(late_read)]),
    ];

    let output = resolve(&program);
    // Invalid return, self-referential initializer, and the unused `x` are
    // all reported; `y` still resolved fine.
    assert_eq!(codes(&output), vec![5003, 5002, 5004]);
    assert_eq!(output.locals.depth_of(late_id), Some(0));
}
