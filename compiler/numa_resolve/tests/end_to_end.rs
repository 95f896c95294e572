//! Whole-file resolution: calls, reporting and re-resolution.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{build, codes, float, int};
use numa_diagnostic::queue::DiagnosticConfig;
use numa_diagnostic::ErrorCode;
use numa_ir::{AstBuilder, BinaryOp, Modifier, StmtId, Type};
use numa_resolve::{init_tracing, resolve_file, CastSite, InternalError, ResolveError};
use pretty_assertions::assert_eq;

/// `int add(int a, int b) { return a + b; }`
fn add_function(b: &mut AstBuilder<'_>) -> StmtId {
    let a = b.ident("a");
    let bb = b.ident("b");
    let sum = b.binary(BinaryOp::Add, a, bb);
    let ret = b.ret(Some(sum));
    let body = b.block([ret]);
    let add = b.function("add", [(Type::INT, "a"), (Type::INT, "b")], Type::INT, body);
    b.item(add)
}

#[test]
fn call_yields_return_type() {
    let (mut fx, call) = build(|b| {
        add_function(b);
        let one = b.int();
        let two = b.int();
        let call = b.call("add", [one, two]);
        let total = b.decl(Type::INT, "total", Some(call));
        b.item(total);
        call
    });
    let res = fx.resolve();

    assert!(!res.had_error(), "{:?}", res.errors);
    assert_eq!(fx.type_of(call), Some(Type::INT));
}

#[test]
fn call_checks_arity_and_arguments() {
    let (mut fx, ()) = build(|b| {
        add_function(b);
        let one = b.int();
        let short = b.call("add", [one]);
        let stmt = b.expr_stmt(short);
        b.item(stmt);

        let one = b.int();
        let text = b.string();
        let wrong = b.call("add", [one, text]);
        let stmt = b.expr_stmt(wrong);
        b.item(stmt);
    });
    let res = fx.resolve();

    assert_eq!(codes(&res), vec![ErrorCode::E2004, ErrorCode::E2005]);
    assert!(matches!(
        res.errors[0],
        ResolveError::Arity {
            expected: 2,
            found: 1,
            ..
        }
    ));
    assert!(matches!(
        res.errors[1],
        ResolveError::NotCastable {
            site: CastSite::Argument(1),
            ..
        }
    ));
}

#[test]
fn callee_must_be_a_function() {
    let (mut fx, ()) = build(|b| {
        let one = b.int();
        let x = b.decl(Type::INT, "x", Some(one));
        b.item(x);
        let call = b.call("x", []);
        let stmt = b.expr_stmt(call);
        b.item(stmt);

        let missing = b.call("missing", []);
        let stmt = b.expr_stmt(missing);
        b.item(stmt);

        let five = b.int();
        let indirect = b.call_expr(five, []);
        let stmt = b.expr_stmt(indirect);
        b.item(stmt);
    });
    let res = fx.resolve();

    assert_eq!(
        codes(&res),
        vec![ErrorCode::E2007, ErrorCode::E2003, ErrorCode::E2007]
    );
}

#[test]
fn function_name_alone_is_rejected() {
    let (mut fx, ()) = build(|b| {
        add_function(b);
        let name = b.ident("add");
        let stmt = b.expr_stmt(name);
        b.item(stmt);
    });
    let res = fx.resolve();

    assert_eq!(codes(&res), vec![ErrorCode::E2008]);
}

#[test]
fn physics_program_resolves_cleanly() {
    let (mut fx, force) = build(|b| {
        let m = b.float();
        let mass = b.decl(float(&[Modifier::Kilogram]), "mass", Some(m));
        let a = b.float();
        let accel = b.decl(float(&[Modifier::MetersPerSecondSquared]), "accel", Some(a));
        let mass_read = b.ident("mass");
        let accel_read = b.ident("accel");
        let product = b.binary(BinaryOp::Mul, mass_read, accel_read);
        let ret = b.ret(Some(product));
        let body = b.block([mass, accel, ret]);
        let force = b.function("force", [], float(&[Modifier::Newton]), body);
        b.item(force);

        let call = b.call("force", []);
        let auto = Type::with_modifiers(numa_ir::BuiltinType::Float, [Modifier::Auto]);
        let f = b.decl(auto, "f", Some(call));
        b.item(f);
        force
    });
    let res = fx.resolve();

    assert!(!res.had_error(), "{:?}", res.errors);
    assert_eq!(fx.root_type(&res, "f"), Some(float(&[Modifier::Newton])));
    assert!(fx.ast.scope_of(force).is_some());
}

#[test]
fn resolution_is_idempotent() {
    let (mut fx, ()) = build(|b| {
        add_function(b);
        let one = b.int();
        let d = b.decl(int(&[Modifier::Meter]), "d", Some(one));
        b.item(d);
        let d = b.ident("d");
        let typo = b.ident("dd");
        let sum = b.binary(BinaryOp::Add, d, typo);
        let stmt = b.expr_stmt(sum);
        b.item(stmt);
        let next = b.next();
        b.item(next);
    });
    let first = fx.resolve();
    let types_after_first: Vec<Option<Type>> = (0..fx.ast.expr_count())
        .map(|i| fx.ast.type_of(numa_ir::ExprId::new(u32::try_from(i).unwrap())).cloned())
        .collect();
    let second = fx.resolve();
    let types_after_second: Vec<Option<Type>> = (0..fx.ast.expr_count())
        .map(|i| fx.ast.type_of(numa_ir::ExprId::new(u32::try_from(i).unwrap())).cloned())
        .collect();

    assert!(first.had_error());
    assert_eq!(first, second);
    assert_eq!(types_after_first, types_after_second);
}

#[test]
fn report_caps_errors() {
    let (mut fx, ()) = build(|b| {
        for name in ["p", "q", "r"] {
            let read = b.ident(name);
            let stmt = b.expr_stmt(read);
            b.item(stmt);
        }
    });
    let res = fx.resolve();
    assert_eq!(res.errors.len(), 3);

    let source = "x".repeat(200);
    let config = DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
        sort: true,
    };
    let report = res.report(&fx.interner, &source, config);
    let report_codes: Vec<ErrorCode> = report.iter().map(|d| d.code).collect();
    assert_eq!(report_codes, vec![ErrorCode::E2003, ErrorCode::E9002]);
    assert_eq!(report[1].notes, vec!["2 further errors were not shown".to_string()]);

    let all = res.report(&fx.interner, &source, DiagnosticConfig::unlimited());
    assert_eq!(all.len(), 3);
    assert_eq!(res.diagnostics(&fx.interner).len(), 3);
}

#[test]
fn function_body_must_be_a_block() {
    let (mut fx, ()) = build(|b| {
        let one = b.int();
        let body = b.expr_stmt(one);
        let func = b.function("broken", [], Type::VOID, body);
        b.item(func);
    });
    let result = resolve_file(&mut fx.ast, &fx.interner);

    assert!(matches!(
        result,
        Err(InternalError::FunctionBodyNotBlock { .. })
    ));
    let diag = result.unwrap_err().to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E9001);
}

#[test]
fn tracing_init_is_repeatable() {
    init_tracing();
    init_tracing();
}
