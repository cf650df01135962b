//! Core engine: recognizes the two exception-expectation shapes and hands
//! the guarded region to the registered rules.
//!
//! Two syntactic shapes are matched:
//! - a try/catch whose try block's last statement is an unconditional
//!   `fail()` call ("do the risky thing, then assert we never get here");
//! - an `assertThrows` call whose executable argument is a lambda.
//!
//! Everything else is a silent non-match. Extraction is deliberately
//! conservative: only the `SomeException.class` literal form is resolved,
//! and opaque executables (method references, variables) are not analyzed,
//! since their bodies are not visible at the call site.

use crate::semantic::{JavaType, ERROR, RUNTIME_EXCEPTION};
use crate::tree::visit::{walk_method_invocation, walk_try, Visit};
use crate::tree::{
    Block, CompilationUnit, Expr, IdentifierExpr, LambdaBody, MethodInvocationExpr, Span, Stmt,
    TryStmt,
};
use crate::{Diagnostic, SecondaryLocation};

use super::matchers::{ALL_ASSERT_THROWS, ASSERT_THROWS_WITH_MESSAGE, UNCONDITIONAL_FAIL};
use super::rules::GuardedRegionRule;

/// The code whose call sites must be enumerated: a try block body or a
/// lambda body. Borrowed from the host-owned tree.
#[derive(Debug, Clone, Copy)]
pub enum Region<'t> {
    Block(&'t Block),
    Expr(&'t Expr),
}

impl<'t> Region<'t> {
    fn from_lambda_body(body: &'t LambdaBody) -> Self {
        match body {
            LambdaBody::Expression(expr) => Region::Expr(expr),
            LambdaBody::Block(block) => Region::Block(block),
        }
    }
}

/// Per-file visitor dispatching matched shapes to the rules. Stateless
/// across nodes: each try statement and each method invocation is
/// classified independently.
pub struct ExceptionExpectationVisitor<'r> {
    rules: &'r [Box<dyn GuardedRegionRule>],
    diagnostics: Vec<Diagnostic>,
}

impl<'r> ExceptionExpectationVisitor<'r> {
    pub fn new(rules: &'r [Box<dyn GuardedRegionRule>]) -> Self {
        Self {
            rules,
            diagnostics: Vec::new(),
        }
    }

    pub fn scan(mut self, unit: &CompilationUnit) -> Vec<Diagnostic> {
        for class in &unit.classes {
            self.visit_class(class);
        }
        self.diagnostics
    }

    fn dispatch(&mut self, expected: &[JavaType], region: Region<'_>, anchor: Span, label: &str) {
        for rule in self.rules {
            rule.inspect(expected, region, anchor, label, &mut self.diagnostics);
        }
    }

    fn process_assert_throws(
        &mut self,
        name: &IdentifierExpr,
        expected_type: &Expr,
        executable: &Expr,
    ) {
        let Expr::Lambda(lambda) = executable else {
            return;
        };
        if let Some(expected) = expected_exception(expected_type) {
            let region = Region::from_lambda_body(&lambda.body);
            self.dispatch(&[expected], region, name.span, "code of this assertThrows");
        }
    }
}

impl<'r, 't> Visit<'t> for ExceptionExpectationVisitor<'r> {
    fn visit_try(&mut self, try_stmt: &'t TryStmt) {
        if is_try_catch_fail(try_stmt) {
            let expected: Vec<JavaType> = try_stmt
                .catches
                .iter()
                .map(|c| c.exception_type.clone())
                .collect();
            self.dispatch(
                &expected,
                Region::Block(&try_stmt.block),
                try_stmt.try_span,
                "body of this try/catch",
            );
        }
        walk_try(self, try_stmt);
    }

    fn visit_method_invocation(&mut self, invocation: &'t MethodInvocationExpr) {
        let arguments = &invocation.arguments;
        if ASSERT_THROWS_WITH_MESSAGE.matches(&invocation.symbol) && arguments.len() == 3 {
            self.process_assert_throws(&invocation.name, &arguments[1], &arguments[2]);
        } else if arguments.len() >= 2 && ALL_ASSERT_THROWS.matches(&invocation.symbol) {
            self.process_assert_throws(&invocation.name, &arguments[0], &arguments[1]);
        }
        walk_method_invocation(self, invocation);
    }
}

/// Extract the expected exception type from a `SomeException.class`
/// member-select off a simple identifier. Any other expression form
/// yields None and no analysis happens for that call.
fn expected_exception(expected_type: &Expr) -> Option<JavaType> {
    let Expr::MemberSelect(select) = expected_type else {
        return None;
    };
    if select.name != "class" {
        return None;
    }
    match select.expression.as_ref() {
        Expr::Identifier(identifier) => identifier.resolved_type.clone(),
        _ => None,
    }
}

/// True when the try block's last statement is an expression statement
/// invoking one of the unconditional-failure helpers.
fn is_try_catch_fail(try_stmt: &TryStmt) -> bool {
    match try_stmt.block.statements.last() {
        Some(Stmt::Expression(expr_stmt)) => match &expr_stmt.expr {
            Expr::MethodInvocation(invocation) => UNCONDITIONAL_FAIL.matches(&invocation.symbol),
            _ => false,
        },
        _ => false,
    }
}

/// True unless the type is in the unchecked-exception or error hierarchies
pub fn is_checked(exception_type: &JavaType) -> bool {
    !exception_type.is_subtype_of(RUNTIME_EXCEPTION) && !exception_type.is_subtype_of(ERROR)
}

/// Pair each candidate call site with a fixed explanatory label
pub fn secondary_locations(invocations: &[&IdentifierExpr]) -> Vec<SecondaryLocation> {
    invocations
        .iter()
        .map(|identifier| SecondaryLocation {
            message: "Throws an exception".to_string(),
            location: identifier.span.into(),
        })
        .collect()
}
