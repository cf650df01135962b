//! Rule: only one statement in a guarded region should be able to throw
//! the expected checked exception.

use crate::analyzer::collector::InvocationCollector;
use crate::analyzer::engine::{is_checked, secondary_locations, Region};
use crate::semantic::{JavaType, MethodSymbol};
use crate::tree::Span;
use crate::{Diagnostic, RuleId, Severity};

use super::GuardedRegionRule;

/// Checked exceptions must be declared, so the collect predicate keeps a
/// call site when its declared throws list intersects the expected set.
pub struct OneExpectedCheckedExceptionRule;

impl OneExpectedCheckedExceptionRule {
    fn throws_expected(symbol: &MethodSymbol, checked: &[&JavaType]) -> bool {
        if symbol.is_unknown() {
            return false;
        }
        symbol.thrown_types.iter().any(|thrown| {
            checked.iter().any(|expected| {
                thrown.is_subtype_of(expected.name()) || expected.is_subtype_of(thrown.name())
            })
        })
    }
}

impl GuardedRegionRule for OneExpectedCheckedExceptionRule {
    fn id(&self) -> RuleId {
        RuleId::OneExpectedCheckedException
    }

    fn inspect(
        &self,
        expected: &[JavaType],
        region: Region<'_>,
        anchor: Span,
        label: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let checked: Vec<&JavaType> = expected.iter().filter(|t| is_checked(t)).collect();
        if checked.is_empty() {
            return;
        }

        let candidates = InvocationCollector::new(|symbol: &MethodSymbol| {
            Self::throws_expected(symbol, &checked)
        })
        .collect(region);

        if candidates.len() > 1 {
            diagnostics.push(Diagnostic {
                rule: self.id(),
                severity: Severity::Warning,
                message: format!(
                    "Refactor the {label} to have only one invocation throwing an exception."
                ),
                location: anchor.into(),
                secondary: secondary_locations(&candidates),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Block, Expr, ExprStmt, IdentifierExpr, MethodInvocationExpr, Stmt};

    fn io_exception() -> JavaType {
        JavaType::new("java.io.IOException")
            .with_supertypes(["java.lang.Exception", "java.lang.Throwable"])
    }

    fn throwing_call(name: &str, thrown: JavaType) -> Stmt {
        Stmt::Expression(ExprStmt {
            expr: Expr::MethodInvocation(MethodInvocationExpr {
                qualifier: None,
                name: IdentifierExpr::new(name, Span::new(1, 1)),
                arguments: vec![],
                symbol: MethodSymbol::new("com.example.Service", name)
                    .with_thrown_types([thrown]),
                span: Span::new(1, 1),
            }),
            span: Span::new(1, 1),
        })
    }

    fn run_rule(block: &Block, expected: Vec<JavaType>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        OneExpectedCheckedExceptionRule.inspect(
            &expected,
            Region::Block(block),
            Span::new(1, 1),
            "body of this try/catch",
            &mut diagnostics,
        );
        diagnostics
    }

    #[test]
    fn two_throwing_calls_are_reported() {
        let block = Block {
            statements: vec![
                throwing_call("a", io_exception()),
                throwing_call("b", io_exception()),
            ],
            span: Span::new(1, 1),
        };
        let diagnostics = run_rule(&block, vec![io_exception()]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, RuleId::OneExpectedCheckedException);
        assert_eq!(diagnostics[0].secondary.len(), 2);
        assert!(diagnostics[0].message.contains("body of this try/catch"));
    }

    #[test]
    fn single_throwing_call_is_fine() {
        let block = Block {
            statements: vec![throwing_call("a", io_exception())],
            span: Span::new(1, 1),
        };
        assert!(run_rule(&block, vec![io_exception()]).is_empty());
    }

    #[test]
    fn unchecked_expectation_is_ignored() {
        let runtime = JavaType::new("java.lang.IllegalStateException").with_supertypes([
            "java.lang.RuntimeException",
            "java.lang.Exception",
            "java.lang.Throwable",
        ]);
        let block = Block {
            statements: vec![
                throwing_call("a", runtime.clone()),
                throwing_call("b", runtime.clone()),
            ],
            span: Span::new(1, 1),
        };
        assert!(run_rule(&block, vec![runtime]).is_empty());
    }

    #[test]
    fn declared_subtype_of_expected_counts() {
        let file_not_found = JavaType::new("java.io.FileNotFoundException").with_supertypes([
            "java.io.IOException",
            "java.lang.Exception",
            "java.lang.Throwable",
        ]);
        let block = Block {
            statements: vec![
                throwing_call("open", file_not_found),
                throwing_call("read", io_exception()),
            ],
            span: Span::new(1, 1),
        };
        let diagnostics = run_rule(&block, vec![io_exception()]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn declared_supertype_of_expected_counts() {
        // declared `throws Exception` may raise an IOException at runtime
        let exception = JavaType::new("java.lang.Exception").with_supertypes(["java.lang.Throwable"]);
        let block = Block {
            statements: vec![
                throwing_call("a", exception),
                throwing_call("b", io_exception()),
            ],
            span: Span::new(1, 1),
        };
        assert_eq!(run_rule(&block, vec![io_exception()]).len(), 1);
    }

    #[test]
    fn unrelated_throws_clause_is_not_a_candidate() {
        let sql = JavaType::new("java.sql.SQLException")
            .with_supertypes(["java.lang.Exception", "java.lang.Throwable"]);
        let block = Block {
            statements: vec![
                throwing_call("query", sql),
                throwing_call("read", io_exception()),
            ],
            span: Span::new(1, 1),
        };
        // only one IOException-compatible call site
        assert!(run_rule(&block, vec![io_exception()]).is_empty());
    }
}
