//! Rule: only one statement in a guarded region should be able to throw
//! the expected runtime exception.

use crate::analyzer::collector::InvocationCollector;
use crate::analyzer::engine::{is_checked, secondary_locations, Region};
use crate::semantic::{JavaType, MethodSymbol};
use crate::tree::Span;
use crate::{Diagnostic, RuleId, Severity};

use super::GuardedRegionRule;

/// Unchecked exceptions carry no `throws` declaration, so every resolved
/// call target inside the region is a potential source. The source of an
/// unchecked exception is usually unambiguous from the stack trace, hence
/// the lower default severity.
pub struct OneExpectedRuntimeExceptionRule;

impl GuardedRegionRule for OneExpectedRuntimeExceptionRule {
    fn id(&self) -> RuleId {
        RuleId::OneExpectedRuntimeException
    }

    fn inspect(
        &self,
        expected: &[JavaType],
        region: Region<'_>,
        anchor: Span,
        label: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if expected.iter().all(|t| is_checked(t)) {
            return;
        }

        let candidates =
            InvocationCollector::new(|symbol: &MethodSymbol| !symbol.is_unknown()).collect(region);

        if candidates.len() > 1 {
            diagnostics.push(Diagnostic {
                rule: self.id(),
                severity: Severity::Info,
                message: format!(
                    "Refactor the {label} to have only one invocation throwing an exception."
                ),
                location: anchor.into(),
                secondary: secondary_locations(&candidates),
            });
        }
    }
}
