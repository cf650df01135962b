//! Reportability rules for matched exception-expectation shapes.

pub mod one_expected_checked_exception;
pub mod one_expected_runtime_exception;

pub use one_expected_checked_exception::OneExpectedCheckedExceptionRule;
pub use one_expected_runtime_exception::OneExpectedRuntimeExceptionRule;

use crate::semantic::JavaType;
use crate::tree::Span;
use crate::{Diagnostic, RuleId};

use super::engine::Region;

/// Extension point: given the expected exception type(s), the guarded
/// region, the reporting anchor and a human label for that region, decide
/// whether and how to report. The engine never decides severity or final
/// message text; that policy lives here.
pub trait GuardedRegionRule {
    /// Id of the rule, as used in config files
    fn id(&self) -> RuleId;

    /// Inspect one matched guarded region, appending diagnostics if the
    /// region should be reported
    fn inspect(
        &self,
        expected: &[JavaType],
        region: Region<'_>,
        anchor: Span,
        label: &str,
        diagnostics: &mut Vec<Diagnostic>,
    );
}
