//! Analysis driver: rule registry and per-unit orchestration.

pub mod collector;
pub mod engine;
pub mod matchers;
pub mod rules;

pub use engine::{is_checked, secondary_locations, Region};
pub use rules::GuardedRegionRule;

use thiserror::Error;

use crate::config::{Config, RuleSeverity};
use crate::tree::CompilationUnit;
use crate::{Diagnostic, RuleId};

use engine::ExceptionExpectationVisitor;
use rules::{OneExpectedCheckedExceptionRule, OneExpectedRuntimeExceptionRule};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown rule id in config: {0}")]
    UnknownRule(String),
}

/// Owns the registered rules and drives the engine over compilation units.
/// A fresh visitor is built per unit, so analyses never share state.
pub struct Analyzer {
    rules: Vec<Box<dyn GuardedRegionRule>>,
    config: Option<Config>,
}

impl Analyzer {
    /// Analyzer with the full default rule set
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            config: None,
        }
    }

    /// Analyzer with an explicit rule set (e.g. host-defined variants)
    pub fn with_rules(rules: Vec<Box<dyn GuardedRegionRule>>) -> Self {
        Self {
            rules,
            config: None,
        }
    }

    /// Analyzer configured from a loaded config: every configured rule id
    /// must name a shipped rule; rules set to `off` are not registered.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut disabled = Vec::new();
        for (id, severity) in &config.rules {
            let Some(rule_id) = RuleId::parse(id) else {
                return Err(RegistryError::UnknownRule(id.clone()));
            };
            if *severity == RuleSeverity::Off {
                disabled.push(rule_id);
            }
        }

        let rules = default_rules()
            .into_iter()
            .filter(|rule| !disabled.contains(&rule.id()))
            .collect();

        Ok(Self {
            rules,
            config: Some(config.clone()),
        })
    }

    /// Analyze one compilation unit and return the diagnostics found
    pub fn analyze(&self, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let diagnostics = ExceptionExpectationVisitor::new(&self.rules).scan(unit);
        self.apply_config(diagnostics)
    }

    /// Apply severity overrides from config
    fn apply_config(&self, diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
        let Some(config) = &self.config else {
            return diagnostics;
        };

        let mut out = Vec::with_capacity(diagnostics.len());
        for mut diagnostic in diagnostics {
            match config.rules.get(&diagnostic.rule.to_string()) {
                Some(RuleSeverity::Off) => continue,
                Some(rs) => {
                    if let Some(severity) = rs.to_severity() {
                        diagnostic.severity = severity;
                    }
                    out.push(diagnostic);
                }
                None => out.push(diagnostic),
            }
        }
        out
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn default_rules() -> Vec<Box<dyn GuardedRegionRule>> {
    vec![
        Box::new(OneExpectedCheckedExceptionRule),
        Box::new(OneExpectedRuntimeExceptionRule),
    ]
}
