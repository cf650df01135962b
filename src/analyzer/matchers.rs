//! Declarative method-signature matching.
//!
//! Each matcher is a table of (declaring-type names, method names,
//! parameter shape) checked against the resolved call target. Matching is
//! an exact-signature contract, not name-only: overloads are told apart by
//! parameter arity and types.

use crate::semantic::{
    MethodSymbol, ASSERTJ_FAIL, JAVA_LANG_STRING, JUNIT3_ASSERT, JUNIT4_ASSERT, JUNIT5_ASSERTIONS,
};

#[derive(Debug, Clone, Copy)]
pub enum ParamMatcher {
    /// Exact fully-qualified type name
    Type(&'static str),
    /// Any single parameter
    Any,
}

#[derive(Debug, Clone, Copy)]
pub enum ParamShape {
    /// Any number and type of parameters
    Any,
    /// Exactly these parameters, position by position
    Exact(&'static [ParamMatcher]),
}

#[derive(Debug, Clone, Copy)]
pub struct MethodMatcher {
    pub owners: &'static [&'static str],
    pub names: &'static [&'static str],
    pub params: ParamShape,
}

impl MethodMatcher {
    pub fn matches(&self, symbol: &MethodSymbol) -> bool {
        if symbol.is_unknown() {
            return false;
        }
        if !self.owners.iter().any(|o| *o == symbol.owner) {
            return false;
        }
        if !self.names.iter().any(|n| *n == symbol.name) {
            return false;
        }
        match self.params {
            ParamShape::Any => true,
            ParamShape::Exact(shape) => {
                shape.len() == symbol.parameter_types.len()
                    && shape
                        .iter()
                        .zip(&symbol.parameter_types)
                        .all(|(matcher, param)| match matcher {
                            ParamMatcher::Any => true,
                            ParamMatcher::Type(name) => param == name,
                        })
            }
        }
    }
}

/// JUnit 4 `assertThrows(String message, Class<T> expected, Executable)`
pub const ASSERT_THROWS_WITH_MESSAGE: MethodMatcher = MethodMatcher {
    owners: &[JUNIT4_ASSERT],
    names: &["assertThrows"],
    params: ParamShape::Exact(&[
        ParamMatcher::Type(JAVA_LANG_STRING),
        ParamMatcher::Any,
        ParamMatcher::Any,
    ]),
};

/// Every `assertThrows` overload of JUnit 4 and JUnit 5
pub const ALL_ASSERT_THROWS: MethodMatcher = MethodMatcher {
    owners: &[JUNIT4_ASSERT, JUNIT5_ASSERTIONS],
    names: &["assertThrows"],
    params: ParamShape::Any,
};

/// The unconditional-failure helpers that mark a try/catch as an
/// exception expectation
pub const UNCONDITIONAL_FAIL: MethodMatcher = MethodMatcher {
    owners: &[JUNIT4_ASSERT, JUNIT5_ASSERTIONS, JUNIT3_ASSERT, ASSERTJ_FAIL],
    names: &["fail"],
    params: ParamShape::Any,
};
