//! Resolved type and symbol information attached to the tree by the host.
//!
//! Only the results of resolution are modeled: the analyzer needs subtype
//! queries and declared method signatures, never the resolution process.

/// Base of the unchecked-exception hierarchy
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";
/// Base of the error hierarchy (also unchecked)
pub const ERROR: &str = "java.lang.Error";

pub const JUNIT4_ASSERT: &str = "org.junit.Assert";
pub const JUNIT5_ASSERTIONS: &str = "org.junit.jupiter.api.Assertions";
pub const JUNIT3_ASSERT: &str = "junit.framework.Assert";
pub const ASSERTJ_FAIL: &str = "org.assertj.core.api.Fail";

pub const JAVA_LANG_STRING: &str = "java.lang.String";

/// A resolved Java type: fully-qualified name plus the fully-qualified
/// names of all transitive supertypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    name: String,
    supertypes: Vec<String>,
}

impl JavaType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn with_supertypes<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes = supertypes.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reflexive subtype query against a fully-qualified name
    pub fn is_subtype_of(&self, other: &str) -> bool {
        self.name == other || self.supertypes.iter().any(|s| s == other)
    }
}

/// A resolved call target: method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    /// Fully-qualified name of the declaring type
    pub owner: String,
    /// Simple method name (`<init>` for constructors by convention)
    pub name: String,
    /// Fully-qualified parameter type names, in declaration order
    pub parameter_types: Vec<String>,
    /// Types in the declared `throws` clause
    pub thrown_types: Vec<JavaType>,
    known: bool,
}

impl MethodSymbol {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            parameter_types: Vec::new(),
            thrown_types: Vec::new(),
            known: true,
        }
    }

    /// A call target the resolver could not bind (e.g. missing classpath
    /// entry). Matchers and predicates treat it conservatively.
    pub fn unknown() -> Self {
        Self {
            owner: String::new(),
            name: String::new(),
            parameter_types: Vec::new(),
            thrown_types: Vec::new(),
            known: false,
        }
    }

    pub fn with_parameter_types<I, S>(mut self, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types = parameter_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_thrown_types<I>(mut self, thrown_types: I) -> Self
    where
        I: IntoIterator<Item = JavaType>,
    {
        self.thrown_types = thrown_types.into_iter().collect();
        self
    }

    pub fn is_unknown(&self) -> bool {
        !self.known
    }
}
