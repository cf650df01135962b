//! Typed Java AST consumed by the analyzer.
//!
//! The host parser and type resolver construct and own these nodes; the
//! analyzer only borrows them for the duration of a single pass and never
//! mutates them. Symbol and type information is already resolved (see
//! [`crate::semantic`]); this crate performs no parsing or inference.

pub mod visit;

use crate::semantic::{JavaType, MethodSymbol};

/// Source range of a node (1-indexed lines and columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            end_line: line,
            end_column: column,
        }
    }

    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }
}

/// A single analyzed source file: its top-level type declarations
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub classes: Vec<ClassDecl>,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ClassMember {
    Method(MethodDecl),
    NestedClass(ClassDecl),
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    /// None for abstract/native methods
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExprStmt),
    LocalVariable(LocalVarStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Throw(ThrowStmt),
    Block(Block),
    Try(TryStmt),
    /// A class declared inside a method body
    LocalClass(ClassDecl),
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct LocalVarStmt {
    pub name: String,
    pub type_name: String,
    pub initializer: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ThrowStmt {
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TryStmt {
    pub block: Block,
    pub catches: Vec<CatchClause>,
    pub finally_block: Option<Block>,
    /// Span of the `try` keyword itself, used as a reporting anchor
    pub try_span: Span,
    pub span: Span,
}

/// One catch clause. Multi-catch (`catch (A | B e)`) is modeled by the
/// host as one clause per alternative, preserving source order.
#[derive(Debug, Clone)]
pub struct CatchClause {
    pub parameter: String,
    pub exception_type: JavaType,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Expr {
    MethodInvocation(MethodInvocationExpr),
    NewClass(NewClassExpr),
    MemberSelect(MemberSelectExpr),
    Identifier(IdentifierExpr),
    Lambda(LambdaExpr),
    Literal(LiteralExpr),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::MethodInvocation(e) => e.span,
            Expr::NewClass(e) => e.span,
            Expr::MemberSelect(e) => e.span,
            Expr::Identifier(e) => e.span,
            Expr::Lambda(e) => e.span,
            Expr::Literal(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Assignment(e) => e.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MethodInvocationExpr {
    /// Receiver expression for qualified calls (`Assert.fail()`), None for
    /// unqualified ones (`fail()`)
    pub qualifier: Option<Box<Expr>>,
    /// The method name identifier (the reporting anchor for this call)
    pub name: IdentifierExpr,
    pub arguments: Vec<Expr>,
    /// Resolved call target
    pub symbol: MethodSymbol,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NewClassExpr {
    /// The class name identifier after `new`
    pub class_name: IdentifierExpr,
    pub arguments: Vec<Expr>,
    /// Resolved constructor
    pub constructor: MethodSymbol,
    /// Anonymous class body, when present (`new Runnable() { ... }`)
    pub body: Option<ClassDecl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MemberSelectExpr {
    pub expression: Box<Expr>,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    /// Resolved type when this identifier denotes a type (`IOException` in
    /// `IOException.class`); None for value identifiers
    pub resolved_type: Option<JavaType>,
    pub span: Span,
}

impl IdentifierExpr {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            resolved_type: None,
            span,
        }
    }

    pub fn with_resolved_type(mut self, resolved_type: JavaType) -> Self {
        self.resolved_type = Some(resolved_type);
        self
    }
}

#[derive(Debug, Clone)]
pub struct LambdaExpr {
    pub parameters: Vec<String>,
    pub body: LambdaBody,
    pub span: Span,
}

/// A Java lambda body is either a single expression or a block
#[derive(Debug, Clone)]
pub enum LambdaBody {
    Expression(Box<Expr>),
    Block(Block),
}

#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
    pub span: Span,
}
