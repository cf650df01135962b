//! Candidate call-site collection inside a guarded region.

use crate::semantic::MethodSymbol;
use crate::tree::visit::{walk_method_invocation, walk_new_class, Visit};
use crate::tree::{ClassDecl, IdentifierExpr, LambdaExpr, MethodInvocationExpr, NewClassExpr};

use super::engine::Region;

/// Collects method-invocation and object-creation name identifiers whose
/// resolved target satisfies the predicate, in pre-order (source order).
///
/// Two subtrees are never entered: nested class declarations (a throw
/// inside a locally declared class is not attributable to the enclosing
/// guarded region) and nested lambdas (their bodies run in a different,
/// possibly deferred, control context). Siblings after a pruned subtree
/// are still visited.
pub struct InvocationCollector<'t, P> {
    predicate: P,
    pub invocations: Vec<&'t IdentifierExpr>,
}

impl<'t, P> InvocationCollector<'t, P>
where
    P: Fn(&MethodSymbol) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            invocations: Vec::new(),
        }
    }

    /// Run the collection over a guarded region and return the candidates
    pub fn collect(mut self, region: Region<'t>) -> Vec<&'t IdentifierExpr> {
        match region {
            Region::Block(block) => self.visit_block(block),
            Region::Expr(expr) => self.visit_expr(expr),
        }
        self.invocations
    }
}

impl<'t, P> Visit<'t> for InvocationCollector<'t, P>
where
    P: Fn(&MethodSymbol) -> bool,
{
    fn visit_method_invocation(&mut self, invocation: &'t MethodInvocationExpr) {
        if (self.predicate)(&invocation.symbol) {
            self.invocations.push(&invocation.name);
        }
        walk_method_invocation(self, invocation);
    }

    fn visit_new_class(&mut self, new_class: &'t NewClassExpr) {
        if (self.predicate)(&new_class.constructor) {
            self.invocations.push(&new_class.class_name);
        }
        walk_new_class(self, new_class);
    }

    fn visit_class(&mut self, _class: &'t ClassDecl) {
        // Skip nested classes
    }

    fn visit_lambda(&mut self, _lambda: &'t LambdaExpr) {
        // Skip nested lambdas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{
        Block, ClassMember, Expr, ExprStmt, LambdaBody, MethodDecl, Span, Stmt,
    };

    fn call(name: &str) -> Expr {
        Expr::MethodInvocation(MethodInvocationExpr {
            qualifier: None,
            name: IdentifierExpr::new(name, Span::new(1, 1)),
            arguments: vec![],
            symbol: MethodSymbol::new("com.example.Service", name),
            span: Span::new(1, 1),
        })
    }

    fn stmt(expr: Expr) -> Stmt {
        Stmt::Expression(ExprStmt {
            expr,
            span: Span::new(1, 1),
        })
    }

    fn block(statements: Vec<Stmt>) -> Block {
        Block {
            statements,
            span: Span::new(1, 1),
        }
    }

    fn collected_names(region_block: &Block) -> Vec<String> {
        InvocationCollector::new(|_| true)
            .collect(Region::Block(region_block))
            .iter()
            .map(|id| id.name.clone())
            .collect()
    }

    #[test]
    fn collects_in_source_order() {
        let body = block(vec![stmt(call("a")), stmt(call("b"))]);
        assert_eq!(collected_names(&body), vec!["a", "b"]);
    }

    #[test]
    fn skips_nested_lambda_but_keeps_siblings() {
        let lambda = Expr::Lambda(LambdaExpr {
            parameters: vec![],
            body: LambdaBody::Expression(Box::new(call("deferred"))),
            span: Span::new(2, 1),
        });
        let body = block(vec![stmt(call("a")), stmt(lambda), stmt(call("b"))]);
        assert_eq!(collected_names(&body), vec!["a", "b"]);
    }

    #[test]
    fn skips_nested_class_but_keeps_siblings() {
        let local_class = Stmt::LocalClass(ClassDecl {
            name: "Local".to_string(),
            members: vec![ClassMember::Method(MethodDecl {
                name: "m".to_string(),
                body: Some(block(vec![stmt(call("hidden"))])),
                span: Span::new(2, 5),
            })],
            span: Span::new(2, 1),
        });
        let body = block(vec![local_class, stmt(call("visible"))]);
        assert_eq!(collected_names(&body), vec!["visible"]);
    }

    #[test]
    fn predicate_filters_targets() {
        let body = block(vec![stmt(call("keep")), stmt(call("drop"))]);
        let names: Vec<String> = InvocationCollector::new(|s: &MethodSymbol| s.name == "keep")
            .collect(Region::Block(&body))
            .iter()
            .map(|id| id.name.clone())
            .collect();
        assert_eq!(names, vec!["keep"]);
    }

    #[test]
    fn collects_constructor_invocations() {
        let new_class = Expr::NewClass(NewClassExpr {
            class_name: IdentifierExpr::new("FileReader", Span::new(1, 5)),
            arguments: vec![],
            constructor: MethodSymbol::new("java.io.FileReader", "<init>"),
            body: None,
            span: Span::new(1, 1),
        });
        let body = block(vec![stmt(new_class)]);
        assert_eq!(collected_names(&body), vec!["FileReader"]);
    }

    #[test]
    fn skips_anonymous_class_body_but_keeps_the_constructor() {
        // new Runnable() { public void run() { hidden(); } }
        let anonymous = Expr::NewClass(NewClassExpr {
            class_name: IdentifierExpr::new("Runnable", Span::new(1, 5)),
            arguments: vec![],
            constructor: MethodSymbol::new("java.lang.Runnable", "<init>"),
            body: Some(ClassDecl {
                name: "Runnable".to_string(),
                members: vec![ClassMember::Method(MethodDecl {
                    name: "run".to_string(),
                    body: Some(block(vec![stmt(call("hidden"))])),
                    span: Span::new(2, 5),
                })],
                span: Span::new(1, 5),
            }),
            span: Span::new(1, 1),
        });
        let body = block(vec![stmt(anonymous), stmt(call("visible"))]);
        assert_eq!(collected_names(&body), vec!["Runnable", "visible"]);
    }
}
