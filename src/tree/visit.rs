//! Depth-first traversal over the Java tree.
//!
//! `Visit` hooks default to the matching `walk_*` function, which descends
//! into every child in source order. Implementations override only the
//! hooks they care about; leaving a hook empty prunes that whole subtree
//! while sibling traversal continues.

use super::{
    Block, ClassDecl, ClassMember, Expr, LambdaBody, LambdaExpr, MethodDecl, MethodInvocationExpr,
    NewClassExpr, Stmt, TryStmt,
};

pub trait Visit<'t> {
    fn visit_class(&mut self, class: &'t ClassDecl) {
        walk_class(self, class);
    }

    fn visit_method(&mut self, method: &'t MethodDecl) {
        walk_method(self, method);
    }

    fn visit_block(&mut self, block: &'t Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &'t Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_try(&mut self, try_stmt: &'t TryStmt) {
        walk_try(self, try_stmt);
    }

    fn visit_expr(&mut self, expr: &'t Expr) {
        walk_expr(self, expr);
    }

    fn visit_method_invocation(&mut self, invocation: &'t MethodInvocationExpr) {
        walk_method_invocation(self, invocation);
    }

    fn visit_new_class(&mut self, new_class: &'t NewClassExpr) {
        walk_new_class(self, new_class);
    }

    fn visit_lambda(&mut self, lambda: &'t LambdaExpr) {
        walk_lambda(self, lambda);
    }
}

pub fn walk_class<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, class: &'t ClassDecl) {
    for member in &class.members {
        match member {
            ClassMember::Method(method) => visitor.visit_method(method),
            ClassMember::NestedClass(nested) => visitor.visit_class(nested),
        }
    }
}

pub fn walk_method<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, method: &'t MethodDecl) {
    if let Some(body) = &method.body {
        visitor.visit_block(body);
    }
}

pub fn walk_block<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, block: &'t Block) {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, stmt: &'t Stmt) {
    match stmt {
        Stmt::Expression(expr_stmt) => visitor.visit_expr(&expr_stmt.expr),
        Stmt::LocalVariable(local) => {
            if let Some(initializer) = &local.initializer {
                visitor.visit_expr(initializer);
            }
        }
        Stmt::If(if_stmt) => {
            visitor.visit_expr(&if_stmt.condition);
            visitor.visit_stmt(&if_stmt.then_branch);
            if let Some(else_branch) = &if_stmt.else_branch {
                visitor.visit_stmt(else_branch);
            }
        }
        Stmt::While(while_stmt) => {
            visitor.visit_expr(&while_stmt.condition);
            visitor.visit_stmt(&while_stmt.body);
        }
        Stmt::Return(return_stmt) => {
            if let Some(value) = &return_stmt.value {
                visitor.visit_expr(value);
            }
        }
        Stmt::Throw(throw_stmt) => visitor.visit_expr(&throw_stmt.value),
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::Try(try_stmt) => visitor.visit_try(try_stmt),
        Stmt::LocalClass(class) => visitor.visit_class(class),
    }
}

pub fn walk_try<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, try_stmt: &'t TryStmt) {
    visitor.visit_block(&try_stmt.block);
    for catch in &try_stmt.catches {
        visitor.visit_block(&catch.body);
    }
    if let Some(finally_block) = &try_stmt.finally_block {
        visitor.visit_block(finally_block);
    }
}

pub fn walk_expr<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, expr: &'t Expr) {
    match expr {
        Expr::MethodInvocation(invocation) => visitor.visit_method_invocation(invocation),
        Expr::NewClass(new_class) => visitor.visit_new_class(new_class),
        Expr::MemberSelect(select) => visitor.visit_expr(&select.expression),
        Expr::Identifier(_) | Expr::Literal(_) => {}
        Expr::Lambda(lambda) => visitor.visit_lambda(lambda),
        Expr::Binary(binary) => {
            visitor.visit_expr(&binary.left);
            visitor.visit_expr(&binary.right);
        }
        Expr::Assignment(assignment) => {
            visitor.visit_expr(&assignment.target);
            visitor.visit_expr(&assignment.value);
        }
    }
}

pub fn walk_method_invocation<'t, V: Visit<'t> + ?Sized>(
    visitor: &mut V,
    invocation: &'t MethodInvocationExpr,
) {
    if let Some(qualifier) = &invocation.qualifier {
        visitor.visit_expr(qualifier);
    }
    for argument in &invocation.arguments {
        visitor.visit_expr(argument);
    }
}

pub fn walk_new_class<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, new_class: &'t NewClassExpr) {
    for argument in &new_class.arguments {
        visitor.visit_expr(argument);
    }
    if let Some(body) = &new_class.body {
        visitor.visit_class(body);
    }
}

pub fn walk_lambda<'t, V: Visit<'t> + ?Sized>(visitor: &mut V, lambda: &'t LambdaExpr) {
    match &lambda.body {
        LambdaBody::Expression(expr) => visitor.visit_expr(expr),
        LambdaBody::Block(block) => visitor.visit_block(block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::MethodSymbol;
    use crate::tree::{ExprStmt, IdentifierExpr, Span};

    /// Records invocation names in visit order
    #[derive(Default)]
    struct NameRecorder {
        names: Vec<String>,
    }

    impl<'t> Visit<'t> for NameRecorder {
        fn visit_method_invocation(&mut self, invocation: &'t MethodInvocationExpr) {
            self.names.push(invocation.name.name.clone());
            walk_method_invocation(self, invocation);
        }
    }

    fn call(name: &str, arguments: Vec<Expr>) -> Expr {
        Expr::MethodInvocation(MethodInvocationExpr {
            qualifier: None,
            name: IdentifierExpr::new(name, Span::new(1, 1)),
            arguments,
            symbol: MethodSymbol::new("Test", name),
            span: Span::new(1, 1),
        })
    }

    #[test]
    fn walk_is_pre_order() {
        // outer(inner()) then sibling()
        let block = Block {
            statements: vec![
                Stmt::Expression(ExprStmt {
                    expr: call("outer", vec![call("inner", vec![])]),
                    span: Span::new(1, 1),
                }),
                Stmt::Expression(ExprStmt {
                    expr: call("sibling", vec![]),
                    span: Span::new(2, 1),
                }),
            ],
            span: Span::new(1, 1),
        };

        let mut recorder = NameRecorder::default();
        recorder.visit_block(&block);
        assert_eq!(recorder.names, vec!["outer", "inner", "sibling"]);
    }

    #[test]
    fn walk_visits_catch_handler_bodies() {
        use crate::semantic::JavaType;
        use crate::tree::CatchClause;

        let try_stmt = TryStmt {
            block: Block {
                statements: vec![Stmt::Expression(ExprStmt {
                    expr: call("guarded", vec![]),
                    span: Span::new(1, 1),
                })],
                span: Span::new(1, 1),
            },
            catches: vec![CatchClause {
                parameter: "e".to_string(),
                exception_type: JavaType::new("java.io.IOException"),
                body: Block {
                    statements: vec![Stmt::Expression(ExprStmt {
                        expr: call("recover", vec![]),
                        span: Span::new(2, 1),
                    })],
                    span: Span::new(2, 1),
                },
                span: Span::new(2, 1),
            }],
            finally_block: None,
            try_span: Span::new(1, 1),
            span: Span::new(1, 1),
        };

        let mut recorder = NameRecorder::default();
        recorder.visit_try(&try_stmt);
        assert_eq!(recorder.names, vec!["guarded", "recover"]);
    }

    #[test]
    fn walk_descends_into_lambda_by_default() {
        let lambda = Expr::Lambda(LambdaExpr {
            parameters: vec![],
            body: LambdaBody::Expression(Box::new(call("deferred", vec![]))),
            span: Span::new(1, 1),
        });

        let mut recorder = NameRecorder::default();
        recorder.visit_expr(&lambda);
        assert_eq!(recorder.names, vec!["deferred"]);
    }
}
