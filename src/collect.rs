use crate::ast::Ast;
use std::collections::HashSet;

/// Variable names in left-to-right first-appearance order.
pub fn collect_vars(ast: &Ast) -> Vec<String> {
    fn walk(node: &Ast, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        match node {
            Ast::Num(_) => {}
            Ast::Var(name) => {
                if seen.insert(name.clone()) {
                    out.push(name.clone());
                }
            }
            Ast::Unary(_, a) => walk(a, seen, out),
            Ast::Binary(_, a, b) | Ast::Compare(_, a, b) => {
                walk(a, seen, out);
                walk(b, seen, out);
            }
            Ast::If(c, t, e) => {
                walk(c, seen, out);
                walk(t, seen, out);
                walk(e, seen, out);
            }
            Ast::Call { args, .. } => {
                for a in args {
                    walk(a, seen, out);
                }
            }
        }
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(ast, &mut seen, &mut out);
    out
}

/// The single free variable of a parsed tree, if any.
pub(crate) fn free_variable(ast: &Ast) -> Option<String> {
    collect_vars(ast).into_iter().next()
}
