use crate::ast::Ast;
use crate::eval::{evaluate, truthy};

// Folds variable-free subtrees bottom-up. A subtree whose evaluation fails
// (1/0, sqrt(-1), unknown function) is kept as is so the error still
// surfaces at evaluation time.
pub(crate) fn optimize(ast: Ast) -> Ast {
    match ast {
        Ast::Num(_) | Ast::Var(_) => ast,
        Ast::Unary(op, x) => try_fold(Ast::Unary(op, Box::new(optimize(*x)))),
        Ast::Binary(op, a, b) => try_fold(Ast::Binary(
            op,
            Box::new(optimize(*a)),
            Box::new(optimize(*b)),
        )),
        Ast::Compare(op, a, b) => try_fold(Ast::Compare(
            op,
            Box::new(optimize(*a)),
            Box::new(optimize(*b)),
        )),
        Ast::If(c, t, e) => match optimize(*c) {
            // only the selected branch survives
            Ast::Num(v) if truthy(v) => optimize(*t),
            Ast::Num(_) => optimize(*e),
            c => Ast::If(Box::new(c), Box::new(optimize(*t)), Box::new(optimize(*e))),
        },
        Ast::Call { name, args } => {
            let args = args.into_iter().map(optimize).collect();
            try_fold(Ast::Call { name, args })
        }
    }
}

fn try_fold(node: Ast) -> Ast {
    let children_const = match &node {
        Ast::Unary(_, x) => x.is_const(),
        Ast::Binary(_, a, b) | Ast::Compare(_, a, b) => a.is_const() && b.is_const(),
        Ast::Call { args, .. } => args.iter().all(Ast::is_const),
        _ => false,
    };
    if !children_const {
        return node;
    }
    match evaluate(&node, &()) {
        Ok(v) => Ast::Num(v),
        Err(_) => node,
    }
}
