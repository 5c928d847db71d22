use crate::ast::{Ast, BinOp, CmpOp, UnaryOp};
use crate::bindings::Bindings;
use crate::error::EvalError;

/// Tolerance for `==`/`!=` and for the truthiness of a condition.
pub const EPSILON: f64 = 1e-10;

/// Evaluates `ast` against `bindings`.
///
/// Pure and allocation free on success: the same tree may be evaluated from
/// many threads at once with different bindings. Only the selected branch of a
/// conditional is visited.
pub fn evaluate<B: Bindings + ?Sized>(ast: &Ast, bindings: &B) -> Result<f64, EvalError> {
    match ast {
        Ast::Num(v) => Ok(*v),
        Ast::Var(name) => bindings
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        Ast::Unary(op, x) => {
            let v = evaluate(x, bindings)?;
            Ok(match op {
                UnaryOp::Plus => v,
                UnaryOp::Minus => -v,
            })
        }
        Ast::Binary(op, a, b) => {
            let l = evaluate(a, bindings)?;
            let r = evaluate(b, bindings)?;
            match op {
                BinOp::Add => Ok(l + r),
                BinOp::Sub => Ok(l - r),
                BinOp::Mul => Ok(l * r),
                BinOp::Div if r == 0.0 => Err(EvalError::DivisionByZero),
                BinOp::Div => Ok(l / r),
                BinOp::Pow => Ok(l.powf(r)),
            }
        }
        Ast::Compare(op, a, b) => {
            let l = evaluate(a, bindings)?;
            let r = evaluate(b, bindings)?;
            Ok(bool_to_f64(compare(*op, l, r)))
        }
        Ast::If(c, t, e) => {
            if truthy(evaluate(c, bindings)?) {
                evaluate(t, bindings)
            } else {
                evaluate(e, bindings)
            }
        }
        Ast::Call { name, args } => {
            let func = Builtin::lookup(name).ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
            let [arg] = args.as_slice() else {
                return Err(EvalError::Arity {
                    name: name.clone(),
                    expected: 1,
                    got: args.len(),
                });
            };
            func.apply(evaluate(arg, bindings)?)
        }
    }
}

/// `true` when `|v| > EPSILON`. NaN is false.
#[inline]
pub fn truthy(v: f64) -> bool {
    v.abs() > EPSILON
}

#[inline]
fn bool_to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn compare(op: CmpOp, l: f64, r: f64) -> bool {
    match op {
        CmpOp::Lt => l < r,
        CmpOp::Gt => l > r,
        CmpOp::Le => l <= r,
        CmpOp::Ge => l >= r,
        CmpOp::Eq => (l - r).abs() < EPSILON,
        CmpOp::Ne => !compare(CmpOp::Eq, l, r),
    }
}

/// The fixed set of callable functions. Names match case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Abs,
    Sqrt,
    Log,
}

const BUILTINS: &[(&str, Builtin)] = &[
    ("sin", Builtin::Sin),
    ("cos", Builtin::Cos),
    ("tan", Builtin::Tan),
    ("asin", Builtin::Asin),
    ("acos", Builtin::Acos),
    ("atan", Builtin::Atan),
    ("exp", Builtin::Exp),
    ("abs", Builtin::Abs),
    ("sqrt", Builtin::Sqrt),
    ("log", Builtin::Log),
    ("ln", Builtin::Log),
];

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        BUILTINS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, f)| *f)
    }

    /// Applies the function, rejecting arguments outside its real domain.
    pub fn apply(self, x: f64) -> Result<f64, EvalError> {
        match self {
            Builtin::Sin => Ok(x.sin()),
            Builtin::Cos => Ok(x.cos()),
            Builtin::Tan => Ok(x.tan()),
            Builtin::Asin => Ok(x.asin()),
            Builtin::Acos => Ok(x.acos()),
            Builtin::Atan => Ok(x.atan()),
            Builtin::Exp => Ok(x.exp()),
            Builtin::Abs => Ok(x.abs()),
            Builtin::Sqrt if x < 0.0 => Err(EvalError::NegativeSqrt(x)),
            Builtin::Sqrt => Ok(x.sqrt()),
            Builtin::Log if x <= 0.0 => Err(EvalError::NonPositiveLog(x)),
            Builtin::Log => Ok(x.ln()),
        }
    }
}
