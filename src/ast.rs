use std::fmt;

/// Nodes of an expression tree.
/// Every intermediate value and the final result are f64;
/// comparisons produce true=1.0, false=0.0.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// Numeric literal, with `pi`/`e` already resolved (e.g. 1, 3.14)
    Num(f64),
    /// Reference to the free variable (e.g. x)
    Var(String),
    /// Prefix sign (e.g. -x, +x)
    Unary(UnaryOp, Box<Ast>),
    /// Arithmetic (a + b, a ^ b, ...)
    Binary(BinOp, Box<Ast>, Box<Ast>),
    /// Comparison (a < b, a == b, ...)
    Compare(CmpOp, Box<Ast>, Box<Ast>),
    /// Conditional `cond ? then : else`. Only the selected branch is evaluated.
    If(Box<Ast>, Box<Ast>, Box<Ast>),
    /// Function call name(args..). The parser currently emits exactly one argument.
    Call { name: String, args: Vec<Ast> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
        }
    }
}

impl Ast {
    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Ast::Num(_) | Ast::Var(_) => 1,
            Ast::Unary(_, x) => 1 + x.size(),
            Ast::Binary(_, a, b) | Ast::Compare(_, a, b) => 1 + a.size() + b.size(),
            Ast::If(c, t, e) => 1 + c.size() + t.size() + e.size(),
            Ast::Call { args, .. } => 1 + args.iter().map(Ast::size).sum::<usize>(),
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Ast::Num(_))
    }
}

/// Fully parenthesised infix rendering. Conditionals are printed bare since the
/// grammar only allows one, at the root.
///
/// A tree produced by [`parse`](crate::parse) prints in a form that parses back
/// to the same tree. Folded constants need not: a negative `Num` prints as
/// `(-v)`, which reads back as a negation, and `NaN`/`inf` do not read back.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Num(v) if v.is_sign_negative() && !v.is_nan() => write!(f, "({})", v),
            Ast::Num(v) => write!(f, "{}", v),
            Ast::Var(name) => f.write_str(name),
            Ast::Unary(op, x) => write!(f, "({}{})", op.symbol(), x),
            Ast::Binary(op, a, b) => write!(f, "({} {} {})", a, op.symbol(), b),
            Ast::Compare(op, a, b) => write!(f, "({} {} {})", a, op.symbol(), b),
            Ast::If(c, t, e) => write!(f, "{} ? {} : {}", c, t, e),
            Ast::Call { name, args } => {
                write!(f, "{}(", name)?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", a)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
