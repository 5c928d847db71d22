use crate::ast::Ast;
use crate::bindings::Bindings;
use crate::collect::free_variable;
use crate::error::{CompileError, EvalError, IntervalError};
use crate::eval::evaluate;
use crate::lexer::tokenize;
#[cfg(feature = "optimize")]
use crate::optimizer::optimize;
use crate::parser::build;
use crate::postfix::to_postfix;
use crate::scan::{Interval, Scan};
use log::{Level, debug, log_enabled};
use std::str::FromStr;

/// Compiles `src` once so it can be evaluated many times.
///
/// ```
/// use fnplot::compile;
/// # fn main() -> Result<(), fnplot::CompileError> {
/// let f = compile("x^2 - 1")?;
/// assert_eq!(f.variable(), Some("x"));
/// assert_eq!(f.eval(3.0).unwrap(), 8.0);
/// # Ok(()) }
/// ```
pub fn compile(src: &str) -> Result<CompiledExpr, CompileError> {
    CompiledExpr::new(src)
}

/// An immutable expression tree plus its free variable.
///
/// Evaluation never mutates the tree, so a `CompiledExpr` can be shared
/// across threads (e.g. behind an `Arc`) and evaluated concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledExpr {
    source: String,
    ast: Ast,
    variable: Option<String>,
}

impl CompiledExpr {
    pub fn new(src: &str) -> Result<Self, CompileError> {
        debug!("compiling `{}`", src);
        let tokens = tokenize(src)?;
        debug!("{} tokens", tokens.len());
        let postfix = to_postfix(tokens)?;
        if log_enabled!(Level::Debug) {
            let rendered: Vec<&str> = postfix.iter().map(|t| t.text.as_str()).collect();
            debug!("postfix: {}", rendered.join(" "));
        }
        let ast = build(&postfix)?;
        #[cfg(feature = "optimize")]
        let ast = optimize(ast);
        debug!("tree: {}", ast);

        let variable = free_variable(&ast);
        Ok(Self {
            source: src.to_string(),
            ast,
            variable,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn into_ast(self) -> Ast {
        self.ast
    }

    /// The free variable, or `None` for a constant expression.
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Evaluates with the free variable bound to `x`. For a constant
    /// expression `x` is ignored.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self.variable.as_deref() {
            Some(name) => evaluate(&self.ast, &(name, x)),
            None => evaluate(&self.ast, &()),
        }
    }

    /// Evaluates against caller-supplied bindings.
    pub fn eval_with<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<f64, EvalError> {
        evaluate(&self.ast, bindings)
    }

    /// Samples the expression over `interval` every `step`.
    pub fn scan(&self, interval: Interval, step: f64) -> Result<Scan<'_>, IntervalError> {
        Scan::new(self, interval, step)
    }
}

impl FromStr for CompiledExpr {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompiledExpr::new(s)
    }
}
