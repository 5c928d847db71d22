//! Compile a single-variable math expression once, evaluate it many times.
//!
//! The pipeline is string → [`tokenize`] → [`to_postfix`] → [`build`] → [`Ast`],
//! and [`evaluate`] walks the tree. [`CompiledExpr`] bundles the tree with its
//! free variable and offers a [`Scan`] over an [`Interval`] for plotting.
//!
//! ```
//! use fnplot::{compile, EvalError, Interval};
//!
//! let f = compile("x <= 0 ? 0 : 1/x").unwrap();
//! assert_eq!(f.eval(-1.0), Ok(0.0));
//! assert_eq!(compile("1/x").unwrap().eval(0.0), Err(EvalError::DivisionByZero));
//!
//! let range: Interval = "[-2;2]".parse().unwrap();
//! let drawn = f.scan(range, 1.0).unwrap().filter(|s| s.y.is_ok()).count();
//! assert_eq!(drawn, 5);
//! ```
mod ast;
mod bindings;
mod collect;
mod engine;
mod error;
mod eval;
mod lexer;
#[cfg(feature = "optimize")]
mod optimizer;
mod parser;
mod postfix;
mod scan;

pub use ast::{Ast, BinOp, CmpOp, UnaryOp};
pub use bindings::Bindings;
pub use collect::collect_vars;
pub use engine::{CompiledExpr, compile};
pub use error::{CompileError, ConvertError, EvalError, IntervalError, LexError, ParseError};
pub use eval::{Builtin, EPSILON, evaluate, truthy};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{MAX_DEPTH, build, parse};
pub use postfix::{Split, mark_unary, precedence, split_conditional, to_postfix};
pub use scan::{Interval, MAX_SAMPLES, Sample, Scan};
