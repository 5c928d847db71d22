use thiserror::Error;

/// Tokenizer failures. `pos` is the character offset in the source string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("multiple variables: '{first}' and '{second}' (only one free variable is allowed)")]
    MultipleVariables { first: String, second: String },
}

/// Infix-to-postfix failures. Only the conditional `?:` structure is validated here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("nested conditional expressions are not supported ('?' at position {pos})")]
    NestedConditional { pos: usize },
    #[error("':' at position {pos} has no matching '?'")]
    ColonWithoutQuestion { pos: usize },
    #[error("conditional '?' at position {pos} is missing its ':'")]
    MissingColon { pos: usize },
    #[error("conditional part next to position {pos} is empty")]
    EmptyBranch { pos: usize },
    #[error("conditional part next to position {pos} does not form a single value")]
    MalformedBranch { pos: usize },
    #[error("unexpected token '{text}' at position {pos}")]
    UnexpectedToken { text: String, pos: usize },
}

/// AST builder failures. `index` is the position in the postfix sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("insufficient operands for '{token}' at postfix index {index}")]
    Underflow { token: String, index: usize },
    #[error("malformed expression: expected 1 result, got {remaining}")]
    Leftover { remaining: usize },
    #[error("invalid number '{text}' at postfix index {index}")]
    InvalidNumber { text: String, index: usize },
    #[error("unexpected token '{token}' at postfix index {index}")]
    UnexpectedToken { token: String, index: usize },
    #[error("expression nests deeper than {limit} levels at postfix index {index}")]
    TooDeep { limit: usize, index: usize },
}

/// Any failure while turning source text into a tree, tagged with its stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("convert error: {0}")]
    Convert(#[from] ConvertError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Per-evaluation failures. These never abort a scan; see [`crate::Sample`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative number: {0}")]
    NegativeSqrt(f64),
    #[error("logarithm of non-positive number: {0}")]
    NonPositiveLog(f64),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("function {name} expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntervalError {
    #[error("interval must look like \"[from;to]\", got \"{0}\"")]
    Syntax(String),
    #[error("invalid interval bound \"{0}\"")]
    Bound(String),
    #[error("interval start {from} is greater than its end {to}")]
    Reversed { from: f64, to: f64 },
    #[error("scan step must be finite and positive, got {0}")]
    Step(f64),
    #[error("scan of width {width} with step {step} exceeds {limit} samples")]
    TooManySamples { width: f64, step: f64, limit: usize },
}
