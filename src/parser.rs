use crate::ast::Ast;
use crate::error::{CompileError, ParseError};
use crate::lexer::{Token, TokenKind, tokenize};
use crate::postfix::to_postfix;
use std::f64::consts::{E, PI};

/// Tokenizes, converts and builds `input` into a tree.
pub fn parse(input: &str) -> Result<Ast, CompileError> {
    let tokens = tokenize(input)?;
    let postfix = to_postfix(tokens)?;
    Ok(build(&postfix)?)
}

/// Deepest tree [`build`] accepts. Evaluation, printing and dropping all
/// recurse over the tree, so a bound keeps them within the thread's stack.
pub const MAX_DEPTH: usize = 512;

/// Builds a tree from a postfix token sequence using a value stack.
///
/// Every operator checks that enough operands are already on the stack, and
/// exactly one value must remain once the sequence is consumed. Trees deeper
/// than [`MAX_DEPTH`] are rejected.
pub fn build(postfix: &[Token]) -> Result<Ast, ParseError> {
    if postfix.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut stack: Vec<Ast> = Vec::with_capacity(postfix.len());
    // depth of each entry in `stack`
    let mut depths: Vec<usize> = Vec::with_capacity(postfix.len());

    for (index, tok) in postfix.iter().enumerate() {
        let (node, arity) = match tok.kind {
            TokenKind::Number => (Ast::Num(parse_number(&tok.text, index)?), 0),
            TokenKind::Variable => (Ast::Var(tok.text.clone()), 0),
            TokenKind::UnaryOperator(op) => {
                let [x] = pop_n::<1>(&mut stack, tok, index)?;
                (Ast::Unary(op, Box::new(x)), 1)
            }
            TokenKind::Function => {
                let [arg] = pop_n::<1>(&mut stack, tok, index)?;
                let call = Ast::Call {
                    name: tok.text.clone(),
                    args: vec![arg],
                };
                (call, 1)
            }
            TokenKind::Operator(op) => {
                let [l, r] = pop_n::<2>(&mut stack, tok, index)?;
                (Ast::Binary(op, Box::new(l), Box::new(r)), 2)
            }
            TokenKind::Comparison(op) => {
                let [l, r] = pop_n::<2>(&mut stack, tok, index)?;
                (Ast::Compare(op, Box::new(l), Box::new(r)), 2)
            }
            TokenKind::Conditional => {
                let [c, t, e] = pop_n::<3>(&mut stack, tok, index)?;
                (Ast::If(Box::new(c), Box::new(t), Box::new(e)), 3)
            }
            TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Comma
            | TokenKind::QuestionMark
            | TokenKind::Colon => {
                return Err(ParseError::UnexpectedToken {
                    token: tok.text.clone(),
                    index,
                });
            }
        };
        let below = depths.len() - arity;
        let depth = 1 + depths.drain(below..).max().unwrap_or(0);
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                index,
            });
        }
        depths.push(depth);
        stack.push(node);
    }

    match stack.pop() {
        Some(root) if stack.is_empty() => Ok(root),
        _ => Err(ParseError::Leftover {
            remaining: stack.len() + 1,
        }),
    }
}

/// Pops the top `N` operands, returned in source (left-to-right) order.
fn pop_n<const N: usize>(
    stack: &mut Vec<Ast>,
    tok: &Token,
    index: usize,
) -> Result<[Ast; N], ParseError> {
    if stack.len() < N {
        return Err(ParseError::Underflow {
            token: tok.text.clone(),
            index,
        });
    }
    let tail = stack.split_off(stack.len() - N);
    tail.try_into().map_err(|_| ParseError::Underflow {
        token: tok.text.clone(),
        index,
    })
}

fn parse_number(text: &str, index: usize) -> Result<f64, ParseError> {
    if text == "π" || text.eq_ignore_ascii_case("pi") {
        return Ok(PI);
    }
    if text == "ℯ" || text.eq_ignore_ascii_case("e") {
        return Ok(E);
    }
    text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        text: text.to_string(),
        index,
    })
}
