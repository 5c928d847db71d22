//! Infix to postfix conversion.
//!
//! Two independent passes run in front of a classic shunting-yard machine:
//! [`mark_unary`] reclassifies prefix signs, and [`split_conditional`] cuts a
//! single top-level `c ? a : b` into three sub-streams that are converted on
//! their own and joined by a [`TokenKind::Conditional`] marker.

use crate::ast::{BinOp, UnaryOp};
use crate::error::ConvertError;
use crate::lexer::{Token, TokenKind};

/// Converts an infix token stream to postfix order.
///
/// Parenthesis mismatches and missing operands are not detected here; they
/// surface when the tree is built.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ConvertError> {
    let tokens = mark_unary(tokens);
    match split_conditional(tokens)? {
        Split::Plain(tokens) => shunting_yard(tokens),
        Split::Conditional {
            cond,
            then_branch,
            else_branch,
            marker,
        } => {
            let mut out = Vec::new();
            for part in [cond, then_branch, else_branch] {
                // each part must stand alone, or its operands leak into a neighbour
                let part = shunting_yard(part)?;
                if stack_effect(&part) != Some(1) {
                    return Err(ConvertError::MalformedBranch { pos: marker.pos });
                }
                out.extend(part);
            }
            out.push(marker);
            Ok(out)
        }
    }
}

/// Reclassifies `+`/`-` as prefix signs when they open the stream or follow
/// `(`, `,`, another operator, a comparison, or a ternary marker.
pub fn mark_unary(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        let sign = match tok.kind {
            TokenKind::Operator(BinOp::Add) => Some(UnaryOp::Plus),
            TokenKind::Operator(BinOp::Sub) => Some(UnaryOp::Minus),
            _ => None,
        };
        let prefix_position = match out.last() {
            None => true,
            Some(prev) => matches!(
                prev.kind,
                TokenKind::LeftParen
                    | TokenKind::Comma
                    | TokenKind::Operator(_)
                    | TokenKind::UnaryOperator(_)
                    | TokenKind::Comparison(_)
                    | TokenKind::QuestionMark
                    | TokenKind::Colon
            ),
        };
        match sign {
            Some(op) if prefix_position => out.push(Token::new(
                TokenKind::UnaryOperator(op),
                format!("u{}", op.symbol()),
                tok.pos,
            )),
            _ => out.push(tok),
        }
    }
    out
}

#[derive(Debug, PartialEq)]
pub enum Split {
    Plain(Vec<Token>),
    Conditional {
        cond: Vec<Token>,
        then_branch: Vec<Token>,
        else_branch: Vec<Token>,
        marker: Token,
    },
}

/// Validates and splits a stream holding at most one `?` and one later `:`.
pub fn split_conditional(mut tokens: Vec<Token>) -> Result<Split, ConvertError> {
    let mut question: Option<usize> = None;
    let mut colon: Option<usize> = None;
    for (i, tok) in tokens.iter().enumerate() {
        match tok.kind {
            TokenKind::QuestionMark => {
                if question.is_some() {
                    return Err(ConvertError::NestedConditional { pos: tok.pos });
                }
                question = Some(i);
            }
            TokenKind::Colon => {
                if question.is_none() || colon.is_some() {
                    return Err(ConvertError::ColonWithoutQuestion { pos: tok.pos });
                }
                colon = Some(i);
            }
            _ => {}
        }
    }
    let (q, c) = match (question, colon) {
        (None, _) => return Ok(Split::Plain(tokens)),
        (Some(q), None) => {
            return Err(ConvertError::MissingColon {
                pos: tokens[q].pos,
            });
        }
        (Some(q), Some(c)) => (q, c),
    };
    if q == 0 || c == q + 1 {
        return Err(ConvertError::EmptyBranch { pos: tokens[q].pos });
    }
    if c + 1 == tokens.len() {
        return Err(ConvertError::EmptyBranch { pos: tokens[c].pos });
    }
    let else_branch = tokens.split_off(c + 1);
    let colon_tok = tokens.pop();
    let then_branch = tokens.split_off(q + 1);
    let question_tok = tokens.pop();
    let pos = question_tok.or(colon_tok).map_or(0, |t| t.pos);
    Ok(Split::Conditional {
        cond: tokens,
        then_branch,
        else_branch,
        marker: Token::new(TokenKind::Conditional, "?:", pos),
    })
}

/// Binding strength; higher binds tighter.
pub fn precedence(kind: TokenKind) -> i8 {
    match kind {
        TokenKind::Conditional | TokenKind::QuestionMark | TokenKind::Colon => -1,
        TokenKind::Comparison(_) => 0,
        TokenKind::Operator(BinOp::Add | BinOp::Sub) => 1,
        TokenKind::Operator(BinOp::Mul | BinOp::Div) => 2,
        TokenKind::Operator(BinOp::Pow) => 3,
        TokenKind::UnaryOperator(_) => 4,
        _ => 0,
    }
}

// Prefix signs are right-associative, every binary operator is left-associative.
fn should_pop(top: TokenKind, current: TokenKind) -> bool {
    if matches!(top, TokenKind::LeftParen | TokenKind::Function) {
        return false;
    }
    if matches!(current, TokenKind::UnaryOperator(_)) {
        return precedence(top) > precedence(current);
    }
    precedence(top) >= precedence(current)
}

fn pop_while(stack: &mut Vec<Token>, output: &mut Vec<Token>, pred: impl Fn(&Token) -> bool) {
    while stack.last().is_some_and(&pred) {
        output.extend(stack.pop());
    }
}

/// Net number of values a postfix run leaves behind, or `None` if it would
/// pop an operand it does not have.
fn stack_effect(postfix: &[Token]) -> Option<usize> {
    let mut depth = 0usize;
    for tok in postfix {
        let pops = match tok.kind {
            TokenKind::Number | TokenKind::Variable => 0,
            TokenKind::UnaryOperator(_) | TokenKind::Function => 1,
            TokenKind::Operator(_) | TokenKind::Comparison(_) => 2,
            _ => return None,
        };
        depth = depth.checked_sub(pops)? + 1;
    }
    Some(depth)
}

fn shunting_yard(tokens: Vec<Token>) -> Result<Vec<Token>, ConvertError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok.kind {
            TokenKind::Number | TokenKind::Variable => output.push(tok),
            TokenKind::Function | TokenKind::LeftParen => stack.push(tok),
            TokenKind::Comma => {
                pop_while(&mut stack, &mut output, |t| t.kind != TokenKind::LeftParen);
            }
            TokenKind::Operator(_) | TokenKind::UnaryOperator(_) | TokenKind::Comparison(_) => {
                pop_while(&mut stack, &mut output, |t| should_pop(t.kind, tok.kind));
                stack.push(tok);
            }
            TokenKind::RightParen => {
                pop_while(&mut stack, &mut output, |t| t.kind != TokenKind::LeftParen);
                // drop the '(' itself, then emit the function it opened, if any
                stack.pop();
                if stack.last().is_some_and(|t| t.kind == TokenKind::Function) {
                    output.extend(stack.pop());
                }
            }
            TokenKind::QuestionMark | TokenKind::Colon | TokenKind::Conditional => {
                return Err(ConvertError::UnexpectedToken {
                    text: tok.text,
                    pos: tok.pos,
                });
            }
        }
    }
    while let Some(top) = stack.pop() {
        output.push(top);
    }
    Ok(output)
}
