use crate::ast::{BinOp, CmpOp, UnaryOp};
use crate::error::LexError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal or one of the named constants `pi`, `e`, `π`, `ℯ`.
    Number,
    /// Single-letter identifier.
    Variable,
    Operator(BinOp),
    /// `+`/`-` reclassified by the converter as a prefix sign.
    UnaryOperator(UnaryOp),
    /// Identifier longer than one letter.
    Function,
    LeftParen,
    RightParen,
    Comma,
    Comparison(CmpOp),
    QuestionMark,
    Colon,
    /// Synthetic marker emitted after the three postfix branches of `c ? a : b`.
    Conditional,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Character offset of the token in the source string.
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits `input` into tokens, left to right.
///
/// Fails on the first character that starts no token, and as soon as a second
/// distinct single-letter variable shows up.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(input);
    let mut out = Vec::new();
    while let Some(tok) = lex.next_token()? {
        out.push(tok);
    }
    Ok(out)
}

pub(crate) fn is_named_constant(s: &str) -> bool {
    matches!(s, "pi" | "e" | "π" | "ℯ")
}

struct Lexer {
    src: Vec<char>,
    i: usize,
    /// First single-letter variable seen in this scan.
    variable: Option<String>,
}

impl Lexer {
    fn new(s: &str) -> Self {
        Self {
            src: s.chars().collect(),
            i: 0,
            variable: None,
        }
    }
    fn peek(&self) -> Option<char> {
        self.src.get(self.i).copied()
    }
    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.src.get(self.i + ahead).copied()
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    fn single(&mut self, kind: TokenKind, c: char) -> Token {
        let pos = self.i;
        self.i += 1;
        Token::new(kind, c.to_string(), pos)
    }
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_ws();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };
        let tok = match c {
            c if c.is_ascii_digit() || c == '.' => self.lex_number(),
            'π' | 'ℯ' => self.single(TokenKind::Number, c),
            c if c.is_alphabetic() => self.lex_ident()?,
            '+' => self.single(TokenKind::Operator(BinOp::Add), c),
            '-' => self.single(TokenKind::Operator(BinOp::Sub), c),
            '*' => self.single(TokenKind::Operator(BinOp::Mul), c),
            '/' => self.single(TokenKind::Operator(BinOp::Div), c),
            '^' => self.single(TokenKind::Operator(BinOp::Pow), c),
            ',' => self.single(TokenKind::Comma, c),
            '(' => self.single(TokenKind::LeftParen, c),
            ')' => self.single(TokenKind::RightParen, c),
            '?' => self.single(TokenKind::QuestionMark, c),
            ':' => self.single(TokenKind::Colon, c),
            '<' | '>' | '=' | '!' => self.lex_comparison(c)?,
            other => {
                return Err(LexError::UnexpectedChar {
                    ch: other,
                    pos: self.i,
                });
            }
        };
        Ok(Some(tok))
    }
    fn lex_comparison(&mut self, c: char) -> Result<Token, LexError> {
        let pos = self.i;
        if self.peek_at(1) == Some('=') {
            let op = match c {
                '<' => CmpOp::Le,
                '>' => CmpOp::Ge,
                '=' => CmpOp::Eq,
                _ => CmpOp::Ne,
            };
            self.i += 2;
            return Ok(Token::new(TokenKind::Comparison(op), op.symbol(), pos));
        }
        let op = match c {
            '<' => CmpOp::Lt,
            '>' => CmpOp::Gt,
            // a lone '=' or '!' starts no token
            other => return Err(LexError::UnexpectedChar { ch: other, pos }),
        };
        self.i += 1;
        Ok(Token::new(TokenKind::Comparison(op), op.symbol(), pos))
    }
    // Digits and dots only; "1.2.3" is accepted here and rejected when the value is parsed.
    fn lex_number(&mut self) -> Token {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.i += 1;
            } else {
                break;
            }
        }
        let s: String = self.src[start..self.i].iter().collect();
        Token::new(TokenKind::Number, s, start)
    }
    fn lex_ident(&mut self) -> Result<Token, LexError> {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() {
                self.i += 1;
            } else {
                break;
            }
        }
        let s: String = self.src[start..self.i].iter().collect();
        if is_named_constant(&s) {
            return Ok(Token::new(TokenKind::Number, s, start));
        }
        if self.i - start > 1 {
            return Ok(Token::new(TokenKind::Function, s, start));
        }
        match &self.variable {
            Some(first) if *first != s => {
                return Err(LexError::MultipleVariables {
                    first: first.clone(),
                    second: s,
                });
            }
            Some(_) => {}
            None => self.variable = Some(s.clone()),
        }
        Ok(Token::new(TokenKind::Variable, s, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn classifies_identifiers_by_length() {
        let toks = tokenize("sin(x) + pi").unwrap();
        assert_eq!(toks[0].kind, TokenKind::Function);
        assert_eq!(toks[2].kind, TokenKind::Variable);
        assert_eq!(toks[5].kind, TokenKind::Number);
        assert_eq!(toks[5].text, "pi");
    }

    #[test]
    fn comparisons_use_two_char_lookahead() {
        use TokenKind::*;
        assert_eq!(
            kinds("1<=2>=3==4!=5<6>7"),
            vec![
                Number,
                Comparison(CmpOp::Le),
                Number,
                Comparison(CmpOp::Ge),
                Number,
                Comparison(CmpOp::Eq),
                Number,
                Comparison(CmpOp::Ne),
                Number,
                Comparison(CmpOp::Lt),
                Number,
                Comparison(CmpOp::Gt),
                Number,
            ]
        );
    }

    #[test]
    fn lone_equals_is_rejected() {
        assert_eq!(
            tokenize("x = 1"),
            Err(LexError::UnexpectedChar { ch: '=', pos: 2 })
        );
    }

    #[test]
    fn unicode_constants_are_numbers() {
        let toks = tokenize("2*π+ℯ").unwrap();
        assert_eq!(toks[2].kind, TokenKind::Number);
        assert_eq!(toks[2].text, "π");
        assert_eq!(toks[4].kind, TokenKind::Number);
        assert_eq!(toks[4].pos, 4);
    }

    #[test]
    fn repeated_variable_is_fine() {
        assert!(tokenize("x*x + x").is_ok());
    }

    #[test]
    fn number_runs_keep_every_dot() {
        let toks = tokenize("1.2.3").unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].text, "1.2.3");
    }

    #[test]
    fn ternary_markers() {
        use TokenKind::*;
        assert_eq!(
            kinds("x ? 1 : 2"),
            vec![Variable, QuestionMark, Number, Colon, Number]
        );
    }
}
