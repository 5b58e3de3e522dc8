use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("let", Keyword::Let);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("while", Keyword::While);
        map.insert("for", Keyword::For);
        map.insert("do", Keyword::Do);
        map.insert("break", Keyword::Break);
        map.insert("continue", Keyword::Continue);
        map.insert("return", Keyword::Return);
        map.insert("and", Keyword::And);
        map.insert("or", Keyword::Or);
        map.insert("not", Keyword::Not);
        map.insert("true", Keyword::True);
        map.insert("false", Keyword::False);
        map.insert("null", Keyword::Null);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // Arithmetic
        map.insert("+", TokenKind::Operator(Operator::Plus));
        map.insert("-", TokenKind::Operator(Operator::Minus));
        map.insert("*", TokenKind::Operator(Operator::Multiply));
        map.insert("/", TokenKind::Operator(Operator::Divide));
        map.insert("%", TokenKind::Operator(Operator::Modulo));

        // Assignment and equality
        map.insert("=", TokenKind::Operator(Operator::Equals));
        map.insert("==", TokenKind::Operator(Operator::EqualEqual));
        map.insert("!=", TokenKind::Operator(Operator::NotEqual));

        // Relational
        map.insert("<", TokenKind::Operator(Operator::Less));
        map.insert("<=", TokenKind::Operator(Operator::LessEqual));
        map.insert(">", TokenKind::Operator(Operator::Greater));
        map.insert(">=", TokenKind::Operator(Operator::GreaterEqual));

        // Punctuation
        map.insert("(", TokenKind::Punct(Punct::LParen));
        map.insert(")", TokenKind::Punct(Punct::RParen));
        map.insert("{", TokenKind::Punct(Punct::LBrace));
        map.insert("}", TokenKind::Punct(Punct::RBrace));
        map.insert(",", TokenKind::Punct(Punct::Comma));
        map.insert(";", TokenKind::Punct(Punct::Semicolon));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Keyword(Keyword),
    Operator(Operator),
    Punct(Punct),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    If,
    Else,
    While,
    For,
    Do,
    Break,
    Continue,
    Return,
    And,
    Or,
    Not,
    True,
    False,
    Null,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    Equals,     // =
    EqualEqual, // ==
    NotEqual,   // !=

    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punct {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value of a literal-bearing token. The lexeme keeps the exact
/// source text; this carries what it means.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Literal,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, lexeme: {:?} }}", self.kind, self.lexeme)
    }
}

impl Token {
    fn carries_text(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::String | TokenKind::Identifier | TokenKind::Number
        )
    }

    pub fn debug(&self) {
        let position = format!("{}:{}", self.position.line, self.position.column);

        if self.carries_text() {
            println!("{:>8} {} ({})", position, self.kind, self.lexeme);
        } else {
            println!("{:>8} {} ()", position, self.kind);
        }
    }
}
