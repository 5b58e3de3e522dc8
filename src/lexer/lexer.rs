use std::{collections::HashMap, iter::Peekable, str::CharIndices};

use crate::{
    errors::errors::{LexError, LexErrorKind},
    Position,
};

use super::tokens::{Keyword, Literal, Token, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP};

struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: u32,
    column: u32,
    reserved: &'static HashMap<&'static str, Keyword>,
    operators: &'static HashMap<&'static str, TokenKind>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            reserved: &RESERVED_LOOKUP,
            operators: &OPERATOR_LOOKUP,
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        let start = self.position();
        let c = match self.advance() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    kind: TokenKind::EOF,
                    lexeme: String::new(),
                    literal: Literal::None,
                    position: start,
                })
            }
        };

        if c.is_ascii_digit() {
            return self.number(start);
        }

        if c == '"' {
            return self.string(start);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.identifier(start));
        }

        self.operator(c, start)
    }

    fn position(&mut self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.peek_offset(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next(&mut self) -> Option<char> {
        let offset = self.peek_offset();
        self.source[offset..].chars().nth(1)
    }

    fn peek_offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(offset, _)) => offset,
            None => self.source.len(),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn lexeme_from(&mut self, start: Position) -> &'src str {
        let end = self.peek_offset();
        let source = self.source;
        &source[start.offset..end]
    }

    fn make_token(&mut self, kind: TokenKind, literal: Literal, start: Position) -> Token {
        Token {
            kind,
            lexeme: self.lexeme_from(start).to_string(),
            literal,
            position: start,
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance();
                }
                Some('/') => match self.peek_next() {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.position();

        // opening /*
        self.advance();
        self.advance();

        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedComment {
                            lexeme: String::from("/*"),
                        },
                        start,
                    ))
                }
            }
        }
    }

    fn number(&mut self, start: Position) -> Result<Token, LexError> {
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();

            // second decimal point
            if self.peek() == Some('.') {
                let position = self.position();
                let mut lexeme = self.lexeme_from(start).to_string();
                lexeme.push('.');

                return Err(LexError::new(
                    LexErrorKind::MalformedNumber { lexeme },
                    position,
                ));
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();

            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }

            if !self.consume_digits() {
                let position = self.position();
                let mut lexeme = self.lexeme_from(start).to_string();
                if let Some(c) = self.peek() {
                    lexeme.push(c);
                }

                return Err(LexError::new(
                    LexErrorKind::MalformedNumber { lexeme },
                    position,
                ));
            }
        }

        let lexeme = self.lexeme_from(start).to_string();
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(Token {
                kind: TokenKind::Number,
                lexeme,
                literal: Literal::Number(value),
                position: start,
            }),
            Err(_) => Err(LexError::new(
                LexErrorKind::MalformedNumber { lexeme },
                start,
            )),
        }
    }

    fn consume_digits(&mut self) -> bool {
        let mut consumed = false;

        while let Some('0'..='9') = self.peek() {
            self.advance();
            consumed = true;
        }

        consumed
    }

    fn string(&mut self, start: Position) -> Result<Token, LexError> {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => return Err(self.unterminated_string(start)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('\\') => value.push('\\'),
                        Some('"') => value.push('"'),
                        // unrecognized escapes decode to the escaped character
                        Some(other) => value.push(other),
                        None => return Err(self.unterminated_string(start)),
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        Ok(self.make_token(TokenKind::String, Literal::String(value), start))
    }

    fn unterminated_string(&mut self, start: Position) -> LexError {
        LexError::new(
            LexErrorKind::UnterminatedString {
                lexeme: self.lexeme_from(start).to_string(),
            },
            start,
        )
    }

    fn identifier(&mut self, start: Position) -> Token {
        while self
            .peek()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = self.lexeme_from(start);

        if let Some(keyword) = self.reserved.get(text) {
            let literal = match keyword {
                Keyword::True => Literal::Bool(true),
                Keyword::False => Literal::Bool(false),
                Keyword::Null => Literal::Null,
                _ => Literal::None,
            };

            return Token {
                kind: TokenKind::Keyword(*keyword),
                lexeme: text.to_string(),
                literal,
                position: start,
            };
        }

        Token {
            kind: TokenKind::Identifier,
            lexeme: text.to_string(),
            literal: Literal::String(text.to_string()),
            position: start,
        }
    }

    fn operator(&mut self, c: char, start: Position) -> Result<Token, LexError> {
        let mut symbol = String::from(c);

        // two-character operators win over their one-character prefixes
        if let Some(next) = self.peek() {
            symbol.push(next);

            if let Some(kind) = self.operators.get(symbol.as_str()) {
                self.advance();
                return Ok(self.make_token(*kind, Literal::None, start));
            }

            symbol.truncate(c.len_utf8());
        }

        if let Some(kind) = self.operators.get(symbol.as_str()) {
            return Ok(self.make_token(*kind, Literal::None, start));
        }

        if self.operators.keys().any(|key| key.starts_with(c)) {
            return Err(LexError::new(
                LexErrorKind::UnknownOperatorSequence { sequence: symbol },
                start,
            ));
        }

        Err(LexError::new(
            LexErrorKind::UnknownCharacter { character: c },
            start,
        ))
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
