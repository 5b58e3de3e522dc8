use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {position}")]
pub struct LexError {
    kind: LexErrorKind,
    position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }

    pub fn get_kind(&self) -> &LexErrorKind {
        &self.kind
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    /// The offending lexeme, or the offending character as a one-char string.
    pub fn get_lexeme(&self) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedString { lexeme }
            | LexErrorKind::UnterminatedComment { lexeme }
            | LexErrorKind::MalformedNumber { lexeme }
            | LexErrorKind::UnknownOperatorSequence { sequence: lexeme } => lexeme.clone(),
            LexErrorKind::UnknownCharacter { character } => character.to_string(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            LexErrorKind::UnterminatedString { .. } => "UnterminatedString",
            LexErrorKind::UnterminatedComment { .. } => "UnterminatedComment",
            LexErrorKind::MalformedNumber { .. } => "MalformedNumber",
            LexErrorKind::UnknownCharacter { .. } => "UnknownCharacter",
            LexErrorKind::UnknownOperatorSequence { .. } => "UnknownOperatorSequence",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            LexErrorKind::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "string literal is missing a closing `\"` on the same line",
            )),
            LexErrorKind::UnterminatedComment { .. } => {
                ErrorTip::Suggestion(String::from("block comment is missing a closing `*/`"))
            }
            LexErrorKind::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid number, expected a single decimal point and digits after any exponent",
                lexeme
            )),
            LexErrorKind::UnknownCharacter { .. } => ErrorTip::None,
            LexErrorKind::UnknownOperatorSequence { sequence } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator on its own, did you mean `{}=`?",
                sequence, sequence
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal: {lexeme:?}")]
    UnterminatedString { lexeme: String },
    #[error("unterminated block comment")]
    UnterminatedComment { lexeme: String },
    #[error("malformed number literal: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("unknown character: {character:?}")]
    UnknownCharacter { character: char },
    #[error("unknown operator sequence: {sequence:?}")]
    UnknownOperatorSequence { sequence: String },
}
