use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            file,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Errors that abort tokenization. `InvalidChar` is not one of them: the
    /// parser raises it where the ILLEGAL token is used.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnterminatedString
                | ErrorImpl::InvalidEscape { .. }
                | ErrorImpl::UnterminatedComment
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::InvalidChar { .. } => "InvalidChar",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, add the matching quote",
            )),
            ErrorImpl::InvalidEscape { sequence } => ErrorTip::Suggestion(format!(
                "Unknown escape `{}`, supported escapes are \\n \\t \\r \\\\ \\\" \\'",
                sequence
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is never closed with `*/`"))
            }
            ErrorImpl::InvalidChar { token } => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", token))
            }
            ErrorImpl::ExpectedExpression { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only a variable name can appear on the left of `=`",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels, split the expression up",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence {sequence:?} in string")]
    InvalidEscape { sequence: String },
    #[error("unterminated multi-line comment")]
    UnterminatedComment,
    #[error("invalid character {token:?}")]
    InvalidChar { token: String },
    #[error("expected expression, found {token:?}")]
    ExpectedExpression { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedToken { token: String, message: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
