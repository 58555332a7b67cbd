use thiserror::Error;

pub const UNEXPECTED_EOF: &str = "unexpected EOF while reading";
pub const UNEXPECTED_CPAREN: &str = "unexpected )";
pub const TRAILING_TOKENS: &str = "unexpected trailing tokens";
pub const INVALID_QUOTATION: &str = "invalid quotation";
pub const INVALID_CONDITIONAL: &str = "invalid conditional statement";
pub const INVALID_DEFINITION: &str = "invalid definition";
pub const INVALID_ASSIGNMENT: &str = "invalid assignment";
pub const INVALID_LAMBDA: &str = "invalid lambda";
pub const INVALID_CALL: &str = "invalid procedure called";
pub const INVALID_INPUT: &str = "invalid procedure input";

/// Everything that can go wrong between reading a line and printing it.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum LispError {
    /// Malformed source, malformed special forms and bad native arguments.
    #[error("syntax error: {0}")]
    SyntaxError(String),
    /// Well-formed input the evaluator still can't make sense of.
    #[error("evaluation error: {0}")]
    EvaluationError(String),
    #[error("unknown error: should never occur")]
    UnknownError,
}

impl LispError {
    pub fn syntax(msg: &str) -> LispError {
        LispError::SyntaxError(msg.to_string())
    }

    pub fn evaluation(msg: &str) -> LispError {
        LispError::EvaluationError(msg.to_string())
    }

    pub fn invalid_input() -> LispError {
        LispError::syntax(INVALID_INPUT)
    }
}
