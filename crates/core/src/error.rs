use thiserror::Error;

/// The largest exponent accepted when building a polynomial.
pub const MAX_EXPONENT: u32 = 255;

/// The deepest nesting of parentheses and signs accepted by the parser.
pub const MAX_NESTING: usize = 128;

/// Errors raised when a function cannot be accepted as a real bivariate
/// polynomial in the declared variables.
///
/// These are reported before any differentiation takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("`{0}` is not a valid variable name")]
    InvalidVariableName(String),

    #[error("variable `{0}` is declared twice")]
    DuplicateVariable(String),

    #[error("`{name}` at position {position} is not one of the declared variables")]
    UnknownVariable { name: String, position: usize },

    #[error("function `{name}` at position {position} is not supported")]
    UnsupportedFunction { name: String, position: usize },

    #[error("exponent at position {position} must be a non-negative integer")]
    InvalidExponent { position: usize },

    #[error("exponent at position {position} exceeds {MAX_EXPONENT}")]
    ExponentTooLarge { position: usize },

    #[error("division at position {position} is not by a constant")]
    DivisionByNonConstant { position: usize },

    #[error("division by zero at position {position}")]
    DivisionByZero { position: usize },

    #[error("coefficient {0} is not a finite real number")]
    NonFiniteCoefficient(String),

    #[error("unexpected `{found}` at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("expression at position {position} is nested more than {MAX_NESTING} levels deep")]
    NestingTooDeep { position: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,
}
