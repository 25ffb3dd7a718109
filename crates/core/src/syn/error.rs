use thiserror::Error;

/// An error returned when an expression fails to parse.
///
/// The scheduler surfaces these to the submitting client as a validation
/// failure; nothing is scheduled for an expression that does not parse.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SyntaxError {
	#[error("unexpected character: {0}")]
	UnexpectedCharacter(char),
	#[error("invalid numeric literal: {0}")]
	InvalidNumber(String),
	#[error("unexpected end of expression")]
	UnexpectedEnd,
	#[error("missing closing parenthesis")]
	MissingClosingParen,
	#[error("unexpected token: {0}")]
	UnexpectedToken(String),
}
