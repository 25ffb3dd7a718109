use super::{parse, SyntaxError};
use crate::expr::{Node, Operator};

fn eval(input: &str) -> f64 {
	parse(input).unwrap().evaluate().unwrap()
}

#[test]
fn single_number() {
	assert_eq!(parse("42").unwrap(), Node::Number(42.0));
	assert_eq!(parse("3.25").unwrap(), Node::Number(3.25));
}

#[test]
fn precedence() {
	assert_eq!(eval("2+3*4"), 14.0);
	assert_eq!(eval("2*3+4"), 10.0);
	assert_eq!(eval("2+6/3"), 4.0);
}

#[test]
fn left_associativity() {
	assert_eq!(eval("10-3-2"), 5.0);
	assert_eq!(eval("24/4/2"), 3.0);
}

#[test]
fn parentheses_override_precedence() {
	assert_eq!(eval("(2+3)*4"), 20.0);
	assert_eq!(eval("2*(3+4)"), 14.0);
}

#[test]
fn deeply_nested_parentheses() {
	assert_eq!(eval("((((((1+2))))))"), 3.0);
	assert_eq!(eval("(1+(2*(3+(4/(2)))))"), 11.0);
}

#[test]
fn unary_minus_lowers_to_zero_sub() {
	assert_eq!(
		parse("-5").unwrap(),
		Node::binary(Operator::Sub, Node::Number(0.0), Node::Number(5.0))
	);
	assert_eq!(eval("-5+8"), 3.0);
	assert_eq!(eval("2*-3"), -6.0);
	assert_eq!(eval("-(2+3)"), -5.0);
}

#[test]
fn unary_plus_is_identity() {
	assert_eq!(parse("+5").unwrap(), Node::Number(5.0));
	assert_eq!(eval("+5*2"), 10.0);
	assert_eq!(eval("--5"), 5.0);
}

#[test]
fn whitespace_between_tokens() {
	assert_eq!(eval(" 2 \t+  3 "), 5.0);
	// whitespace still separates adjacent literals into two tokens
	assert_eq!(parse("1 2"), Err(SyntaxError::UnexpectedToken("2".to_owned())));
}

#[test]
fn empty_input() {
	assert_eq!(parse(""), Err(SyntaxError::UnexpectedEnd));
	assert_eq!(parse("   \t "), Err(SyntaxError::UnexpectedEnd));
}

#[test]
fn trailing_operator() {
	assert_eq!(parse("2+"), Err(SyntaxError::UnexpectedEnd));
	assert_eq!(parse("2*"), Err(SyntaxError::UnexpectedEnd));
}

#[test]
fn missing_closing_parenthesis() {
	assert_eq!(parse("(2+3"), Err(SyntaxError::MissingClosingParen));
	assert_eq!(parse("((2+3)"), Err(SyntaxError::MissingClosingParen));
}

#[test]
fn unexpected_token_after_expression() {
	assert_eq!(parse("2+3)"), Err(SyntaxError::UnexpectedToken(")".to_owned())));
}

#[test]
fn unexpected_character() {
	assert_eq!(parse("2%3"), Err(SyntaxError::UnexpectedCharacter('%')));
	assert_eq!(parse("2+a"), Err(SyntaxError::UnexpectedCharacter('a')));
}

#[test]
fn malformed_literal() {
	assert_eq!(parse("1.2.3"), Err(SyntaxError::InvalidNumber("1.2.3".to_owned())));
	assert_eq!(parse("."), Err(SyntaxError::InvalidNumber(".".to_owned())));
}

#[test]
fn operator_needs_operand() {
	assert_eq!(parse("*2"), Err(SyntaxError::UnexpectedToken("*".to_owned())));
	assert_eq!(parse("()"), Err(SyntaxError::UnexpectedToken(")".to_owned())));
}
