use super::error::SyntaxError;
use super::token::Token;
use std::iter::Peekable;
use std::str::Chars;

/// The expression lexer.
///
/// Produces tokens lazily from the source characters. Horizontal whitespace
/// (space, tab) separates tokens and is otherwise dropped. Any character
/// outside the accepted alphabet aborts lexing with
/// [`SyntaxError::UnexpectedCharacter`].
pub(super) struct Lexer<'a> {
	chars: Peekable<Chars<'a>>,
	/// A buffer used to collect the characters of a numeric literal.
	scratch: String,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Lexer<'a> {
		Lexer {
			chars: source.chars().peekable(),
			scratch: String::new(),
		}
	}

	/// Consumes the lexer, producing the full token list.
	pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
		let mut tokens = Vec::new();
		while let Some(token) = self.next_token()? {
			tokens.push(token);
		}
		Ok(tokens)
	}

	fn next_token(&mut self) -> Result<Option<Token>, SyntaxError> {
		while let Some(&c) = self.chars.peek() {
			let token = match c {
				' ' | '\t' => {
					self.chars.next();
					continue;
				}
				'+' => Token::Plus,
				'-' => Token::Minus,
				'*' => Token::Star,
				'/' => Token::Slash,
				'(' => Token::OpenParen,
				')' => Token::CloseParen,
				'0'..='9' | '.' => return self.lex_number().map(Some),
				c => return Err(SyntaxError::UnexpectedCharacter(c)),
			};
			self.chars.next();
			return Ok(Some(token));
		}
		Ok(None)
	}

	/// Lexes a numeric literal: a run of digits and dots.
	///
	/// The run is validated as a whole, so `1.2.3` is rejected here rather
	/// than producing two adjacent literals.
	fn lex_number(&mut self) -> Result<Token, SyntaxError> {
		self.scratch.clear();
		while let Some(&c) = self.chars.peek() {
			if !c.is_ascii_digit() && c != '.' {
				break;
			}
			self.scratch.push(c);
			self.chars.next();
		}
		match self.scratch.parse::<f64>() {
			Ok(value) => Ok(Token::Number(value)),
			Err(_) => Err(SyntaxError::InvalidNumber(self.scratch.clone())),
		}
	}
}
