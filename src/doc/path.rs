use std::fmt;

use crate::doc::Selector;

/// One parsed segment of a bracket path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
	/// Segment content that parses as a decimal integer (quoted or not).
	Index(i64),
	/// Any other segment content.
	Key(String),
}

impl PathToken {
	/// Borrow as a container selector; negative indices address nothing.
	pub fn as_selector(&self) -> Option<Selector<'_>> {
		match self {
			PathToken::Index(index) => usize::try_from(*index).ok().map(Selector::Index),
			PathToken::Key(key) => Some(Selector::Key(key)),
		}
	}
}

/// Parsed bracket path such as `["a"][2]['b c']`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
	source: String,
	/// Ordered tokens, root first.
	pub tokens: Vec<PathToken>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
	Outside,
	InBracket,
	InQuote(char),
}

impl Path {
	/// Tokenize a bracket path.
	///
	/// Parsing never fails. Empty segments are dropped, and text outside any
	/// bracket (or in a segment left unterminated at end of input) is
	/// accumulated into the pending token and then discarded with it.
	/// A backslash escapes the open quote inside quotes, and `[`/`]` anywhere.
	pub fn parse(input: &str) -> Self {
		let mut tokens = Vec::new();
		let mut pending = String::new();
		let mut state = ScanState::Outside;
		let mut chars = input.chars().peekable();

		while let Some(ch) = chars.next() {
			if ch == '\\'
				&& let Some(&next) = chars.peek()
				&& escapable(state, next)
			{
				pending.push(next);
				chars.next();
				continue;
			}

			state = match state {
				ScanState::Outside if ch == '[' => {
					pending.clear();
					ScanState::InBracket
				}
				ScanState::Outside => {
					pending.push(ch);
					ScanState::Outside
				}
				ScanState::InBracket if ch == ']' => {
					flush(&mut pending, &mut tokens);
					ScanState::Outside
				}
				ScanState::InBracket if ch == '"' || ch == '\'' => ScanState::InQuote(ch),
				ScanState::InBracket => {
					pending.push(ch);
					ScanState::InBracket
				}
				ScanState::InQuote(quote) if ch == quote => {
					flush(&mut pending, &mut tokens);
					ScanState::InBracket
				}
				ScanState::InQuote(quote) => {
					pending.push(ch);
					ScanState::InQuote(quote)
				}
			};
		}

		if !pending.is_empty() {
			log::debug!("path {input:?}: discarding unterminated text {pending:?}");
		}

		Self {
			source: input.to_owned(),
			tokens,
		}
	}

	/// Original path text.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Whether no tokens were found.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

fn escapable(state: ScanState, next: char) -> bool {
	match state {
		ScanState::Outside => next == '[',
		ScanState::InBracket => matches!(next, '[' | ']' | '"' | '\''),
		ScanState::InQuote(quote) => next == quote || next == '[' || next == ']',
	}
}

fn flush(pending: &mut String, tokens: &mut Vec<PathToken>) {
	if pending.is_empty() {
		return;
	}
	let text = std::mem::take(pending);
	tokens.push(match text.parse::<i64>() {
		Ok(index) => PathToken::Index(index),
		Err(_) => PathToken::Key(text),
	});
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

impl From<&str> for Path {
	fn from(input: &str) -> Self {
		Path::parse(input)
	}
}
