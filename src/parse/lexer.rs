use super::Token;
use crate::{Error, ErrorType, Source};
use logos::{Lexer as LogosLexer, Logos};

/// Walks a single dictionary line, keeping track of the current column.
///
/// Headwords are taken with [`take_word`](Lexer::take_word) before any token
/// is peeked; the rest of the line is lexed into [`Token`]s.
pub struct Lexer<'source, Token: Logos<'source>> {
    llex: LogosLexer<'source, Token>,
    col: usize,
    peeked_token: Option<(Token, &'source str)>,
    primed: bool,
    spaced: bool,
    line: &'source str,
}

impl<'source> Lexer<'source, Token> {
    pub fn new(line: &'source str) -> Self {
        Lexer {
            llex: Token::lexer(line),
            col: 1,
            peeked_token: None,
            primed: false,
            spaced: false,
            line,
        }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    fn skip_space(&mut self) {
        self.spaced = false;
        while let Some(token) = self.llex.next() {
            match token {
                Token::WhiteSpace => {
                    self.col += self.llex.slice().chars().count();
                    self.spaced = true;
                }
                _ => {
                    self.peeked_token = Some((token, self.llex.slice()));
                    return;
                }
            }
        }
    }

    fn prime(&mut self) {
        if !self.primed {
            self.primed = true;
            self.skip_space();
        }
    }

    pub(crate) fn error(&self, r#type: ErrorType, msg: String) -> Error {
        Error {
            msg,
            src: Source::at_col(self.col),
            r#type,
            raw: self.line.to_string(),
        }
    }

    fn end_of_line(&self) -> Error {
        self.error(ErrorType::MalformedLine, "Unexpected end of line.".to_string())
    }

    /// Takes the next run of non-space characters.
    pub fn take_word(&mut self) -> Result<&'source str, Error> {
        debug_assert!(!self.primed, "take_word after peek");
        let rest = self.llex.remainder();
        let trimmed = rest.trim_start();
        let space = rest.len() - trimmed.len();
        self.col += rest[..space].chars().count();
        let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        if len == 0 {
            return Err(self.end_of_line());
        }
        let word = &trimmed[..len];
        self.llex.bump(space + len);
        self.col += word.chars().count();
        Ok(word)
    }

    pub fn peek(&mut self) -> Result<(Token, &'source str), Error> {
        self.prime();
        match self.peeked_token {
            Some(peeked) => Ok(peeked),
            None => Err(self.end_of_line()),
        }
    }

    /// Fails unless whitespace separates the peeked token from the previous
    /// one.
    pub fn require_space(&mut self) -> Result<(), Error> {
        let (token, _) = self.peek()?;
        if self.spaced {
            Ok(())
        } else {
            Err(self.error(
                ErrorType::MalformedLine,
                format!("Expect whitespace before {:?}", token),
            ))
        }
    }

    #[inline]
    pub fn consume(&mut self) {
        self.prime();
        if let Some((_, text)) = self.peeked_token.take() {
            self.col += text.chars().count();
            self.skip_space();
        }
    }

    pub fn take(&mut self, expected: Token) -> Result<&'source str, Error> {
        let (token, text) = self.peek()?;
        if token != expected {
            Err(self.error(
                ErrorType::MalformedLine,
                format!("Expect {:?}, found {:?}({:?})", expected, &token, text),
            ))
        } else {
            self.consume();
            Ok(text)
        }
    }
}
