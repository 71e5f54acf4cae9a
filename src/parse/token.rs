use logos::Logos;

/// Tokens following the two headwords of a line. Headwords may hold any
/// non-space character, so the lexer splits them off by whitespace instead.
#[derive(Debug, PartialEq, Logos, Clone, Copy)]
pub enum Token {
    #[regex(r"[ \f\r\t\v]+")]
    WhiteSpace,

    #[regex(r"\[[^\]\n]*\]")]
    Pinyin,

    #[regex(r"/[^\n]*")]
    Definitions,

    #[error]
    Error,
}
