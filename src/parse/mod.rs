mod lexer;
mod parser;
mod stream;
mod token;

pub use lexer::Lexer;
pub use parser::*;
pub use stream::*;
pub use token::Token;
