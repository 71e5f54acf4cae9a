use super::lexer::Lexer;
use super::token::Token;
use crate::{Definition, Entry, Error, ErrorType};

#[inline]
fn remove_brackets(input: &str) -> &str {
    let mut chars = input.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Splits a `/def1/def2/.../defN/` block into its glosses.
///
/// Splitting on `/` yields an empty field before the first slash and another
/// after the last one; both are dropped. The glosses in between are kept as
/// they are, unless all of them are blank, which is an
/// [`ErrorType::EmptyDefinitions`] error.
fn parse_definitions(lexer: &Lexer<'_, Token>, block: &str) -> Result<Vec<Definition>, Error> {
    let fields: Vec<&str> = block.trim_end().split('/').collect();
    match fields.last() {
        Some(last) if fields.len() >= 2 && last.is_empty() => {}
        _ => {
            return Err(lexer.error(
                ErrorType::MalformedLine,
                "Definitions must end with '/'.".to_string(),
            ))
        }
    }
    let glosses = &fields[1..fields.len() - 1];
    if glosses.iter().all(|gloss| gloss.trim().is_empty()) {
        Err(lexer.error(
            ErrorType::EmptyDefinitions,
            "No definitions found.".to_string(),
        ))
    } else {
        Ok(glosses.iter().map(|gloss| Definition::new(gloss)).collect())
    }
}

/// Parses a single dictionary line, without its line terminator:
///
/// ```text
/// 心醉 心醉 [xin1 zui4] /enchanted/fascinated/charmed/
/// ```
///
/// Headwords are the first two runs of non-space characters and may contain
/// any punctuation. Only the structure is checked; pinyin syllables and
/// scripts are taken as they are, except that pinyin is lowercased.
pub fn parse_entry(line: &str) -> Result<Entry, Error> {
    let mut lexer = Lexer::new(line);
    let traditional = lexer.take_word()?;
    let simplified = lexer.take_word()?;
    lexer.require_space()?;
    let pinyin = remove_brackets(lexer.take(Token::Pinyin)?);
    if pinyin.trim().is_empty() {
        return Err(lexer.error(ErrorType::MalformedLine, "Empty pinyin.".to_string()));
    }
    lexer.require_space()?;
    let (token, block) = lexer.peek()?;
    if token != Token::Definitions {
        return Err(lexer.error(
            ErrorType::MalformedLine,
            format!("Expect Definitions, found {:?}({:?})", token, block),
        ));
    }
    let definitions = parse_definitions(&lexer, block)?;
    Ok(Entry {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: pinyin.to_lowercase(),
        definitions,
        abbreviations: vec![],
        variants: vec![],
        references: vec![],
    })
}
