//! Register, dialect and cross-reference markers found in gloss text.
//!
//! CC-CEDICT keeps these as free text at the start of a gloss, e.g.
//! `(Tw) (coll.) to goof off`, `old variant of 歲|岁[sui4]` or
//! `see 洗手間|洗手间[xi3 shou3 jian1]`.

use crate::{Abbreviation, Definition, Entry, Reference, Variant};

const VARIANT_PREFIXES: [(&str, Variant); 3] = [
    (
        "old variant of ",
        Variant {
            erhua: false,
            old: true,
        },
    ),
    (
        "erhua variant of ",
        Variant {
            erhua: true,
            old: false,
        },
    ),
    (
        "variant of ",
        Variant {
            erhua: false,
            old: false,
        },
    ),
];

const REFERENCE_PREFIXES: [&str; 2] = ["see also ", "see "];

const ABBREVIATION_PREFIXES: [&str; 2] = ["abbr. for ", "abbr. of "];

/// Splits the leading `(...)` groups off a gloss.
fn leading_labels(text: &str) -> (Vec<&str>, &str) {
    let mut labels = vec![];
    let mut rest = text.trim_start();
    while rest.starts_with('(') {
        match rest.find(')') {
            Some(end) => {
                labels.push(&rest[..=end]);
                rest = rest[end + 1..].trim_start();
            }
            None => break,
        }
    }
    (labels, rest)
}

fn marked(text: String) -> Definition {
    let (labels, rest) = leading_labels(&text);
    let has = |names: &[&str]| labels.iter().any(|label| names.contains(label));
    let idiom = has(&["(idiom)"]);
    let figure_of_speech = rest.starts_with("fig.");
    let slang = has(&["(slang)", "(Internet slang)"]);
    let colloquial = has(&["(coll.)", "(colloquial)"]);
    let cantonese = has(&["(Cantonese)"]);
    let taiwanese = has(&["(Tw)"]) || rest.starts_with("Taiwan pr.");
    Definition {
        text,
        idiom,
        figure_of_speech,
        slang,
        colloquial,
        cantonese,
        taiwanese,
    }
}

/// Parses `繁體|简体[pin1 yin1]` or `字[zi4]`. The pinyin is optional.
fn parse_target(target: &str) -> Option<Reference> {
    let word = target
        .split(|c: char| c == '[' || c.is_whitespace() || c == ',')
        .next()?;
    if word.is_empty() {
        return None;
    }
    let (traditional, simplified) = match word.split_once('|') {
        Some((trad, simp)) => (trad, simp),
        None => (word, word),
    };
    if traditional.is_empty() || simplified.is_empty() {
        return None;
    }
    Some(Reference {
        simplified: simplified.to_string(),
        traditional: traditional.to_string(),
    })
}

impl Entry {
    /// Returns this entry with its register and dialect flags set, and its
    /// variants, references and abbreviations collected from the glosses.
    /// Gloss texts are left untouched.
    pub fn classified(mut self) -> Entry {
        let mut variants = vec![];
        let mut references = vec![];
        let mut abbreviations = vec![];
        let definitions = std::mem::take(&mut self.definitions);
        self.definitions = definitions
            .into_iter()
            .map(|def| marked(def.text))
            .collect();
        for def in self.definitions.iter() {
            let (_, rest) = leading_labels(&def.text);
            if let Some((_, variant)) = VARIANT_PREFIXES
                .iter()
                .find(|(prefix, _)| rest.starts_with(prefix))
            {
                variants.push(*variant);
            } else if let Some(prefix) = REFERENCE_PREFIXES.iter().find(|p| rest.starts_with(*p)) {
                if let Some(reference) = parse_target(&rest[prefix.len()..]) {
                    references.push(reference);
                }
            } else if ABBREVIATION_PREFIXES.iter().any(|p| rest.starts_with(p)) {
                abbreviations.push(Abbreviation {});
            }
        }
        self.variants = variants;
        self.references = references;
        self.abbreviations = abbreviations;
        self
    }
}
