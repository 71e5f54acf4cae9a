use crate::parse::{self, Options, Parser};
use getset::{CopyGetters, Getters};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::str::FromStr;
use std::sync::Arc;

/// A string wrapped in [`Arc`](std::sync::Arc)
/// representing the source file path.
pub type SrcFile = Arc<String>;

/// Represents a position in the input, used for locating errors. `line` is
/// 1-based; `col` counts characters, also 1-based.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    pub file: Option<SrcFile>,
    pub line: usize,
    pub col: usize,
}

impl Source {
    pub(crate) fn at_col(col: usize) -> Self {
        Source {
            file: None,
            line: 1,
            col,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.col),
            None => write!(f, "<input>:{}:{}", self.line, self.col),
        }
    }
}

/// Kinds of errors that `cedict` encountered while reading a dictionary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// IO error, e.g., the underlying stream failed or the file cannot be
    /// opened.
    Io,
    /// The line does not have the `trad simp [pinyin] /defs/` shape.
    MalformedLine,
    /// The definitions block is present but holds no glosses.
    EmptyDefinitions,
}

/// Contains the full information of an error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub msg: String,
    pub src: Source,
    pub r#type: ErrorType,
    /// The offending raw line. Empty for I/O errors.
    pub raw: String,
}

impl Error {
    /// Returns `true` if the error comes from reading the input rather than
    /// from its content.
    pub fn is_io(&self) -> bool {
        self.r#type == ErrorType::Io
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}\n  {}", self.r#type, self.msg, self.src)?;
        if !self.raw.is_empty() {
            write!(f, "\n  {}", self.raw)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// Records a "see also" relation, written as `see 繁體|简体[pin1 yin1]` in a
/// gloss.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Reference {
    pub simplified: String,
    pub traditional: String,
}

/// Records an `old variant of` / `erhua variant of` relation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Variant {
    pub erhua: bool,
    pub old: bool,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Abbreviation {}

/// One English gloss, along with markers on register and regional dialects.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters, CopyGetters)]
pub struct Definition {
    /// Returns the gloss text.
    #[getset(get = "pub")]
    pub(crate) text: String,

    #[getset(get_copy = "pub")]
    pub(crate) idiom: bool,

    #[getset(get_copy = "pub")]
    pub(crate) figure_of_speech: bool,

    #[getset(get_copy = "pub")]
    pub(crate) slang: bool,

    #[getset(get_copy = "pub")]
    pub(crate) colloquial: bool,

    /// Returns `true` if the gloss only applies to Cantonese.
    #[getset(get_copy = "pub")]
    pub(crate) cantonese: bool,

    /// Returns `true` if the gloss only applies to Taiwan.
    #[getset(get_copy = "pub")]
    pub(crate) taiwanese: bool,
}

impl Definition {
    pub(crate) fn new(text: &str) -> Self {
        Definition {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// Represents a single line in the dictionary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Entry {
    /// Returns the headword in traditional characters.
    #[getset(get = "pub")]
    pub(crate) traditional: String,

    /// Returns the headword in simplified characters.
    #[getset(get = "pub")]
    pub(crate) simplified: String,

    /// Returns the lowercased, numerically toned pinyin.
    #[getset(get = "pub")]
    pub(crate) pinyin: String,

    /// Returns the glosses in the order they appear on the line.
    #[getset(get = "pub")]
    pub(crate) definitions: Vec<Definition>,

    #[getset(get = "pub")]
    pub(crate) abbreviations: Vec<Abbreviation>,

    #[getset(get = "pub")]
    pub(crate) variants: Vec<Variant>,

    #[getset(get = "pub")]
    pub(crate) references: Vec<Reference>,
}

impl FromStr for Entry {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse::parse_entry(line)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.definitions.first() {
            Some(def) => write!(f, "{}\t{}\t{}", self.simplified, self.pinyin, def.text),
            None => write!(f, "{}\t{}", self.simplified, self.pinyin),
        }
    }
}

/// Represents a parsed CC-CEDICT dictionary: one [`Entry`] per data line, in
/// file order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct Dictionary {
    /// Returns all entries in file order.
    #[getset(get = "pub")]
    pub(crate) entries: Vec<Entry>,
}

impl Dictionary {
    /// Parses `reader` with the default options, aborting on the first bad
    /// line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        parse::parse_dictionary(reader)
    }

    /// Opens and parses the file at `path`. Errors carry `path` in their
    /// [`Source`].
    pub fn from_file(path: &str, options: Options) -> Result<(Self, Vec<Error>), Error> {
        let file = Arc::new(path.to_string());
        match File::open(path) {
            Ok(f) => Parser::new(options).with_file(file).parse(f),
            Err(io_error) => Err(Error {
                r#type: ErrorType::Io,
                msg: format!("Couldn't read {}: {:?}", path, io_error),
                src: Source {
                    file: Some(file),
                    line: 0,
                    col: 0,
                },
                raw: String::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns the entries whose traditional or simplified headword equals
    /// `word`.
    pub fn lookup<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.traditional == word || e.simplified == word)
    }
}

impl Index<usize> for Dictionary {
    type Output = Entry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl IntoIterator for Dictionary {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
