//! # cedict
//!
//! cedict is a library for parsing the line-oriented
//! [CC-CEDICT](https://cc-cedict.org/wiki/) Chinese-English dictionary format.
//!
//! ```
//! let entry: cedict::Entry = "心醉 心醉 [xin1 zui4] /enchanted/fascinated/".parse().unwrap();
//! assert_eq!(entry.pinyin(), "xin1 zui4");
//! assert_eq!(entry.to_string(), "心醉\txin1 zui4\tenchanted");
//! ```
#![doc(html_root_url = "https://docs.rs/cedict/0.1.0")]

mod classify;
mod dictionary;
pub mod parse;

pub use dictionary::*;
pub use parse::{parse_dictionary, parse_entry, BlankLines, OnError, Options, Parser};
