//! # Textcomb - Parser Combinator Library
//!
//! A parser combinator library for recursive-descent parsing over string
//! input, without code generation or a grammar DSL.
//!
//! Textcomb provides composable, type-safe parsers that combine into complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Errors as values**: every failure is a returned `Result`, never a panic
//! - **Partial match by default**: parsers consume a prefix and hand the rest
//!   on; only the top-level [`parse`] entry point demands full consumption
//! - **Composability**: primitives (a character, a literal, a pattern)
//!   combine through sequencing, alternation, repetition, and lookahead
//! - **Unicode correctness**: input advances by whole characters, never
//!   through the middle of a multi-byte sequence
//!
//! ```
//! use textcomb::map::MapExt;
//! use textcomb::{parse, pattern, sequence};
//!
//! let assignment = sequence((
//!     pattern("[a-z]+").unwrap(),
//!     pattern(" *= *").unwrap(),
//!     pattern("[0-9]+").unwrap().map(|n: &str| n.parse::<i64>().unwrap_or(0)),
//! ));
//!
//! let (name, _, value) = parse(&assignment, "answer = 42").unwrap();
//! assert_eq!(name, "answer");
//! assert_eq!(value, 42);
//! ```

pub mod any_character;
pub mod between;
pub mod but_not;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod nothing;
pub mod not_followed_by;
pub mod one_of;
pub mod optional;
pub mod parse;
pub mod parser;
pub mod pattern;
pub mod separated_list;
pub mod sequence;
pub mod some;
pub mod try_map;
pub mod value;

pub use any_character::any_character;
pub use between::between;
pub use but_not::but_not;
pub use cursor::TextCursor;
pub use error::{TextLoc, TextcombError};
pub use filter::filter;
pub use flat_map::flat_map;
pub use lazy::lazy;
pub use literal::literal;
pub use many::many;
pub use nothing::nothing;
pub use not_followed_by::not_followed_by;
pub use one_of::one_of;
pub use optional::optional;
pub use parse::parse;
pub use parser::Parser;
pub use pattern::pattern;
pub use separated_list::separated_list;
pub use sequence::sequence;
pub use some::some;
pub use try_map::try_map;
pub use value::value;
