pub mod doc;
pub mod error;
pub mod index;
pub mod persist;
pub mod query;
pub mod tokenizer;

pub use doc::DocumentId;
pub use error::{IndexError, MalformedQuery, ParseError};
pub use index::{IndexBuilder, InvertedIndex};
pub use query::{Operator, Operand, Query, QueryEngine};
