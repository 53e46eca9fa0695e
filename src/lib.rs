//! Wrap a piece of text in a record that round-trips through JSON and
//! renders into a model prompt.
//!
//! ```
//! use llmspec::TextRecord;
//!
//! let record = TextRecord::new("Hello");
//! assert_eq!(record.encode(), r#"{"text": "Hello"}"#);
//! assert_eq!(TextRecord::decode(&record.encode()).unwrap(), record);
//! assert_eq!(record.to_model("moss").unwrap(), ": Hello<eoh>\n:");
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod model;
pub mod record;
pub mod templates;

pub use encoding::Encoding;
pub use error::{Error, Result};
pub use model::ModelFormat;
pub use record::{DecodePolicy, TextRecord};
