pub mod catalog;
pub mod category;
pub mod codec;
pub mod config;
pub mod error;
pub mod ids;
pub mod vocab;

use once_cell::sync::Lazy;

pub use catalog::{Catalog, VocabEntry, VocabQuery, VocabStats};
pub use category::{CharCategory, VocabKind};
pub use codec::{Codec, Encoding, TokenInfo};
pub use config::{load_settings, OutputFormat, Settings, CONFIG_FILENAME};
pub use error::{CodecError, Result};
pub use ids::{format_token_ids, parse_token_ids, parse_token_ids_strict, ParsedIds, RejectedEntry};
pub use vocab::{Symbol, TokenId, BEGIN_ID, END_ID, VOCAB_SIZE};

/// Shared codec instance (lazily initialized)
pub static CODEC: Lazy<Codec> = Lazy::new(Codec::new);
