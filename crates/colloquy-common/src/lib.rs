pub mod defaults;
pub mod errors;
pub mod id;

pub use errors::{ColloquyError, ConfigError};
pub use id::{new_id, ConversationId};

pub type Result<T> = std::result::Result<T, ColloquyError>;
