mod cambridge;
mod client;
mod error;
pub mod matcher;


pub use cambridge::{CambridgeParser, Extraction};
pub use client::CambridgeClient;
pub use error::FetchError;

use vocab_types::Lookup;

/// Online dictionary that turns a word into a finished lookup
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch and extract one word. Only transport failures are errors;
    /// a page without entries is an empty `Lookup`.
    async fn lookup(&self, word: &str) -> Result<Lookup, FetchError>;

    /// Provider name for diagnostics
    fn name(&self) -> &str;
}
