//! Capability seams between the core and its heavyweight resources.

mod lemmatizer;
mod sentiment;

pub use lemmatizer::ILemmatizer;
pub use sentiment::ISentimentProvider;
