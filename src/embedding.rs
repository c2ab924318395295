pub mod base;
pub mod hugging_face;

pub use base::{Embedding, EmbeddingProvider, FakeEmbeddingProvider};
pub use hugging_face::HuggingFaceEmbeddingProvider;
