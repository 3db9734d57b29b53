pub mod dataset;
pub mod embeddings;
pub mod memory;
pub mod pinecone;
