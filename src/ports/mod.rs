pub mod generation;
pub mod retrieval;

pub use generation::Generator;
pub use retrieval::Retriever;
