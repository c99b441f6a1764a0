pub mod groq_client;
pub mod prompts;

pub use groq_client::GroqSemanticAnalyzer;
