pub mod gemini;
pub mod system;
