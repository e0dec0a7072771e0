pub mod logger;
pub mod parse;
pub mod prompt;
