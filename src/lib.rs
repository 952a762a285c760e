pub mod ast;
pub mod config;
pub mod error;
pub mod executor;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod prompt;
pub mod repl;
