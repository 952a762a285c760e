use std::io::{BufRead, Write};
use crate::config::Config;
use crate::error::ShellError;
use crate::executor::Executor;
use crate::lexer::Lexer;
use crate::parser;
use crate::prompt::ShellPrompt;

pub struct Repl<R, W> {
    prompt: ShellPrompt<R, W>,
    exit_keyword: String,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Repl {
            prompt: ShellPrompt::new(&config.prompt, input, output),
            exit_keyword: config.exit_keyword.clone(),
        }
    }

    pub fn with_prompt(prompt: ShellPrompt<R, W>, exit_keyword: &str) -> Self {
        Repl { prompt, exit_keyword: exit_keyword.to_string() }
    }

    /// Read, validate and run lines until input ends or the exit keyword
    /// is entered. Only reading input and process management can fail;
    /// a broken output stream does not stop the loop.
    pub fn run(&mut self, executor: &mut dyn Executor) -> Result<(), ShellError> {
        loop {
            if let Err(e) = self.prompt.show_prompt() {
                log::debug!("prompt not written: {}", e);
            }
            let Some(line) = self.prompt.read_line().map_err(ShellError::Read)? else {
                // End with EOF (e.g. Ctrl+D)
                return Ok(());
            };

            let tokens = Lexer::tokenize(&line);
            drop(line);
            if tokens.is_empty() {
                continue;
            }
            log::debug!("tokens: {:?}", tokens.as_slice());
            if tokens.exceeds_classic_capacity() {
                log::debug!("{} words, more than {} slots", tokens.len(), crate::lexer::MAX_ARGS);
            }

            if parser::is_exit(&tokens, &self.exit_keyword) {
                return Ok(());
            }
            if let Err(e) = parser::validate(&tokens) {
                log::debug!("rejected: {:?}", e);
                if let Err(e) = self.prompt.message(&e.to_string()) {
                    log::debug!("message not written: {}", e);
                }
                continue;
            }

            let cmd = parser::plan(&tokens);
            log::debug!("launch plan: {:?}", cmd);
            if let Err(e) = self.prompt.flush() {
                log::debug!("output not flushed: {}", e);
            }
            executor.exec(&cmd)?;
        }
    }

    pub fn prompt(&self) -> &ShellPrompt<R, W> {
        &self.prompt
    }
}
