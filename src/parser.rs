use std::fmt;
use crate::ast::{CommandNode, Redirect, RedirectKind};
use crate::lexer::TokenList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    TooManyInputs(usize),
    TooManyOutputs(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same wording for both classes.
        write!(f, "Error! Can't have two >'s or >>'s!")
    }
}

impl std::error::Error for ValidationError {}

pub fn is_exit(tokens: &TokenList, keyword: &str) -> bool {
    tokens.first() == Some(keyword)
}

/// Reject a command with more than one `<`, or more than one of `>`/`>>`.
pub fn validate(tokens: &TokenList) -> Result<(), ValidationError> {
    let mut inputs = 0;
    let mut outputs = 0;
    for kind in tokens.iter().filter_map(RedirectKind::from_token) {
        if kind.is_output() {
            outputs += 1;
        } else {
            inputs += 1;
        }
    }
    if inputs > 1 {
        return Err(ValidationError::TooManyInputs(inputs));
    }
    if outputs > 1 {
        return Err(ValidationError::TooManyOutputs(outputs));
    }
    Ok(())
}

/// Build the launch plan for a token sequence.
///
/// Every position is inspected, filename operands included. The argument
/// vector ends at the first directive; later words never reach the program.
pub fn plan(tokens: &TokenList) -> CommandNode {
    let words = tokens.as_slice();
    let mut argv_end = words.len();
    let mut redirects = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let Some(kind) = RedirectKind::from_token(word) else {
            continue;
        };
        argv_end = argv_end.min(i);
        redirects.push(Redirect {
            kind,
            target: words.get(i + 1).cloned(),
        });
    }

    CommandNode {
        argv: words[..argv_end].to_vec(),
        redirects,
    }
}
