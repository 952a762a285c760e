use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    In,     // <
    Out,    // >
    Append, // >>
}

impl RedirectKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "<" => Some(RedirectKind::In),
            ">" => Some(RedirectKind::Out),
            ">>" => Some(RedirectKind::Append),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RedirectKind::In => "<",
            RedirectKind::Out => ">",
            RedirectKind::Append => ">>",
        }
    }

    /// `>` and `>>` both count as output redirection.
    pub fn is_output(&self) -> bool {
        matches!(self, RedirectKind::Out | RedirectKind::Append)
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A directive and the word that followed it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub kind: RedirectKind,
    pub target: Option<String>,
}

/// Everything the child needs: redirections to apply in order, then the
/// program and its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandNode {
    pub argv: Vec<String>,
    pub redirects: Vec<Redirect>,
}

impl CommandNode {
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(|s| s.as_str())
    }
}
