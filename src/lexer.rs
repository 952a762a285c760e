/// Characters that separate words on a command line.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\x0c', '\n'];

/// Slot count of the classic fixed-size argument buffer.
///
/// Kept for compatibility only: `TokenList` grows as needed and never
/// truncates a line.
pub const MAX_ARGS: usize = 32;

/// Owned words of one input line, in order. Never contains empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    words: Vec<String>,
}

impl TokenList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.words.first().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|s| s.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// True when the line would not have fit the classic 32-slot buffer.
    pub fn exceeds_classic_capacity(&self) -> bool {
        self.words.len() > MAX_ARGS
    }
}

pub struct Lexer;

impl Lexer {
    /// Split a line into its maximal runs of non-delimiter characters.
    ///
    /// Consecutive delimiters collapse, so a blank line yields no tokens.
    /// The returned words are copies; the caller may drop `line` right away.
    pub fn tokenize(line: &str) -> TokenList {
        let words = line
            .split(|c: char| DELIMITERS.contains(&c))
            .filter(|w| !w.is_empty())
            .map(|w| w.to_string())
            .collect();
        TokenList { words }
    }
}
