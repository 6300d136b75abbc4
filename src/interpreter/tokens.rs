//! Whitespace tokenization of an input line.

/// An input line split into whitespace-separated tokens.
///
/// No quoting, escaping, pipes or redirection are recognised; those are
/// left to the host shell once the line is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Tokenize `raw`.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            tokens: raw.split_whitespace().collect(),
        }
    }

    /// The line as typed.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// First token, if any.
    pub fn head(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Token at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the line has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Everything after the head token, exactly as typed (leading
    /// whitespace included).
    pub fn rest(&self) -> &'a str {
        let trimmed = self.raw.trim_start();
        match self.head() {
            Some(head) => &trimmed[head.len()..],
            None => "",
        }
    }
}
