use std::ops::Range;

/// A lowercase, whitespace-free slice of the search phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte range the token occupied in the raw phrase
    pub span: Range<usize>,
}

impl Token {
    /// Whether this token shares any byte with `range`
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.span.start < range.end && range.start < self.span.end
    }
}

/// Split a phrase on runs of whitespace into lowercase tokens
pub fn tokenize(phrase: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in phrase.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(make_token(phrase, s..idx));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(s) = start {
        tokens.push(make_token(phrase, s..phrase.len()));
    }

    tokens
}

fn make_token(phrase: &str, span: Range<usize>) -> Token {
    Token {
        text: phrase[span.clone()].to_lowercase(),
        span,
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
