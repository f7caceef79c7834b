//! Split text into wrap units.
//!
//! Latin-script words stay whole, whitespace runs are their own tokens, and
//! every CJK character is a separate token so ideographic text can wrap
//! between any two characters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of non-whitespace, non-CJK characters.
    Word,
    /// A run of whitespace, possibly containing newlines.
    Whitespace,
    /// A single CJK character.
    Cjk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    /// Whether this token forces one or more line breaks.
    pub fn has_newline(&self) -> bool {
        self.text.contains('\n')
    }
}

/// Whether `c` is wrapped as an individual character.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{303F}'   // CJK symbols and punctuation
        | '\u{3040}'..='\u{30FF}' // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}' // Extension A
        | '\u{4E00}'..='\u{9FFF}' // Unified ideographs
        | '\u{AC00}'..='\u{D7AF}' // Hangul syllables
        | '\u{F900}'..='\u{FAFF}' // Compatibility ideographs
        | '\u{FF00}'..='\u{FFEF}' // Halfwidth and fullwidth forms
    )
}

fn classify(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else if is_cjk(c) {
        TokenKind::Cjk
    } else {
        TokenKind::Word
    }
}

/// Tokenize `text`. Concatenating the token texts gives back `text`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (idx, c) in text.char_indices() {
        let kind = classify(c);
        match current {
            Some(prev) if prev == kind && kind != TokenKind::Cjk => {}
            Some(prev) => {
                tokens.push(Token {
                    kind: prev,
                    text: &text[start..idx],
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token {
            kind,
            text: &text[start..],
        });
    }

    tokens
}
