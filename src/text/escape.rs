//! Escape-token scanner for inline message codes.
//!
//! The host converts user-facing codes such as `\C[2]` or `\I[64]` into
//! sequences introduced by ESC (`\x1b`) before layout runs. A token is ESC,
//! one code character, and for letter codes an optional `[digits]` argument:
//!
//! - `ESC I[n]` - icon, `n` has 1-3 digits; occupies one icon slot
//! - `ESC C[n]` - text color change, `n` has 1-3 digits; zero width
//! - `ESC <c>` - any other directive (`{`, `}`, `.`, `|`, `!`, `>`, `<`, ...);
//!   zero width
//!
//! A malformed argument (unterminated, empty, non-numeric, too many digits)
//! is not part of the token. It stays in the text as literal characters and
//! is measured like any other glyphs.

use std::borrow::Cow;

/// The escape character that introduces every inline token.
pub const ESCAPE: char = '\x1b';

/// Horizontal gap drawn after every icon, in pixels.
pub const ICON_GAP: f32 = 4.0;

/// Maximum digits accepted in icon and color arguments.
const MAX_SHORT_PARAM_DIGITS: usize = 3;

/// What an escape token does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Draw icon `n` from the icon sheet.
    Icon(u16),
    /// Switch text color to palette entry `n`.
    Color(u16),
    /// Any other directive, with its code character and optional argument.
    Directive { code: char, param: Option<u32> },
}

/// An escape token found in a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapeToken {
    /// Byte offset of the ESC character.
    pub start: usize,
    /// Byte length of the whole token.
    pub len: usize,
    pub kind: TokenKind,
}

impl EscapeToken {
    /// Byte offset one past the end of the token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Width this token contributes to printed text.
    #[must_use]
    pub fn visible_width(&self, icon_width: f32) -> f32 {
        match self.kind {
            TokenKind::Icon(_) => icon_width + ICON_GAP,
            TokenKind::Color(_) | TokenKind::Directive { .. } => 0.0,
        }
    }

    #[must_use]
    pub const fn is_icon(&self) -> bool {
        matches!(self.kind, TokenKind::Icon(_))
    }
}

/// Try to read an escape token starting at byte `index`.
///
/// Returns `None` when `index` is out of range, not on a char boundary, or
/// does not hold ESC.
#[must_use]
pub fn scan(text: &str, index: usize) -> Option<EscapeToken> {
    let rest = text.get(index..)?;
    let mut chars = rest.chars();
    if chars.next()? != ESCAPE {
        return None;
    }

    let Some(code) = chars.next() else {
        // Lone ESC at the end of the string.
        return Some(EscapeToken {
            start: index,
            len: ESCAPE.len_utf8(),
            kind: TokenKind::Directive {
                code: ESCAPE,
                param: None,
            },
        });
    };

    let head_len = ESCAPE.len_utf8() + code.len_utf8();
    let directive = |param| TokenKind::Directive { code, param };

    if !code.is_ascii_alphabetic() {
        return Some(EscapeToken {
            start: index,
            len: head_len,
            kind: directive(None),
        });
    }

    let (kind, len) = match (code, parse_param(&rest[head_len..])) {
        ('I', Some((digits, n, plen))) if digits <= MAX_SHORT_PARAM_DIGITS => {
            (TokenKind::Icon(n as u16), head_len + plen)
        }
        ('C', Some((digits, n, plen))) if digits <= MAX_SHORT_PARAM_DIGITS => {
            (TokenKind::Color(n as u16), head_len + plen)
        }
        // Icon and color codes with an oversized argument leave it as text.
        ('I' | 'C', _) => (directive(None), head_len),
        (_, Some((_, n, plen))) => (directive(Some(n)), head_len + plen),
        (_, None) => (directive(None), head_len),
    };

    Some(EscapeToken {
        start: index,
        len,
        kind,
    })
}

/// Parse a `[digits]` argument at the start of `s`.
///
/// Returns `(digit_count, value, byte_len)`.
fn parse_param(s: &str) -> Option<(usize, u32, usize)> {
    let inner = s.strip_prefix('[')?;
    let digits = inner.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || inner.as_bytes().get(digits) != Some(&b']') {
        return None;
    }
    let value = inner[..digits].parse::<u32>().ok()?;
    Some((digits, value, digits + 2))
}

/// A piece of text: either a run of printable characters or one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Token(EscapeToken),
}

/// Iterator splitting a string into printable runs and escape tokens.
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        if let Some(token) = scan(self.text, self.pos) {
            self.pos = token.end();
            return Some(Segment::Token(token));
        }
        let rest = &self.text[self.pos..];
        let run_len = rest.find(ESCAPE).unwrap_or(rest.len());
        let run = &rest[..run_len];
        self.pos += run_len;
        Some(Segment::Text(run))
    }
}

/// Split `text` into printable runs and escape tokens, in order.
#[must_use]
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Iterate over the escape tokens in `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = EscapeToken> + '_ {
    segments(text).filter_map(|seg| match seg {
        Segment::Token(token) => Some(token),
        Segment::Text(_) => None,
    })
}

/// Number of icon tokens in `text`.
#[must_use]
pub fn count_icons(text: &str) -> usize {
    if !text.contains(ESCAPE) {
        return 0;
    }
    tokens(text).filter(EscapeToken::is_icon).count()
}

/// The printable part of `text`, with every escape token removed.
#[must_use]
pub fn strip_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains(ESCAPE) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for seg in segments(text) {
        if let Segment::Text(run) = seg {
            out.push_str(run);
        }
    }
    Cow::Owned(out)
}
