//! Scanner for `{identifier}` placeholders.
//!
//! An identifier is a non-empty run of ASCII letters, digits and underscores.
//! Anything else between braces (`{}`, `{two words}`, an unclosed `{name`) is
//! plain text.

/// A piece of a template: literal text or a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Token {
        /// Identifier without braces
        name: &'a str,
        /// The placeholder as written, braces included
        raw: &'a str,
    },
}

/// Iterator over the segments of a template, in order.
pub struct Tokens<'a> {
    template: &'a str,
    pos: usize,
}

/// Split a template into text and placeholder segments.
pub fn scan(template: &str) -> Tokens<'_> {
    Tokens { template, pos: 0 }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether `name` could appear as a placeholder identifier
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_word_byte)
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.template.len() {
            return None;
        }

        let bytes = self.template.as_bytes();
        let mut search = self.pos;

        while let Some(offset) = self.template[search..].find('{') {
            let open = search + offset;
            let name_len = bytes[open + 1..]
                .iter()
                .take_while(|b| is_word_byte(**b))
                .count();
            let close = open + 1 + name_len;

            if name_len > 0 && bytes.get(close) == Some(&b'}') {
                // Flush the text before the placeholder first
                if open > self.pos {
                    let text = &self.template[self.pos..open];
                    self.pos = open;
                    return Some(Segment::Text(text));
                }

                self.pos = close + 1;
                return Some(Segment::Token {
                    name: &self.template[open + 1..close],
                    raw: &self.template[open..=close],
                });
            }

            search = open + 1;
        }

        let text = &self.template[self.pos..];
        self.pos = self.template.len();
        Some(Segment::Text(text))
    }
}

/// Distinct placeholder identifiers in first-occurrence order.
pub fn extract_tokens(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();

    for segment in scan(template) {
        if let Segment::Token { name, .. } = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    names
}
