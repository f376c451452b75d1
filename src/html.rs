//! Minimal single-pass HTML event tokenizer.
//!
//! Deliberately naive and tailored to the lottery site's markup: a flat
//! scan that emits open/close/text events with ASCII-lowercased tag and
//! attribute names. No DOM, no error recovery beyond skipping what it
//! cannot parse. Comments, doctype declarations, and raw `<script>` /
//! `<style>` content are consumed without producing tag events.

/// A parsed opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name, ASCII-lowercased.
    pub name: String,
    /// Attributes in document order; names ASCII-lowercased, values verbatim
    /// apart from minimal entity decoding.
    pub attrs: Vec<(String, String)>,
    /// True for `<br/>`-style tags.
    pub self_closing: bool,
}

impl Tag {
    /// Look up an attribute value by (lowercase) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// One tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(Tag),
    /// Closing tag name, ASCII-lowercased.
    Close(String),
    /// Raw text run between tags, entity-decoded but not trimmed.
    Text(String),
}

/// Streaming tokenizer over a full page. Implements `Iterator`, ending
/// when the input is exhausted.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// When set, everything up to this closing-tag prefix is raw text
    /// (script/style content may contain `<` freely).
    raw_until: Option<&'static str>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_until: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume a raw text section (inside script/style) up to its closing
    /// tag. Returns the text if non-empty.
    fn take_raw(&mut self, close: &str) -> Option<String> {
        let rest = self.rest();
        let lower = rest.to_ascii_lowercase();
        let end = lower.find(close).unwrap_or(rest.len());
        let text = &rest[..end];
        self.pos += end;
        self.raw_until = None;
        if text.is_empty() {
            None
        } else {
            Some(decode_entities(text))
        }
    }

    /// Parse an opening tag starting at `pos` (which points at `<`).
    fn take_open_tag(&mut self) -> Option<Event> {
        let bytes = self.input.as_bytes();
        let mut i = self.pos + 1;

        let name_start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        let name = self.input[name_start..i].to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                None => break,
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') => {
                    if bytes.get(i + 1) == Some(&b'>') {
                        self_closing = true;
                        i += 2;
                        break;
                    }
                    i += 1;
                }
                Some(_) => {
                    let attr_start = i;
                    while i < bytes.len()
                        && !bytes[i].is_ascii_whitespace()
                        && !matches!(bytes[i], b'=' | b'>' | b'/')
                    {
                        i += 1;
                    }
                    if i == attr_start {
                        // Unparsable byte; skip it rather than loop forever.
                        i += 1;
                        continue;
                    }
                    let attr_name = self.input[attr_start..i].to_ascii_lowercase();

                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    let mut value = String::new();
                    if bytes.get(i) == Some(&b'=') {
                        i += 1;
                        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                            i += 1;
                        }
                        match bytes.get(i) {
                            Some(&q @ (b'"' | b'\'')) => {
                                i += 1;
                                let val_start = i;
                                while i < bytes.len() && bytes[i] != q {
                                    i += 1;
                                }
                                value = decode_entities(&self.input[val_start..i]);
                                if i < bytes.len() {
                                    i += 1; // closing quote
                                }
                            }
                            _ => {
                                let val_start = i;
                                while i < bytes.len()
                                    && !bytes[i].is_ascii_whitespace()
                                    && bytes[i] != b'>'
                                {
                                    i += 1;
                                }
                                value = decode_entities(&self.input[val_start..i]);
                            }
                        }
                    }
                    attrs.push((attr_name, value));
                }
            }
        }

        self.pos = i;

        if name.is_empty() {
            return None;
        }
        if !self_closing {
            match name.as_str() {
                "script" => self.raw_until = Some("</script"),
                "style" => self.raw_until = Some("</style"),
                _ => {}
            }
        }
        Some(Event::Open(Tag {
            name,
            attrs,
            self_closing,
        }))
    }

    /// Parse a closing tag starting at `pos` (which points at `</`).
    fn take_close_tag(&mut self) -> Option<Event> {
        let bytes = self.input.as_bytes();
        let mut i = self.pos + 2;
        let name_start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        let name = self.input[name_start..i].to_ascii_lowercase();
        while i < bytes.len() && bytes[i] != b'>' {
            i += 1;
        }
        self.pos = (i + 1).min(bytes.len());
        if name.is_empty() {
            None
        } else {
            Some(Event::Close(name))
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if self.pos >= self.input.len() {
                return None;
            }

            if let Some(close) = self.raw_until {
                if let Some(text) = self.take_raw(close) {
                    return Some(Event::Text(text));
                }
                continue;
            }

            let rest = self.rest();
            if let Some(stripped) = rest.strip_prefix('<') {
                if stripped.starts_with("!--") {
                    // Comment: skip to the terminator, or swallow the rest.
                    match rest.find("-->") {
                        Some(end) => self.pos += end + 3,
                        None => self.pos = self.input.len(),
                    }
                    continue;
                }
                if stripped.starts_with('!') || stripped.starts_with('?') {
                    // Doctype / processing instruction: skip to `>`.
                    match rest.find('>') {
                        Some(end) => self.pos += end + 1,
                        None => self.pos = self.input.len(),
                    }
                    continue;
                }
                if stripped.starts_with('/') {
                    match self.take_close_tag() {
                        Some(ev) => return Some(ev),
                        None => continue,
                    }
                }
                if stripped
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                {
                    match self.take_open_tag() {
                        Some(ev) => return Some(ev),
                        None => continue,
                    }
                }
                // Bare `<` in text: emit up to the next real tag start.
                let end = rest[1..]
                    .find('<')
                    .map(|i| i + 1)
                    .unwrap_or(rest.len());
                self.pos += end;
                return Some(Event::Text(decode_entities(&rest[..end])));
            }

            // Plain text run up to the next tag.
            let end = rest.find('<').unwrap_or(rest.len());
            self.pos += end;
            return Some(Event::Text(decode_entities(&rest[..end])));
        }
    }
}

/// Minimal HTML entity decoding: only the entities the lottery pages
/// actually use.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}
