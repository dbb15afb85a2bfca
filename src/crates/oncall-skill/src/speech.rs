//! Spoken output with pronunciation hints.
//!
//! A [`Speech`] is a sequence of plain text, nouns and pauses. It renders to
//! SSML for the voice platform and to plain text for cards and logs.

use std::fmt;

/// Pause length for `<break>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakStrength {
    Weak,
    Strong,
}

impl BreakStrength {
    fn as_str(self) -> &'static str {
        match self {
            BreakStrength::Weak => "weak",
            BreakStrength::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    /// Named entity, pronounced as a noun.
    Noun(String),
    Break(BreakStrength),
}

/// An utterance under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speech {
    segments: Vec<Segment>,
}

impl Speech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speech consisting of a single run of text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn noun(mut self, word: impl Into<String>) -> Self {
        self.push_noun(word);
        self
    }

    pub fn pause(mut self, strength: BreakStrength) -> Self {
        self.segments.push(Segment::Break(strength));
        self
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::Text(text));
        }
    }

    pub fn push_noun(&mut self, word: impl Into<String>) {
        self.segments.push(Segment::Noun(word.into()));
    }

    pub fn push_pause(&mut self, strength: BreakStrength) {
        self.segments.push(Segment::Break(strength));
    }

    pub fn append(&mut self, other: Speech) {
        self.segments.extend(other.segments);
    }

    /// Append `items` separated by `", "`, with `conjunction` before the
    /// last item when there are two or more.
    pub fn push_list(&mut self, items: Vec<Speech>, conjunction: &str) {
        let count = items.len();
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.push_text(", ");
            }
            if count >= 2 && index == count - 1 {
                self.push_text(format!("{} ", conjunction));
            }
            self.append(item);
        }
    }

    /// SSML body, without the enclosing `<speak>` element.
    pub fn to_ssml(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(&escape(text)),
                Segment::Noun(word) => {
                    out.push_str("<w role=\"ivona:NN\">");
                    out.push_str(&escape(word));
                    out.push_str("</w>");
                }
                Segment::Break(strength) => {
                    out.push_str("<break strength=\"");
                    out.push_str(strength.as_str());
                    out.push_str("\"/>");
                }
            }
        }
        out
    }

    pub fn to_plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Text(text) | Segment::Noun(text) => Some(text.as_str()),
                Segment::Break(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Speech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
