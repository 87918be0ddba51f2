//! Location tracking for error messages.
//!
//! The walk pushes a segment when it descends and pops it on the way back up,
//! so a path is only rendered to text when an error is actually built.
use std::fmt;

use serde::{Deserialize, Serialize};

/// How array indices are rendered.
///
/// `Dotted` gives `items.1.id`, `Bracketed` gives `items[1].id`. A root array
/// index renders as `.1` / `[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStyle {
    #[default]
    Dotted,
    Bracketed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Field(&'a str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub struct FieldPath<'a> {
    style: PathStyle,
    segments: Vec<Segment<'a>>,
}

impl<'a> FieldPath<'a> {
    pub fn root(style: PathStyle) -> Self {
        Self { style, segments: Vec::new() }
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Run `f` with `segment` appended, restoring the path afterwards.
    pub fn scoped<R>(&mut self, segment: Segment<'a>, f: impl FnOnce(&mut Self) -> R) -> R {
        self.segments.push(segment);
        let out = f(self);
        self.segments.pop();
        out
    }

    /// Render this path extended by one more segment, without descending.
    pub fn join(&self, tail: Segment<'_>) -> String {
        let mut out = self.render();
        push_segment(&mut out, self.style, self.is_root(), tail);
        out
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            push_segment(&mut out, self.style, i == 0, *segment);
        }
        out
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_segment(out: &mut String, style: PathStyle, first: bool, segment: Segment<'_>) {
    match (style, segment) {
        (_, Segment::Field(name)) => {
            if !first { out.push('.'); }
            out.push_str(name);
        }
        // indices always carry a separator, even at the root
        (PathStyle::Dotted, Segment::Index(i)) => {
            out.push('.');
            out.push_str(&i.to_string());
        }
        (PathStyle::Bracketed, Segment::Index(i)) => {
            out.push('[');
            out.push_str(&i.to_string());
            out.push(']');
        }
    }
}
