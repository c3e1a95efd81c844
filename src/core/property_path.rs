use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use smallvec::SmallVec;

use crate::error::{StyleError, StyleResult};

/// One step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key written with plotly magic-underscore notation.
    ///
    /// Tokens are the `_`-separated parts of the key. Resolution decides how
    /// many tokens belong to one nested key by looking at the actual object.
    Key(SmallVec<[String; 2]>),
    /// Array index written as `[n]`.
    Index(usize),
}

/// Compound property key resolved against nested trace properties.
///
/// Grammar: `key ('[' index ']')* ('.' key ('[' index ']')*)*`.
///
/// `marker.color` and `marker_color` address the same value. Keys that
/// themselves contain underscores (`error_x`) still resolve because the
/// longest existing key is preferred at every nesting level, with
/// backtracking when a longer key leads nowhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    source: String,
    segments: SmallVec<[PathSegment; 4]>,
}

impl PropertyPath {
    pub fn parse(input: &str) -> StyleResult<Self> {
        if input.is_empty() {
            return Err(invalid(input, "path must not be empty"));
        }

        let mut segments: SmallVec<[PathSegment; 4]> = SmallVec::new();
        for part in input.split('.') {
            let (key, mut indices) = match part.find('[') {
                Some(pos) => part.split_at(pos),
                None => (part, ""),
            };
            if key.is_empty() {
                return Err(invalid(input, "every segment needs a key before indices"));
            }
            if key.contains(']') {
                return Err(invalid(input, "unbalanced `]`"));
            }
            if key.split('_').any(str::is_empty) {
                return Err(invalid(input, "`_` must join two non-empty names"));
            }
            segments.push(PathSegment::Key(
                key.split('_').map(str::to_owned).collect(),
            ));

            while !indices.is_empty() {
                let Some(body) = indices.strip_prefix('[') else {
                    return Err(invalid(input, "unexpected text after index"));
                };
                let Some(close) = body.find(']') else {
                    return Err(invalid(input, "unterminated `[`"));
                };
                let index = body[..close]
                    .parse::<usize>()
                    .map_err(|_| invalid(input, "index must be a non-negative integer"))?;
                segments.push(PathSegment::Index(index));
                indices = &body[close + 1..];
            }
        }

        Ok(Self {
            source: input.to_owned(),
            segments,
        })
    }

    /// Path to the trace display name, the default selector key.
    #[must_use]
    pub fn name() -> Self {
        let mut segments: SmallVec<[PathSegment; 4]> = SmallVec::new();
        segments.push(PathSegment::Key(SmallVec::from_iter(["name".to_owned()])));
        Self {
            source: "name".to_owned(),
            segments,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Resolves the path inside `root`.
    ///
    /// Returns `None` as soon as a key or index is absent or a step hits a
    /// value of the wrong shape.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        resolve_segments(root, &self.segments)
    }
}

fn invalid(path: &str, reason: &str) -> StyleError {
    StyleError::InvalidPropertyPath {
        path: path.to_owned(),
        reason: reason.to_owned(),
    }
}

fn resolve_segments<'a>(value: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(value);
    };
    match first {
        PathSegment::Index(index) => resolve_segments(value.as_array()?.get(*index)?, rest),
        PathSegment::Key(tokens) => resolve_tokens(value, tokens, rest),
    }
}

fn resolve_tokens<'a>(
    value: &'a Value,
    tokens: &[String],
    rest: &[PathSegment],
) -> Option<&'a Value> {
    if tokens.is_empty() {
        return resolve_segments(value, rest);
    }

    let object = value.as_object()?;
    for take in (1..=tokens.len()).rev() {
        let key = tokens[..take].join("_");
        if let Some(child) = object.get(&key) {
            if let Some(found) = resolve_tokens(child, &tokens[take..], rest) {
                return Some(found);
            }
        }
    }
    None
}

impl Default for PropertyPath {
    fn default() -> Self {
        Self::name()
    }
}

impl FromStr for PropertyPath {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PropertyPath {
    type Error = StyleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
