use regex::Regex;

use crate::{ImgHeaderError, ImgHeaderResult};

/// Full-string regex predicate over root-relative paths.
///
/// The pattern is compiled once. A candidate matches only if the whole string
/// satisfies it, so `b\.png` does not match `/sub/b.png`.
#[derive(Clone, Debug)]
pub struct PathMatcher {
    source: String,
    anchored: Regex,
}

impl PathMatcher {
    /// Compile `pattern`, failing with [`ImgHeaderError::InvalidPattern`] on bad syntax.
    pub fn new(pattern: &str) -> ImgHeaderResult<Self> {
        let invalid = |source| ImgHeaderError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        };

        // Compile unanchored first so that inputs like `a)(b` cannot become valid
        // once wrapped in a group.
        Regex::new(pattern).map_err(invalid)?;
        let anchored = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;

        Ok(Self {
            source: pattern.to_owned(),
            anchored,
        })
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `candidate` matches the pattern from start to end.
    pub fn matches(&self, candidate: &str) -> bool {
        self.anchored.is_match(candidate)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scan/matcher.rs"]
mod tests;
