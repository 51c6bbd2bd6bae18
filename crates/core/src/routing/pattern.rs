use std::fmt;

use thiserror::Error;

/// Error raised when a route pattern is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Patterns are absolute paths.
    #[error("Route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// A `:` segment without a name (e.g. `/movie/:`).
    #[error("Route pattern has an unnamed parameter segment: {0}")]
    EmptyParamName(String),

    /// Only a single `:param` segment is supported per pattern.
    #[error("Route pattern has more than one parameter segment: {0}")]
    TooManyParams(String),
}

/// One `/`-separated piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern such as `/movie/:id`.
///
/// Holds at most one parameter segment, and the parameter name is never
/// empty; both are checked by [`RoutePattern::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        };

        let mut segments = Vec::new();
        let mut params = 0usize;
        for piece in rest.split('/') {
            match piece.strip_prefix(':') {
                Some("") => return Err(PatternError::EmptyParamName(pattern.to_string())),
                Some(name) => {
                    params += 1;
                    if params > 1 {
                        return Err(PatternError::TooManyParams(pattern.to_string()));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(piece.to_string())),
            }
        }

        Ok(Self { raw: pattern.to_string(), segments })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Name of the parameter segment, if the pattern has one.
    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn is_parameterized(&self) -> bool {
        self.param_name().is_some()
    }

    /// Match a path against this pattern segment by segment.
    ///
    /// Segment counts must be equal; literals compare exactly and the
    /// parameter segment accepts any single non-empty segment. Returns the
    /// captured `(name, value)` when the pattern has a parameter, `Some(None)`
    /// on a literal-only match, and `None` when the path does not match.
    pub fn match_segments(&self, path: &str) -> Option<Option<(String, String)>> {
        let rest = path.strip_prefix('/')?;
        let pieces: Vec<&str> = rest.split('/').collect();
        if pieces.len() != self.segments.len() {
            return None;
        }

        let mut captured = None;
        for (segment, piece) in self.segments.iter().zip(pieces) {
            match segment {
                Segment::Literal(literal) if literal == piece => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if piece.is_empty() => return None,
                Segment::Param(name) => captured = Some((name.clone(), piece.to_string())),
            }
        }
        Some(captured)
    }

    /// Fill the parameter segment with `value` to produce a concrete path.
    ///
    /// Returns `None` for an empty value or a value containing `/`, since
    /// neither would resolve back to this pattern.
    pub fn reverse(&self, value: &str) -> Option<String> {
        if !self.is_parameterized() {
            return Some(self.raw.clone());
        }
        if value.is_empty() || value.contains('/') {
            return None;
        }
        let pieces: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.as_str(),
                Segment::Param(_) => value,
            })
            .collect();
        Some(format!("/{}", pieces.join("/")))
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
