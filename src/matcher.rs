use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::models::RouteDescriptor;

// --- Path Patterns ---

/// Segment
///
/// One piece of a parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the corresponding path segment exactly.
    Literal(String),
    /// Captures the corresponding path segment under this name (spelled `:name`).
    Param(String),
}

/// PathPattern
///
/// Parsed form of a route's pattern string. Two shapes exist:
/// a segment sequence (`/learn/video/:videoId`) or the wildcard (`*`),
/// which matches any path whatsoever and anchors the table's catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Segments(Vec<Segment>),
    Wildcard,
}

/// PathParams
///
/// Captured `:param` values for one match, keyed by parameter name.
pub type PathParams = BTreeMap<String, String>;

impl PathPattern {
    /// Parses a pattern string. Leading/trailing slashes are insignificant;
    /// `/` parses to an empty segment list, matching only the root path.
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            return PathPattern::Wildcard;
        }

        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();

        PathPattern::Segments(segments)
    }

    /// Matches `path` against this pattern, returning the captured parameters
    /// on success. Query strings must be stripped by the caller beforehand.
    pub fn capture(&self, path: &str) -> Option<PathParams> {
        let segments = match self {
            // The wildcard swallows anything, capturing nothing.
            PathPattern::Wildcard => return Some(PathParams::new()),
            PathPattern::Segments(segments) => segments,
        };

        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }

        Some(params)
    }
}

// --- Route Table ---

/// TableError
///
/// Construction-time validation failures. These are the only errors the
/// matching layer can produce: once a table exists, every path resolves to
/// some entry, because the mandatory wildcard backstops the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two descriptors share a `name`.
    DuplicateName(String),
    /// No wildcard entry; unmatched paths would be representable.
    MissingWildcard,
    /// A wildcard appears before the final position, shadowing every
    /// entry declared after it.
    WildcardNotLast(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicateName(name) => {
                write!(f, "duplicate route name '{name}' in table")
            }
            TableError::MissingWildcard => {
                write!(f, "route table has no wildcard catch-all entry")
            }
            TableError::WildcardNotLast(name) => {
                write!(f, "wildcard route '{name}' must be the final table entry")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// RouteMatch
///
/// Result of resolving a concrete path: the matched descriptor plus any
/// captured `:param` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDescriptor,
    pub params: PathParams,
}

/// RouteTable
///
/// The ordered, immutable list of route descriptors with first-match lookup.
/// Ordering is the shadowing guarantee: more specific entries are declared
/// before parameterized ones, and the wildcard sits last, validated at
/// construction rather than re-checked on every resolve.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(PathPattern, RouteDescriptor)>,
}

impl RouteTable {
    /// Validates and builds a table from descriptors in declaration order.
    ///
    /// Rejected shapes: duplicate names, no wildcard, a wildcard anywhere
    /// but the final position.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, TableError> {
        let mut names = HashSet::new();
        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(TableError::DuplicateName(route.name.clone()));
            }
        }

        let entries: Vec<(PathPattern, RouteDescriptor)> = routes
            .into_iter()
            .map(|route| (PathPattern::parse(&route.path), route))
            .collect();

        let last = entries.len().checked_sub(1);
        for (idx, (pattern, route)) in entries.iter().enumerate() {
            if *pattern == PathPattern::Wildcard && Some(idx) != last {
                return Err(TableError::WildcardNotLast(route.name.clone()));
            }
        }

        match entries.last() {
            Some((PathPattern::Wildcard, _)) => Ok(Self { entries }),
            _ => Err(TableError::MissingWildcard),
        }
    }

    /// Resolves `path` (query already stripped) to its first matching entry.
    ///
    /// Total by construction: the final wildcard matches any path, so the
    /// fallback arm is the wildcard entry itself.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        for (pattern, route) in &self.entries[..self.entries.len() - 1] {
            if let Some(params) = pattern.capture(path) {
                return RouteMatch { route, params };
            }
        }

        // Validated in `new`: the last entry is the wildcard.
        let (_, route) = &self.entries[self.entries.len() - 1];
        RouteMatch {
            route,
            params: PathParams::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries.iter().map(|(_, route)| route)
    }
}
