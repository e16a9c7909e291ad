use regex::Regex;
use relgraph_core::error::{ErrorCode, RelationGraphError};
use relgraph_core::model::Node;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAME_PREFIX: &str = "name:";
const VALUE_PREFIX: &str = "value:";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid search pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RelationGraphError for FilterError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Value,
}

impl SearchField {
    fn read<'a>(&self, node: &'a Node) -> &'a str {
        match self {
            SearchField::Name => &node.name,
            SearchField::Value => &node.value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Criterion {
    pub field: SearchField,
    pub pattern: Regex,
}

impl Criterion {
    fn compile(field: SearchField, text: &str) -> Result<Self, FilterError> {
        let text = text.trim();
        let pattern = Regex::new(text).map_err(|e| FilterError::InvalidPattern {
            pattern: text.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { field, pattern })
    }

    /// An empty field never matches, even against an empty pattern.
    pub fn matches(&self, node: &Node) -> bool {
        let field = self.field.read(node);
        !field.is_empty() && self.pattern.is_match(&field.to_lowercase())
    }
}

/// A parsed search box entry.
///
/// The text after an optional `name:` or `value:` prefix is a regular
/// expression, not a literal; callers wanting a literal match must escape it
/// (for instance with [`regex::escape`]). Matching is case-insensitive: the
/// whole query and the compared field are lowercased first.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Empty input: show everything.
    Reset,
    /// Criteria tried in order; the first match wins.
    Match(Vec<Criterion>),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        if raw.is_empty() {
            return Ok(SearchQuery::Reset);
        }

        let folded = raw.to_lowercase();
        let criteria = if let Some(rest) = folded.strip_prefix(NAME_PREFIX) {
            vec![Criterion::compile(SearchField::Name, rest)?]
        } else if let Some(rest) = folded.strip_prefix(VALUE_PREFIX) {
            vec![Criterion::compile(SearchField::Value, rest)?]
        } else {
            vec![
                Criterion::compile(SearchField::Name, &folded)?,
                Criterion::compile(SearchField::Value, &folded)?,
            ]
        };
        Ok(SearchQuery::Match(criteria))
    }

    pub fn fields(&self) -> Vec<SearchField> {
        match self {
            SearchQuery::Reset => Vec::new(),
            SearchQuery::Match(criteria) => criteria.iter().map(|c| c.field).collect(),
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        match self {
            SearchQuery::Reset => true,
            SearchQuery::Match(criteria) => criteria.iter().any(|criterion| criterion.matches(node)),
        }
    }
}
