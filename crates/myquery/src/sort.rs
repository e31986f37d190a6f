//! Sort direction for ORDER BY entries.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction of an ORDER BY entry.
///
/// Parsing a malformed token is a construction-time error, never a silent
/// pass-through:
///
/// ```ignore
/// use myquery::Sort;
///
/// let s: Sort = "desc".parse()?;
/// assert!("descending".parse::<Sort>().is_err());
/// # Ok::<(), myquery::QueryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Ascending, rendered `asc`.
    Asc,
    /// Descending, rendered `desc`.
    Desc,
}

impl Sort {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Sort {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Sort::Asc),
            "desc" => Ok(Sort::Desc),
            _ => Err(QueryError::invalid_sort(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("asc".parse::<Sort>().unwrap(), Sort::Asc);
        assert_eq!("DESC".parse::<Sort>().unwrap(), Sort::Desc);
    }

    #[test]
    fn rejects_malformed_token() {
        let err = "descending".parse::<Sort>().unwrap_err();
        assert_eq!(err, QueryError::InvalidSort("descending".to_string()));
    }

    #[test]
    fn displays_sql_keyword() {
        assert_eq!(Sort::Asc.to_string(), "asc");
        assert_eq!(Sort::Desc.to_string(), "desc");
    }
}
