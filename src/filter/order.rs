use std::str::FromStr;

use super::error::FilterError;

/// Columns the instructor listing may be sorted by. Caller text is parsed
/// into this enum and the SQL column name is chosen server-side; the text
/// itself never reaches the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    FirstName,
    LastName,
    SlackHandle,
    Specialty,
    CohortId,
}

impl SortKey {
    /// Column expression in the joined instructor query
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortKey::Id => "i.id",
            SortKey::FirstName => "i.first_name",
            SortKey::LastName => "i.last_name",
            SortKey::SlackHandle => "i.slack_handle",
            SortKey::Specialty => "i.specialty",
            SortKey::CohortId => "i.cohort_id",
        }
    }
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the API field names (camelCase) and snake_case
        match s.replace('_', "").to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "firstname" => Ok(SortKey::FirstName),
            "lastname" => Ok(SortKey::LastName),
            "slackhandle" => Ok(SortKey::SlackHandle),
            "specialty" => Ok(SortKey::Specialty),
            "cohortid" => Ok(SortKey::CohortId),
            _ => Err(FilterError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A parsed `orderBy` expression: a sort key plus an optional direction,
/// e.g. "lastName" or "lastName desc".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn to_sql(&self) -> String {
        format!("ORDER BY {} {}", self.key.to_sql(), self.direction.to_sql())
    }
}

impl FromStr for OrderBy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let key = tokens
            .next()
            .ok_or(FilterError::EmptySortExpression)?
            .parse::<SortKey>()?;

        let direction = match tokens.next() {
            None => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(d) => return Err(FilterError::InvalidSortDirection(d.to_string())),
        };

        // Anything after the direction token is not a sort expression
        if let Some(extra) = tokens.next() {
            return Err(FilterError::InvalidSortDirection(extra.to_string()));
        }

        Ok(OrderBy { key, direction })
    }
}
