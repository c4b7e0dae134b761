use super::order::OrderBy;

/// Composable refinement for the instructor listing. Each refinement is
/// independent and optional; active predicates compose with AND.
///
/// Predicate values are bound as `$n` parameters in the order
/// [cohort_id, search]; the caller binds exactly the values that are set,
/// in that order.
#[derive(Debug, Clone, Default)]
pub struct InstructorFilter {
    pub cohort_id: Option<i32>,
    pub search: Option<String>,
    pub order: Option<OrderBy>,
}

impl InstructorFilter {
    pub fn new(cohort_id: Option<i32>, search: Option<String>, order: Option<OrderBy>) -> Self {
        Self {
            cohort_id,
            search,
            order,
        }
    }

    /// Append WHERE and ORDER BY clauses to a base SELECT over
    /// `instructor i JOIN cohort c`.
    pub fn to_sql(&self, base: &str) -> String {
        let mut sql = base.to_string();
        let mut conditions: Vec<String> = Vec::new();
        let mut next_param = 1;

        if self.cohort_id.is_some() {
            conditions.push(format!("i.cohort_id = ${}", next_param));
            next_param += 1;
        }

        if self.search.is_some() {
            // One bound pattern checked against all three name columns
            conditions.push(format!(
                "(i.last_name ILIKE ${n} OR i.first_name ILIKE ${n} OR i.slack_handle ILIKE ${n})",
                n = next_param
            ));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        if let Some(order) = &self.order {
            sql.push(' ');
            sql.push_str(&order.to_sql());
        }

        sql
    }

    /// The contains-match pattern for the search refinement, with LIKE
    /// metacharacters escaped so the caller text matches literally.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_ref()
            .map(|s| format!("%{}%", escape_like(s)))
    }
}

/// Escape `\`, `%` and `_` for use inside a LIKE/ILIKE pattern
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\\' || c == '%' || c == '_' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::order::{SortDirection, SortKey};

    const BASE: &str = "SELECT * FROM instructor i JOIN cohort c ON c.id = i.cohort_id";

    #[test]
    fn no_refinements_leaves_base_untouched() {
        let filter = InstructorFilter::default();
        assert_eq!(filter.to_sql(BASE), BASE);
        assert!(filter.search_pattern().is_none());
    }

    #[test]
    fn cohort_predicate_binds_first_placeholder() {
        let filter = InstructorFilter::new(Some(3), None, None);
        assert_eq!(filter.to_sql(BASE), format!("{} WHERE i.cohort_id = $1", BASE));
    }

    #[test]
    fn search_reuses_one_placeholder_across_columns() {
        let filter = InstructorFilter::new(None, Some("ada".to_string()), None);
        let sql = filter.to_sql(BASE);
        assert!(sql.contains("i.last_name ILIKE $1"));
        assert!(sql.contains("i.first_name ILIKE $1"));
        assert!(sql.contains("i.slack_handle ILIKE $1"));
        assert!(!sql.contains("$2"));
        assert_eq!(filter.search_pattern().unwrap(), "%ada%");
    }

    #[test]
    fn refinements_compose_conjunctively() {
        let order = OrderBy {
            key: SortKey::LastName,
            direction: SortDirection::Desc,
        };
        let filter = InstructorFilter::new(Some(3), Some("ada".to_string()), Some(order));
        let sql = filter.to_sql(BASE);
        assert!(sql.contains("WHERE i.cohort_id = $1 AND (i.last_name ILIKE $2"));
        assert!(sql.ends_with("ORDER BY i.last_name DESC"));
    }

    #[test]
    fn escapes_like_metacharacters() {
        let filter = InstructorFilter::new(None, Some("50%_a\\b".to_string()), None);
        assert_eq!(filter.search_pattern().unwrap(), "%50\\%\\_a\\\\b%");
    }
}
