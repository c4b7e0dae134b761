use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named group to which instructors belong
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub id: i32,
    pub name: String,
}

/// Request body for cohort create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortInput {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let cohort = Cohort {
            id: 7,
            name: "Cohort 7".to_string(),
        };
        let value = serde_json::to_value(&cohort).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 7, "name": "Cohort 7" }));
    }
}
