use serde::{Deserialize, Serialize};

use super::cohort::Cohort;

/// An instructor referencing exactly one cohort. Joined reads embed the
/// denormalized cohort; writes leave it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub slack_handle: String,
    pub specialty: String,
    pub cohort_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<Cohort>,
}

/// Request body for instructor create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorInput {
    pub first_name: String,
    pub last_name: String,
    pub slack_handle: String,
    pub specialty: String,
    pub cohort_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_with_embedded_cohort() {
        let instructor = Instructor {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            slack_handle: "ada".to_string(),
            specialty: "analytical engines".to_string(),
            cohort_id: 7,
            cohort: Some(Cohort {
                id: 7,
                name: "Cohort 7".to_string(),
            }),
        };

        let value = serde_json::to_value(&instructor).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["slackHandle"], "ada");
        assert_eq!(value["cohortId"], 7);
        assert_eq!(value["cohort"]["name"], "Cohort 7");
    }

    #[test]
    fn omits_cohort_when_not_joined() {
        let instructor = Instructor {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            slack_handle: "ada".to_string(),
            specialty: "analytical engines".to_string(),
            cohort_id: 7,
            cohort: None,
        };

        let value = serde_json::to_value(&instructor).unwrap();
        assert!(value.get("cohort").is_none());
    }

    #[test]
    fn deserializes_camel_case_input() {
        let input: InstructorInput = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","slackHandle":"ab","specialty":"x","cohortId":3}"#,
        )
        .unwrap();
        assert_eq!(input.first_name, "A");
        assert_eq!(input.cohort_id, 3);
    }
}
