//! Academic record entity

use serde::{Deserialize, Serialize};

/// A college education record tied to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeRecord {
    /// Storage-assigned identifier
    pub id: i64,
    #[serde(flatten)]
    pub fields: RecordDraft,
}

/// The writable columns of a college record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub school_name: String,
    pub degree: String,
    pub period_from: String,
    pub period_to: String,
    pub highest_attained: String,
    pub year_graduated: String,
    pub honors: String,
    pub person_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> RecordDraft {
        RecordDraft {
            school_name: "State University".to_string(),
            degree: "BS Computer Science".to_string(),
            period_from: "2015".to_string(),
            period_to: "2019".to_string(),
            highest_attained: "Bachelor".to_string(),
            year_graduated: "2019".to_string(),
            honors: "Cum Laude".to_string(),
            person_id: 7,
        }
    }

    #[test]
    fn test_record_serialization_flattens_fields() {
        let record = CollegeRecord {
            id: 3,
            fields: sample_draft(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["school_name"], "State University");
        assert_eq!(json["person_id"], 7);
    }
}
