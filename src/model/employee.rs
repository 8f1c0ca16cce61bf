use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee record as it appears on the wire. Timestamps are assigned by the
/// data-access layer; `salary` is text in the stored documents and stays text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub location: String,
    pub position: String,
    pub salary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for inserting a new employee. Every field is required and must be
/// non-empty; `validate` is the write-time schema check owned by the store,
/// independent of any handler-level presence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub location: String,
    pub position: String,
    pub salary: String,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("location", &self.location),
            ("position", &self.position),
            ("salary", &self.salary),
        ] {
            if value.is_empty() {
                return Err(format!("field `{field}` is required"));
            }
        }
        Ok(())
    }
}

/// Partial update applied by id. Absent fields keep their stored value; a
/// field that is provided must be non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
}

impl EmployeeUpdate {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("location", &self.location),
            ("position", &self.position),
            ("salary", &self.salary),
        ] {
            if let Some(value) = value
                && value.is_empty()
            {
                return Err(format!("field `{field}` must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> NewEmployee {
        NewEmployee {
            name: "Ann".to_string(),
            location: "NYC".to_string(),
            position: "Engineer".to_string(),
            salary: "100000".to_string(),
        }
    }

    #[test]
    fn new_employee_with_all_fields_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn new_employee_rejects_empty_fields() {
        for field in ["name", "location", "position", "salary"] {
            let mut new = sample();
            match field {
                "name" => new.name.clear(),
                "location" => new.location.clear(),
                "position" => new.position.clear(),
                _ => new.salary.clear(),
            }
            let err = new.validate().unwrap_err();
            assert!(err.contains(field), "unexpected message: {err}");
        }
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        assert!(EmployeeUpdate::default().validate().is_ok());
    }

    #[test]
    fn update_rejects_provided_empty_field() {
        let update = EmployeeUpdate {
            salary: Some(String::new()),
            ..EmployeeUpdate::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn employee_serializes_timestamps_in_camel_case() {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let employee = Employee {
            id: "657f1d2e9b3c4a5d6e7f8a9b".to_string(),
            name: "Ann".to_string(),
            location: "NYC".to_string(),
            position: "Engineer".to_string(),
            salary: "100000".to_string(),
            created_at: created,
            updated_at: created,
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
