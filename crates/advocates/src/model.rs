//! Advocate record shapes
//!
//! `AdvocateRow` is what the store hands back, `Advocate` is what goes over
//! the wire and what the listing view works with.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A row of the `advocates` table
#[derive(Debug, Clone, PartialEq)]
pub struct AdvocateRow {
  pub id: i64,
  pub first_name: String,
  pub last_name: String,
  pub city: String,
  pub degree: String,
  pub specialties: Vec<String>,
  pub years_of_experience: i64,
  pub phone_number: i64,
  pub created_at: DateTime<Utc>,
}

/// Insert shape for the `advocates` table
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdvocate {
  pub first_name: String,
  pub last_name: String,
  pub city: String,
  pub degree: String,
  pub specialties: Vec<String>,
  pub years_of_experience: i64,
  pub phone_number: i64,
}

/// Display record served by `GET /api/advocates`
///
/// Numeric columns travel as their decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
  pub first_name: String,
  pub last_name: String,
  pub city: String,
  pub degree: String,
  pub specialties: Vec<String>,
  pub years_of_experience: String,
  pub phone_number: String,
}

impl Advocate {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

impl From<AdvocateRow> for Advocate {
  fn from(row: AdvocateRow) -> Self {
    Self {
      first_name: row.first_name,
      last_name: row.last_name,
      city: row.city,
      degree: row.degree,
      specialties: row.specialties,
      years_of_experience: row.years_of_experience.to_string(),
      phone_number: row.phone_number.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row() -> AdvocateRow {
    AdvocateRow {
      id: 7,
      first_name: "Jane".to_string(),
      last_name: "Doe".to_string(),
      city: "Austin".to_string(),
      degree: "MD".to_string(),
      specialties: vec!["Cardiology".to_string(), "Sleep issues".to_string()],
      years_of_experience: 12,
      phone_number: 5551234567,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn test_row_reshapes_numeric_fields_to_text() {
    let advocate = Advocate::from(row());

    assert_eq!(advocate.years_of_experience, "12");
    assert_eq!(advocate.phone_number, "5551234567");
    assert_eq!(advocate.specialties, vec!["Cardiology", "Sleep issues"]);
    assert_eq!(advocate.full_name(), "Jane Doe");
  }

  #[test]
  fn test_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(Advocate::from(row())).unwrap();

    assert_eq!(json["firstName"], "Jane");
    assert_eq!(json["lastName"], "Doe");
    assert_eq!(json["yearsOfExperience"], "12");
    assert_eq!(json["phoneNumber"], "5551234567");
    assert!(json.get("id").is_none());
    assert!(json.get("created_at").is_none());
  }
}
