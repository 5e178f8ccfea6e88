//! Expense records, the stats snapshot, and the expense form draft.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use voyage_core::ValidationError;

/// Backend-assigned identifier for expenses and packing items.
pub type RecordId = i64;

/// One logged trip's cost entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub country: String,
    pub days: u32,
    /// Non-numeric values from the backend decode as 0.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cost: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body for `POST /expenses` and `PUT /expenses/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRequest {
    pub country: String,
    pub days: u32,
    pub cost: f64,
    pub note: String,
}

/// Backend-computed aggregate over all expense records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStats {
    pub total_trips: u32,
    pub total_days: u64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_cost: f64,
    #[serde(default)]
    pub country_stats: BTreeMap<String, CountryStats>,
}

/// Per-country slice of the stats snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryStats {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cost: f64,
    pub days: u64,
    pub count: u32,
}

/// Expense form contents exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub country: String,
    pub days: String,
    pub cost: String,
    pub note: String,
}

impl ExpenseDraft {
    /// Populate a draft from an existing record (edit flow).
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            country: expense.country.clone(),
            days: expense.days.to_string(),
            cost: expense.cost.to_string(),
            note: expense.note.clone().unwrap_or_default(),
        }
    }

    /// Check required fields, then parse the numeric ones.
    pub fn to_request(&self) -> Result<ExpenseRequest, ValidationError> {
        let missing: Vec<&'static str> = [
            ("country", &self.country),
            ("days", &self.days),
            ("cost", &self.cost),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let days = self
            .days
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| ValidationError::InvalidNumber {
                field: "days",
                value: self.days.clone(),
            })?;

        let cost = self
            .cost
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or_else(|| ValidationError::InvalidNumber {
                field: "cost",
                value: self.cost.clone(),
            })?;

        Ok(ExpenseRequest {
            country: self.country.trim().to_string(),
            days,
            cost,
            note: self.note.trim().to_string(),
        })
    }
}

/// Sum of every record's cost; non-numeric costs contribute 0.
pub fn total_cost(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .map(|e| e.cost)
        .filter(|c| c.is_finite())
        .sum()
}

/// Average cost per record, `None` for an empty list.
pub fn average_cost(expenses: &[Expense]) -> Option<f64> {
    if expenses.is_empty() {
        return None;
    }
    Some(total_cost(expenses) / expenses.len() as f64)
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(match amount {
        Some(a) if a.is_finite() => a,
        _ => {
            tracing::debug!("Non-numeric amount {} treated as 0", value);
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: RecordId, cost: f64) -> Expense {
        Expense {
            id,
            country: "JP".to_string(),
            days: 3,
            cost,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_total_and_average() {
        let list = vec![expense(1, 100.0), expense(2, 250.5), expense(3, 49.5)];
        assert_eq!(total_cost(&list), 400.0);
        assert_eq!(average_cost(&list), Some(400.0 / 3.0));
    }

    #[test]
    fn test_empty_list_has_no_average() {
        assert_eq!(total_cost(&[]), 0.0);
        assert_eq!(average_cost(&[]), None);
    }

    #[test]
    fn test_non_numeric_cost_counts_as_zero() {
        let json = serde_json::json!([
            {"id": 1, "country": "JP", "days": 5, "cost": 20000},
            {"id": 2, "country": "KR", "days": 2, "cost": "abc"},
            {"id": 3, "country": "TH", "days": 4, "cost": "1500.5"},
            {"id": 4, "country": "SG", "days": 1, "cost": null}
        ]);

        let list: Vec<Expense> = serde_json::from_value(json).unwrap();

        assert_eq!(list[1].cost, 0.0);
        assert_eq!(list[3].cost, 0.0);
        assert_eq!(total_cost(&list), 21500.5);
    }

    #[test]
    fn test_backend_timestamps_decode() {
        let json = serde_json::json!({
            "id": 7,
            "country": "FR",
            "days": 6,
            "cost": 42000.0,
            "note": "Paris",
            "created_at": "2026-03-01T10:15:30.123456",
            "updated_at": "2026-03-02T08:00:00"
        });

        let e: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(e.note.as_deref(), Some("Paris"));
        assert!(e.created_at.is_some());
        assert!(e.updated_at.is_some());
    }

    #[test]
    fn test_draft_requires_country_days_cost() {
        let draft = ExpenseDraft {
            country: "JP".to_string(),
            days: "5".to_string(),
            cost: String::new(),
            note: String::new(),
        };

        assert_eq!(
            draft.to_request(),
            Err(ValidationError::MissingFields(vec!["cost"]))
        );
    }

    #[test]
    fn test_draft_rejects_non_numeric_days() {
        let draft = ExpenseDraft {
            country: "JP".to_string(),
            days: "five".to_string(),
            cost: "100".to_string(),
            note: String::new(),
        };

        assert!(matches!(
            draft.to_request(),
            Err(ValidationError::InvalidNumber { field: "days", .. })
        ));
    }

    #[test]
    fn test_draft_round_trips_through_edit() {
        let mut e = expense(9, 20000.0);
        e.note = Some("cherry blossoms".to_string());

        let draft = ExpenseDraft::from_expense(&e);
        assert_eq!(draft.cost, "20000");

        let request = draft.to_request().unwrap();
        assert_eq!(request.days, 3);
        assert_eq!(request.cost, 20000.0);
        assert_eq!(request.note, "cherry blossoms");
    }

    #[test]
    fn test_request_serializes_backend_shape() {
        let request = ExpenseRequest {
            country: "JP".to_string(),
            days: 5,
            cost: 20000.0,
            note: String::new(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"country": "JP", "days": 5, "cost": 20000.0, "note": ""})
        );
    }

    #[test]
    fn test_stats_with_country_breakdown() {
        let json = serde_json::json!({
            "total_trips": 2,
            "total_days": 9,
            "total_cost": 50000.0,
            "country_stats": {
                "KR": {"cost": 30000.0, "days": 4, "count": 1},
                "JP": {"cost": 20000.0, "days": 5, "count": 1}
            }
        });

        let stats: ExpenseStats = serde_json::from_value(json).unwrap();
        let countries: Vec<&String> = stats.country_stats.keys().collect();
        assert_eq!(countries, vec!["JP", "KR"]);
        assert_eq!(stats.total_days, 9);
    }
}
