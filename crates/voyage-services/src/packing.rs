//! Packing checklist items, their fixed category taxonomy, and progress math.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use voyage_core::ValidationError;

use crate::expense::RecordId;

/// Closed set of packing categories, used only for grouping on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackingCategory {
    #[default]
    General,
    Hot,
    Cold,
    Beach,
}

impl PackingCategory {
    /// Display order.
    pub const ALL: [PackingCategory; 4] = [
        PackingCategory::General,
        PackingCategory::Hot,
        PackingCategory::Cold,
        PackingCategory::Beach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Beach => "beach",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General items",
            Self::Hot => "Hot climate",
            Self::Cold => "Cold climate",
            Self::Beach => "Beach holiday",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::General => "🎒",
            Self::Hot => "☀️",
            Self::Cold => "❄️",
            Self::Beach => "🏖️",
        }
    }

    /// Next category in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: RecordId,
    pub item: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: PackingCategory,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /packing` and `PUT /packing/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingRequest {
    pub item: String,
    pub category: PackingCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Packing form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackingDraft {
    pub item: String,
    pub category: PackingCategory,
}

impl PackingDraft {
    pub fn from_item(item: &PackingItem) -> Self {
        Self {
            item: item.item.clone(),
            category: item.category,
        }
    }

    pub fn to_request(&self) -> Result<PackingRequest, ValidationError> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err(ValidationError::MissingItemName);
        }

        Ok(PackingRequest {
            item: item.to_string(),
            category: self.category,
            checked: None,
        })
    }
}

/// Checked/total counts for a list of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    pub fn of<'a>(items: impl IntoIterator<Item = &'a PackingItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut acc, item| {
            acc.total += 1;
            if item.checked {
                acc.checked += 1;
            }
            acc
        })
    }

    /// Completion in `[0, 100]`; 0 for an empty list.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.checked as f64 / self.total as f64
    }
}

/// Items of one category, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: PackingCategory,
    pub items: Vec<&'a PackingItem>,
    pub progress: Progress,
}

/// Partition items into the fixed categories, skipping empty ones.
pub fn group_by_category(items: &[PackingItem]) -> Vec<CategoryGroup<'_>> {
    PackingCategory::ALL
        .iter()
        .filter_map(|category| {
            let members: Vec<&PackingItem> =
                items.iter().filter(|i| i.category == *category).collect();
            if members.is_empty() {
                return None;
            }
            let progress = Progress::of(members.iter().copied());
            Some(CategoryGroup {
                category: *category,
                items: members,
                progress,
            })
        })
        .collect()
}

/// The backend stores any category string; anything outside the known set
/// is shown under General rather than failing the whole list.
fn lenient_category<'de, D>(deserializer: D) -> Result<PackingCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let category = value.as_str().and_then(|s| {
        let wanted = s.trim().to_lowercase();
        PackingCategory::ALL.into_iter().find(|c| c.as_str() == wanted)
    });

    Ok(category.unwrap_or_else(|| {
        tracing::debug!("Unknown packing category {} treated as general", value);
        PackingCategory::General
    }))
}
