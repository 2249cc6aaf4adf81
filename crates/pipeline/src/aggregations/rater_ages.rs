//! Ages of the people behind the ratings.

use crate::view::FilteredView;
use data_loader::UserId;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaterAge {
    pub user_id: UserId,
    pub age: f64,
}

/// One age per rater, in order of each rater's first row.
///
/// Raters are deduplicated before ages are read: only a rater's first row
/// counts, and if that row has no age the rater is left out. Missing ages
/// are never imputed.
pub fn rater_ages(view: &FilteredView<'_>) -> Vec<RaterAge> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ages = Vec::new();
    for &row in view.rows() {
        if !seen.insert(row.user_id.as_str()) {
            continue;
        }
        if let Some(age) = row.age {
            ages.push(RaterAge {
                user_id: row.user_id.clone(),
                age,
            });
        }
    }
    ages
}
