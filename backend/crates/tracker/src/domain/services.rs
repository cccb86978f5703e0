//! Domain Services
//!
//! Pure aggregation over a user's applications.

use crate::domain::value_objects::{ApplicationStatus, StatusCategory};

/// Per-category counts of one user's applications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: u64,
    pub applied: u64,
    pub interview: u64,
    pub offer: u64,
    pub rejected: u64,
    pub no_response: u64,
}

impl Summary {
    /// Sum of the five category counts. Never exceeds `total`.
    pub fn category_sum(&self) -> u64 {
        self.applied + self.interview + self.offer + self.rejected + self.no_response
    }

    fn bump(&mut self, category: StatusCategory) {
        let slot = match category {
            StatusCategory::Applied => &mut self.applied,
            StatusCategory::Interview => &mut self.interview,
            StatusCategory::Offer => &mut self.offer,
            StatusCategory::Rejected => &mut self.rejected,
            StatusCategory::NoResponse => &mut self.no_response,
        };
        *slot += 1;
    }
}

/// Count statuses into the fixed categories.
///
/// Every status adds to `total`; statuses outside the five categories
/// add to nothing else.
pub fn tally<'a, I>(statuses: I) -> Summary
where
    I: IntoIterator<Item = &'a ApplicationStatus>,
{
    let mut summary = Summary::default();
    for status in statuses {
        summary.total += 1;
        if let Some(category) = status.category() {
            summary.bump(category);
        }
    }
    summary
}
