//! Paper list grouping and badge mapping.

use crate::core::logic::group_by_venue;
use paperwatch_api_models::{Paper, PaperStatus};

/// Group papers by venue, first-seen order, missing venue mapped to the
/// given fallback label.
#[must_use]
pub fn venue_groups(papers: Vec<Paper>, fallback: &str) -> Vec<(String, Vec<Paper>)> {
    group_by_venue(papers, fallback, |paper| paper.venue.clone())
}

/// CSS badge class keyed by status.
#[must_use]
pub const fn status_badge_class(status: PaperStatus) -> &'static str {
    match status {
        PaperStatus::Pending => "badge badge-pending",
        PaperStatus::Reviewed => "badge badge-reviewed",
        PaperStatus::Accepted => "badge badge-accepted",
        PaperStatus::Rejected => "badge badge-rejected",
        PaperStatus::Decided => "badge badge-decided",
        PaperStatus::Unknown => "badge badge-neutral",
    }
}

/// Translation key for the status label.
#[must_use]
pub const fn status_label_key(status: PaperStatus) -> &'static str {
    match status {
        PaperStatus::Pending => "paper_list.status_pending",
        PaperStatus::Reviewed => "paper_list.status_reviewed",
        PaperStatus::Accepted => "paper_list.status_accepted",
        PaperStatus::Rejected => "paper_list.status_rejected",
        PaperStatus::Decided => "paper_list.status_decided",
        PaperStatus::Unknown => "paper_list.status_unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::{status_badge_class, status_label_key, venue_groups};
    use paperwatch_api_models::{Paper, PaperStatus};

    fn paper(id: i64, venue: Option<&str>) -> Paper {
        Paper {
            id,
            openreview_id: format!("paper-{id}"),
            submission_number: None,
            title: Some(format!("Paper {id}")),
            venue: venue.map(ToString::to_string),
            status: PaperStatus::Pending,
            last_checked: None,
            created_at: "2025-01-01T00:00:00".to_string(),
            subscriber_count: Some(1),
            notified_review: Some(false),
            notified_decision: Some(false),
        }
    }

    #[test]
    fn papers_group_by_venue_with_fallback() {
        let groups = venue_groups(
            vec![
                paper(1, Some("ICLR")),
                paper(2, None),
                paper(3, Some("ICLR")),
            ],
            "Unknown Venue",
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "ICLR");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Unknown Venue");
    }

    #[test]
    fn every_status_has_badge_and_label() {
        for status in [
            PaperStatus::Pending,
            PaperStatus::Reviewed,
            PaperStatus::Accepted,
            PaperStatus::Rejected,
            PaperStatus::Decided,
            PaperStatus::Unknown,
        ] {
            assert!(status_badge_class(status).starts_with("badge"));
            assert!(status_label_key(status).starts_with("paper_list.status_"));
        }
    }
}
