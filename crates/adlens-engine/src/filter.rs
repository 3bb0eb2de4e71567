use adlens_types::{CampaignRecord, StatusFilter};
use std::borrow::Borrow;

/// Restrict `records` to those matching `status`, preserving input order.
///
/// `StatusFilter::All` yields every record unchanged. Works on owned records,
/// references, or shared `Arc<CampaignRecord>` handles alike.
pub fn filter_by_status<R>(records: &[R], status: StatusFilter) -> Vec<R>
where
    R: Borrow<CampaignRecord> + Clone,
{
    if status == StatusFilter::All {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| status.matches((*record).borrow().status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_types::CampaignStatus::{Active, Paused};

    fn records() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new(1, "Summer Sale", Active, 150, 45.99, 1000),
            CampaignRecord::new(2, "Black Friday", Paused, 320, 89.50, 2500),
            CampaignRecord::new(3, "Holiday Special", Active, 215, 62.25, 1750),
            CampaignRecord::new(4, "Clearance Event", Paused, 95, 32.40, 800),
        ]
    }

    #[test]
    fn test_all_returns_input_unchanged() {
        let input = records();
        assert_eq!(filter_by_status(&input, StatusFilter::All), input);
    }

    #[test]
    fn test_filter_keeps_only_matching_status_in_order() {
        let input = records();
        let active = filter_by_status(&input, StatusFilter::Active);

        let names: Vec<&str> = active.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Summer Sale", "Holiday Special"]);
        assert!(active.iter().all(|r| r.status == Active));

        let paused = filter_by_status(&input, StatusFilter::Paused);
        let ids: Vec<String> = paused.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_filter_is_subsequence_of_input() {
        let input = records();
        let filtered = filter_by_status(&input, StatusFilter::Paused);

        let mut cursor = input.iter();
        for record in &filtered {
            assert!(cursor.any(|candidate| candidate == record));
        }
    }

    #[test]
    fn test_filter_works_on_references() {
        let input = records();
        let refs: Vec<&CampaignRecord> = input.iter().collect();
        let active = filter_by_status(&refs, StatusFilter::Active);
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let empty: Vec<CampaignRecord> = Vec::new();
        assert!(filter_by_status(&empty, StatusFilter::Active).is_empty());
        assert!(filter_by_status(&empty, StatusFilter::All).is_empty());
    }
}
