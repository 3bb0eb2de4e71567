use adlens_types::{CampaignRecord, SortDirection, SortKey};
use std::borrow::Borrow;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Natural (ascending) ordering of two records on `key`.
pub fn compare_records(a: &CampaignRecord, b: &CampaignRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Status => compare_text(a.status.as_str(), b.status.as_str()),
        SortKey::Clicks => a.clicks.cmp(&b.clicks),
        SortKey::Cost => a.cost.total_cmp(&b.cost),
        SortKey::Impressions => a.impressions.cmp(&b.impressions),
    }
}

/// Return a new sequence ordered by `key` in `direction`.
///
/// The sort is stable in both directions: records with equal keys keep their
/// relative input order. The input is left untouched.
pub fn sort_records<R>(records: &[R], key: SortKey, direction: SortDirection) -> Vec<R>
where
    R: Borrow<CampaignRecord> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_records(a.borrow(), b.borrow(), key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

// Three-level collation: base letters (accents and case folded away), then
// accents, then case with lowercase first.
fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| folded_case(a).cmp(&folded_case(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
}

fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn folded_case(text: &str) -> String {
    text.nfd().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_types::CampaignStatus::{Active, Paused};

    fn records() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new(1, "Summer Sale", Active, 150, 45.99, 1000),
            CampaignRecord::new(2, "black friday", Paused, 320, 89.50, 2500),
            CampaignRecord::new(3, "Holiday Special", Active, 215, 62.25, 1750),
            CampaignRecord::new(4, "Clearance Event", Paused, 95, 32.40, 800),
            CampaignRecord::new(5, "Flash Sale", Paused, 150, 38.60, 950),
        ]
    }

    fn names(records: &[CampaignRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn ids(records: &[CampaignRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let sorted = sort_records(&records(), SortKey::Name, SortDirection::Ascending);
        assert_eq!(
            names(&sorted),
            vec![
                "black friday",
                "Clearance Event",
                "Flash Sale",
                "Holiday Special",
                "Summer Sale"
            ]
        );
    }

    #[test]
    fn test_case_only_difference_puts_lowercase_first() {
        let input = vec![
            CampaignRecord::new(1, "Promo", Active, 1, 1.0, 10),
            CampaignRecord::new(2, "promo", Active, 1, 1.0, 10),
        ];
        let sorted = sort_records(&input, SortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["promo", "Promo"]);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let input = vec![
            CampaignRecord::new(1, "Zebra Deals", Active, 1, 1.0, 10),
            CampaignRecord::new(2, "Été Promo", Active, 1, 1.0, 10),
            CampaignRecord::new(3, "Autumn Push", Active, 1, 1.0, 10),
            CampaignRecord::new(4, "ete promo", Active, 1, 1.0, 10),
        ];
        let sorted = sort_records(&input, SortKey::Name, SortDirection::Ascending);
        assert_eq!(
            names(&sorted),
            vec!["Autumn Push", "ete promo", "Été Promo", "Zebra Deals"]
        );
    }

    #[test]
    fn test_precomposed_and_decomposed_accents_compare_equal_but_stable() {
        let composed = "Caf\u{e9}";
        let decomposed = "Cafe\u{301}";
        assert_eq!(compare_text(composed, decomposed), Ordering::Equal);
        assert_eq!(compare_text("cafe", composed), Ordering::Less);
    }

    #[test]
    fn test_sort_by_cost_numeric() {
        let sorted = sort_records(&records(), SortKey::Cost, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["4", "5", "1", "3", "2"]);

        let sorted = sort_records(&records(), SortKey::Cost, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec!["2", "3", "1", "5", "4"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // Records 1 and 5 both have 150 clicks.
        let asc = sort_records(&records(), SortKey::Clicks, SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["4", "1", "5", "3", "2"]);

        let desc = sort_records(&records(), SortKey::Clicks, SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["2", "3", "1", "5", "4"]);
    }

    #[test]
    fn test_sort_by_status_is_stable() {
        let sorted = sort_records(&records(), SortKey::Status, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["1", "3", "2", "4", "5"]);
    }

    #[test]
    fn test_descending_reverses_when_no_ties() {
        let input = records();
        let asc = sort_records(&input, SortKey::Impressions, SortDirection::Ascending);
        let mut desc = sort_records(&input, SortKey::Impressions, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_permutation_and_idempotent() {
        let input = records();
        for key in SortKey::ALL {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let once = sort_records(&input, key, direction);
                let twice = sort_records(&once, key, direction);
                assert_eq!(once, twice, "idempotence for {key} {direction}");

                let mut a = ids(&once);
                let mut b = ids(&input);
                a.sort();
                b.sort();
                assert_eq!(a, b, "permutation for {key} {direction}");
            }
        }
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = records();
        let before = input.clone();
        let _ = sort_records(&input, SortKey::Clicks, SortDirection::Descending);
        assert_eq!(input, before);
    }
}
