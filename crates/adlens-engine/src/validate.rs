use adlens_types::{CampaignRecord, Error, Result};
use std::collections::HashSet;

/// Check collection-level invariants of a fetched record set.
///
/// Ids must be unique, names non-empty and costs finite and non-negative.
pub fn validate_collection(records: &[CampaignRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(Error::Invalid(format!(
                "record {} (id {}) has an empty name",
                index, record.id
            )));
        }
        if !record.cost.is_finite() || record.cost < 0.0 {
            return Err(Error::Invalid(format!(
                "record {} (id {}) has a negative or non-finite cost {}",
                index, record.id, record.cost
            )));
        }
        if !seen.insert(&record.id) {
            return Err(Error::Invalid(format!(
                "duplicate campaign id {}",
                record.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_types::CampaignStatus::Active;

    #[test]
    fn test_accepts_unique_ids() {
        let records = vec![
            CampaignRecord::new(1, "A", Active, 1, 1.0, 10),
            CampaignRecord::new("1", "B", Active, 1, 1.0, 10),
        ];
        assert!(validate_collection(&records).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let records = vec![
            CampaignRecord::new(7, "A", Active, 1, 1.0, 10),
            CampaignRecord::new(7, "B", Active, 1, 1.0, 10),
        ];
        let err = validate_collection(&records).unwrap_err();
        assert!(err.to_string().contains("duplicate campaign id 7"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let records = vec![CampaignRecord::new(1, " ", Active, 1, 1.0, 10)];
        assert!(validate_collection(&records).is_err());
    }

    #[test]
    fn test_rejects_negative_cost() {
        let json = r#"[{"id":1,"name":"Refund","status":"Active","clicks":3,"cost":-5.0,"impressions":10}]"#;
        let records: Vec<CampaignRecord> = serde_json::from_str(json).unwrap();

        let err = validate_collection(&records).unwrap_err();
        assert!(err.to_string().contains("negative or non-finite cost -5"));
    }

    #[test]
    fn test_accepts_zero_cost() {
        let records = vec![CampaignRecord::new(1, "Free", Active, 0, 0.0, 0)];
        assert!(validate_collection(&records).is_ok());
    }
}
