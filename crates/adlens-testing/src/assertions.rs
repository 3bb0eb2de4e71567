//! Assertions over `--format json` command output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

fn campaigns(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["campaigns"]
        .as_array()
        .context("Expected 'content.campaigns' array in JSON")
}

/// Assert that a list result holds `expected` campaigns.
pub fn assert_campaign_count(json: &Value, expected: usize) -> Result<()> {
    let campaigns = campaigns(json)?;
    if campaigns.len() != expected {
        bail!("Expected {} campaigns, got {}", expected, campaigns.len());
    }
    Ok(())
}

/// Assert that every listed campaign has `status`.
pub fn assert_all_status(json: &Value, status: &str) -> Result<()> {
    for (i, campaign) in campaigns(json)?.iter().enumerate() {
        let actual = campaign["status"]
            .as_str()
            .with_context(|| format!("Campaign {} missing status", i))?;
        if actual != status {
            bail!("Campaign {} has status {} but expected {}", i, actual, status);
        }
    }
    Ok(())
}

/// Assert the listed campaign names, in order.
pub fn assert_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = campaigns(json)?
        .iter()
        .map(|c| c["name"].as_str().unwrap_or_default())
        .collect();
    if names != expected {
        bail!("Expected names {:?}, got {:?}", expected, names);
    }
    Ok(())
}

/// Assert that a numeric column is ordered in the given direction.
pub fn assert_sorted_by(json: &Value, field: &str, descending: bool) -> Result<()> {
    let values = campaigns(json)?
        .iter()
        .enumerate()
        .map(|(i, c)| {
            c[field]
                .as_f64()
                .with_context(|| format!("Campaign {} has no numeric '{}'", i, field))
        })
        .collect::<Result<Vec<f64>>>()?;

    for pair in values.windows(2) {
        let ordered = if descending {
            pair[0] >= pair[1]
        } else {
            pair[0] <= pair[1]
        };
        if !ordered {
            bail!("'{}' is not sorted: {:?}", field, values);
        }
    }
    Ok(())
}
