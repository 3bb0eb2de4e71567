//! Console commands over file and demo sources.

use adlens_testing::{TestWorld, assertions, fixtures};
use anyhow::Result;

const SOURCE: &str = "campaigns.json";

fn world_with(records: &[adlens_types::CampaignRecord]) -> TestWorld {
    TestWorld::new().with_campaigns(SOURCE, records)
}

#[test]
fn test_list_sorts_by_name_by_default() -> Result<()> {
    let world = world_with(&fixtures::mixed());

    let result = world.run(&["--source", SOURCE, "--format", "json", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_names(
        &json,
        &["Black Friday", "Cyber Monday", "Product Launch", "Summer Sale"],
    )?;
    assert_eq!(json["content"]["total_count"], 4);
    assert_eq!(json["content"]["sort_key"], "name");
    assert_eq!(json["content"]["sort_direction"], "ascending");
    Ok(())
}

#[test]
fn test_list_filters_then_sorts() -> Result<()> {
    let world = world_with(&fixtures::mixed());

    let result = world.run(&[
        "--source", SOURCE, "--format", "json", "list", "--status", "active", "--sort", "clicks",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_campaign_count(&json, 3)?;
    assertions::assert_all_status(&json, "Active")?;
    assertions::assert_sorted_by(&json, "clicks", false)?;
    assertions::assert_names(&json, &["Product Launch", "Summer Sale", "Cyber Monday"])?;
    assert_eq!(json["badge"]["label"], "3 campaigns of 4");
    Ok(())
}

#[test]
fn test_list_desc_reverses_order() -> Result<()> {
    let world = world_with(&fixtures::mixed());

    let result = world.run(&[
        "--source", SOURCE, "--format", "json", "list", "--sort", "cost", "--desc",
    ])?;

    let json = result.json()?;
    assertions::assert_sorted_by(&json, "cost", true)?;
    assert_eq!(json["content"]["campaigns"][0]["name"], "Cyber Monday");
    Ok(())
}

#[test]
fn test_list_quiet_prints_ids_only() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "--demo", "list", "--status", "paused", "--sort", "clicks", "--quiet",
    ])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "5\n9\n7\n2\n");
    Ok(())
}

#[test]
fn test_list_table_shows_missing_ctr() -> Result<()> {
    let world = world_with(&fixtures::mixed());

    let result = world.run(&["--source", SOURCE, "list"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("4 campaigns"));
    assert!(stdout.contains("Product Launch"));
    assert!(stdout.contains("—"), "zero impressions should render a dash");
    assert!(stdout.contains("Showing 4 of 4 campaigns"));
    Ok(())
}

#[test]
fn test_list_with_config_defaults() -> Result<()> {
    let world = world_with(&fixtures::mixed());
    world.write_config(
        r#"
[view]
status_filter = "paused"
sort_key = "clicks"
sort_direction = "descending"
"#,
    )?;

    let result = world.run(&["--source", SOURCE, "--format", "json", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_names(&json, &["Black Friday"])?;
    assert_eq!(json["content"]["status_filter"], "paused");
    Ok(())
}

#[test]
fn test_summary_totals() -> Result<()> {
    let world = world_with(&fixtures::pair());

    let result = world.run(&["--source", SOURCE, "--format", "json", "summary"])?;

    assert!(result.success());
    let json = result.json()?;
    let content = &json["content"];
    assert_eq!(content["total_clicks"], 470);
    assert_eq!(content["total_impressions"], 3500);
    let cost = content["total_cost"].as_f64().unwrap();
    assert!((cost - 135.49).abs() < 1e-9);
    let ctr = content["ctr"].as_f64().unwrap();
    assert!((ctr - 13.428571).abs() < 1e-4);
    Ok(())
}

#[test]
fn test_summary_text() -> Result<()> {
    let world = world_with(&fixtures::pair());

    let result = world.run(&["--source", SOURCE, "summary", "--verbose"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("Total Clicks               470"));
    assert!(stdout.contains("Total Cost             $135.49"));
    assert!(stdout.contains("Overall CTR             13.43%"));
    Ok(())
}

#[test]
fn test_summary_of_empty_collection() -> Result<()> {
    let world = world_with(&[]);

    let result = world.run(&["--source", SOURCE, "--format", "json", "summary"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["total_clicks"], 0);
    assert!(json["content"]["ctr"].is_null());
    assert!(json["content"]["cpc"].is_null());
    assert_eq!(json["badge"]["label"], "No campaigns");
    Ok(())
}

#[test]
fn test_insights_best_performer() -> Result<()> {
    let world = world_with(&fixtures::pair());

    let result = world.run(&["--source", SOURCE, "--format", "json", "insights"])?;

    assert!(result.success());
    let json = result.json()?;
    let best = &json["content"]["best_performer"];
    assert_eq!(best["name"], "Summer Sale");
    assert_eq!(best["ctr"], 15.0);
    let distribution = json["content"]["status_distribution"].as_array().unwrap();
    assert_eq!(distribution[0]["status"], "Active");
    assert_eq!(distribution[0]["count"], 1);
    assert_eq!(distribution[1]["status"], "Paused");
    Ok(())
}

#[test]
fn test_insights_ignore_list_filters() -> Result<()> {
    let world = world_with(&fixtures::mixed());
    world.write_config("[view]\nstatus_filter = \"paused\"\n")?;

    let result = world.run(&["--source", SOURCE, "--format", "json", "insights"])?;

    let json = result.json()?;
    assert_eq!(json["content"]["summary"]["campaign_count"], 4);
    assert_eq!(json["content"]["performance"].as_array().unwrap().len(), 4);
    Ok(())
}

#[test]
fn test_show_by_numeric_and_text_id() -> Result<()> {
    let world = world_with(&fixtures::mixed());

    let result = world.run(&["--source", SOURCE, "show", "2"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Black Friday (#2)"));

    let result = world.run(&["--source", SOURCE, "show", "launch-7"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Product Launch (#launch-7)"));
    Ok(())
}

#[test]
fn test_show_missing_campaign_fails() -> Result<()> {
    let world = world_with(&fixtures::pair());

    let result = world.run(&["--source", SOURCE, "show", "99"])?;

    assert!(!result.success());
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Error: Campaign not found: 99"));
    Ok(())
}

#[test]
fn test_unreadable_source_fails_load() -> Result<()> {
    let world = TestWorld::new();
    world.write_file(SOURCE, "{ not json")?;

    let result = world.run(&["--source", SOURCE, "list"])?;

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Failed to load campaigns from campaigns.json"));
    Ok(())
}

#[test]
fn test_duplicate_ids_fail_load() -> Result<()> {
    let mut records = fixtures::pair();
    records[1].id = records[0].id.clone();
    let world = world_with(&records);

    let result = world.run(&["--source", SOURCE, "summary"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("duplicate campaign id 1"));
    Ok(())
}

#[test]
fn test_create_needs_an_endpoint() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--demo", "create", "--name", "Autumn Push"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("read-only"));
    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let world = world_with(&fixtures::pair());

    let result = world.run(&[
        "--source", SOURCE, "export", "--sort", "clicks", "--desc", "-o", "out.csv",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Exported 2 campaigns to out.csv"));
    assert_eq!(
        world.read_file("out.csv")?,
        "id,name,status,clicks,cost,impressions,ctr\n\
         2,Black Friday,Paused,320,89.50,2500,12.80\n\
         1,Summer Sale,Active,150,45.99,1000,15.00\n"
    );
    Ok(())
}

#[test]
fn test_export_to_stdout_is_pure_csv() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--demo", "export", "--status", "paused"])?;

    assert!(result.success());
    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "id,name,status,clicks,cost,impressions,ctr");
    assert!(lines[1..].iter().all(|line| line.contains(",Paused,")));
    Ok(())
}
