//! Config file lifecycle and the no-command guidance.

use adlens_testing::TestWorld;
use anyhow::Result;

#[test]
fn test_config_init_writes_defaults() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "init"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Wrote"));
    let written = std::fs::read_to_string(world.config_path())?;
    assert!(written.contains("[api]"));
    assert!(written.contains("base_url = \"http://localhost:8000\""));
    assert!(written.contains("sort_direction = \"ascending\""));
    Ok(())
}

#[test]
fn test_config_init_refuses_to_overwrite() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[api]\nbase_url = \"http://campaigns.internal\"\n")?;

    let result = world.run(&["config", "init"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("already exists"));

    let result = world.run(&["config", "init", "--force"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Overwrote"));
    Ok(())
}

#[test]
fn test_config_init_force_replaces_broken_file() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[api\nbase_url =")?;

    let result = world.run(&["--demo", "list"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Failed to load"));

    let result = world.run(&["config", "init", "--force"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let result = world.run(&["--demo", "list"])?;
    assert!(result.success());
    Ok(())
}

#[test]
fn test_config_rejects_zero_timeout() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[api]\ntimeout_secs = 0\n")?;

    let result = world.run(&["--demo", "summary"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("timeout_secs"));
    Ok(())
}

#[test]
fn test_config_show_reports_source() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[api]\nbase_url = \"http://campaigns.internal/\"\n")?;

    let result = world.run(&["config", "show"])?;
    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("Campaign source: http://campaigns.internal"));
    assert!(stdout.contains("timeout_secs = 10"));

    let result = world.run(&["--endpoint", "http://override.test", "config", "show"])?;
    assert!(result.stdout().contains("Campaign source: http://override.test"));
    Ok(())
}

#[test]
fn test_config_show_without_file() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--format", "json", "config", "show"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["api_base_url"], "http://localhost:8000");
    assert_eq!(json["suggestions"][0]["command"], "adlens config init");
    Ok(())
}

#[test]
fn test_endpoint_from_environment() -> Result<()> {
    let world = TestWorld::new().with_env("ADLENS_ENDPOINT", "http://env.test");

    let result = world.run(&["config", "show"])?;

    assert!(result.stdout().contains("Campaign source: http://env.test"));
    Ok(())
}

#[test]
fn test_no_command_prints_guidance() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--demo"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("adlens - marketing campaign analytics"));
    assert!(stdout.contains("Campaign source: demo data"));
    assert!(stdout.contains("adlens config init"));
    Ok(())
}

#[test]
fn test_dashboard_requires_terminal() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--demo", "dashboard"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
    Ok(())
}
