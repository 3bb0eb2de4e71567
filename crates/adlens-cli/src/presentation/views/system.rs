use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, GuidanceViewModel, ViewMode,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.data.exists {
            ""
        } else {
            " (not found)"
        };
        writeln!(f, "Config file: {}{}", self.data.path, state)?;
        writeln!(f, "Campaign source: {}", self.data.source)?;
        writeln!(f)?;
        writeln!(f, "[api]")?;
        writeln!(f, "base_url = \"{}\"", self.data.api_base_url)?;
        writeln!(f, "timeout_secs = {}", self.data.timeout_secs)?;
        writeln!(f)?;
        writeln!(f, "[view]")?;
        writeln!(f, "status_filter = \"{}\"", self.data.status_filter)?;
        writeln!(f, "sort_key = \"{}\"", self.data.sort_key)?;
        writeln!(f, "sort_direction = \"{}\"", self.data.sort_direction)
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.content)?;
        if !self.data.content.ends_with('\n') {
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "adlens - marketing campaign analytics\n")?;
        writeln!(f, "Campaign source: {}", self.data.source)?;
        if self.data.config_exists {
            writeln!(f, "Config file: {}\n", self.data.config_path)?;
        } else {
            writeln!(f, "Config file: {} (not found)\n", self.data.config_path)?;
        }

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  adlens list                # Campaign table")?;
        writeln!(f, "  adlens summary             # Totals across all campaigns")?;
        writeln!(f, "  adlens insights            # Best performer, CTR and status mix")?;
        writeln!(f, "  adlens dashboard           # Interactive dashboard\n")?;

        writeln!(f, "For more commands:")?;
        writeln!(f, "  adlens --help")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_view() {
        let data = ConfigViewModel {
            path: "/tmp/adlens/config.toml".to_string(),
            exists: false,
            source: "demo data".to_string(),
            api_base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            status_filter: "all".to_string(),
            sort_key: "name".to_string(),
            sort_direction: "ascending".to_string(),
        };
        insta::assert_snapshot!(data.create_view(ViewMode::Standard).to_string(), @r#"
        Config file: /tmp/adlens/config.toml (not found)
        Campaign source: demo data

        [api]
        base_url = "http://localhost:8000"
        timeout_secs = 10

        [view]
        status_filter = "all"
        sort_key = "name"
        sort_direction = "ascending"
        "#);
    }
}
