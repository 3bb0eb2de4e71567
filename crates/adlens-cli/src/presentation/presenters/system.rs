use adlens_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};

pub fn present_config(
    config: &Config,
    path: &str,
    exists: bool,
    source: &str,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.to_string(),
        exists,
        source: source.to_string(),
        api_base_url: config.api.base_url.clone(),
        timeout_secs: config.api.timeout_secs,
        status_filter: config.view.status_filter.as_str().to_string(),
        sort_key: config.view.sort_key.as_str().to_string(),
        sort_direction: config.view.sort_direction.as_str().to_string(),
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file; using defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk").with_command("adlens config init"),
            )
    }
}

pub fn present_config_init(
    path: &str,
    overwritten: bool,
    content: String,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        format!("Overwrote {}", path)
    } else {
        format!("Wrote {}", path)
    };
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.to_string(),
        overwritten,
        content,
    })
    .with_badge(StatusBadge::success(label))
}

pub fn present_guidance(
    source: &str,
    config_path: &str,
    config_exists: bool,
) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        source: source.to_string(),
        config_path: config_path.to_string(),
        config_exists,
    });

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Point adlens at your API once").with_command("adlens config init"),
        );
    }
    result.with_suggestion(
        Guidance::new("Explore without a backend").with_command("adlens --demo dashboard"),
    )
}
