use crate::application::tooltip_resolver::{
    MonthNames, SeriesAlignment, TooltipResolver, UnmatchedTimestamp,
};
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub tooltips: TooltipSettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TooltipSettings {
    /// Translated month names, January first.
    #[serde(default)]
    pub month_names: Option<Vec<String>>,
    #[serde(default)]
    pub unmatched_timestamp: UnmatchedTimestamp,
    #[serde(default)]
    pub series_alignment: SeriesAlignment,
}

impl ReportConfig {
    /// Build a resolver from the tooltip settings.
    pub fn resolver(&self) -> crate::Result<TooltipResolver> {
        let months = match &self.tooltips.month_names {
            Some(names) => MonthNames::try_from(names.clone())?,
            None => MonthNames::default(),
        };

        Ok(TooltipResolver::new(
            months,
            self.tooltips.unmatched_timestamp,
            self.tooltips.series_alignment,
        ))
    }
}

/// Load `config/report.*` (optional) with `REPORT_` environment overrides,
/// e.g. `REPORT_TOOLTIPS__UNMATCHED_TIMESTAMP=last_sample`.
pub fn load_report_config() -> anyhow::Result<ReportConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/report").required(false))
        .add_source(
            config::Environment::with_prefix("REPORT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    validated(settings.try_deserialize()?)
}

pub fn load_report_config_from_str(toml: &str) -> anyhow::Result<ReportConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    validated(settings.try_deserialize()?)
}

fn validated(report: ReportConfig) -> anyhow::Result<ReportConfig> {
    report.resolver().context("Invalid tooltip settings")?;
    tracing::debug!(
        "Loaded report config: unmatched={:?}, alignment={:?}",
        report.tooltips.unmatched_timestamp,
        report.tooltips.series_alignment
    );
    Ok(report)
}
