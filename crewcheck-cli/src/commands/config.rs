use std::path::PathBuf;

use anyhow::Result;
use crewcheck_core::{CompanyFilter, CrewCheckConfig, SortKey};
use owo_colors::OwoColorize;

pub fn run(
    config: &CrewCheckConfig,
    data_file: Option<PathBuf>,
    sort: Option<SortKey>,
    company: Option<CompanyFilter>,
) -> Result<()> {
    let config_path = CrewCheckConfig::config_path()?;
    let updated = apply_defaults(config, data_file, sort, company);

    if let Some(updated) = &updated {
        updated.save(&config_path)?;
        println!("{}", "Saved defaults".green());
        println!();
    }
    let config = updated.as_ref().unwrap_or(config);

    let dataset = config
        .data_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled mock data".to_string());

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Dataset:  {}", dataset);
    println!();
    println!("{}", "Defaults".bold());
    println!("  Sort:     {}", config.default_sort);
    println!("  Company:  {}", config.default_company);

    Ok(())
}

/// The config with any given defaults replaced, or `None` if nothing was
/// given.
fn apply_defaults(
    config: &CrewCheckConfig,
    data_file: Option<PathBuf>,
    sort: Option<SortKey>,
    company: Option<CompanyFilter>,
) -> Option<CrewCheckConfig> {
    if data_file.is_none() && sort.is_none() && company.is_none() {
        return None;
    }

    let mut updated = config.clone();
    if let Some(path) = data_file {
        updated.data_file = Some(path);
    }
    if let Some(sort) = sort {
        updated.default_sort = sort;
    }
    if let Some(company) = company {
        updated.default_company = company;
    }
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_defaults_without_changes() {
        let config = CrewCheckConfig::default();
        assert!(apply_defaults(&config, None, None, None).is_none());
    }

    #[test]
    fn test_apply_defaults_keeps_untouched_fields() {
        let config = CrewCheckConfig {
            data_file: Some(PathBuf::from("~/events.json")),
            ..CrewCheckConfig::default()
        };

        let updated = apply_defaults(&config, None, Some(SortKey::Name), None).unwrap();
        assert_eq!(updated.default_sort, SortKey::Name);
        assert_eq!(updated.default_company, CompanyFilter::All);
        assert_eq!(updated.data_file, Some(PathBuf::from("~/events.json")));
    }
}
