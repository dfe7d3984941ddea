use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Which public site is rendered.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Layout {
    /// One long page with scroll-spy navigation.
    SinglePage,
    /// Routed pages: `/`, `/projects`, `/{page_name}`.
    #[default]
    MultiPage,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "single-page" => Ok(Self::SinglePage),
            "multi" | "multi-page" => Ok(Self::MultiPage),
            _ => Err(format!("invalid layout: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub layout: Layout,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            layout: Layout::default(),
        }
    }
}

impl SiteConfig {
    /// Values baked in at compile time through `ODONLAB_API_URL` and
    /// `ODONLAB_LAYOUT`. Server and browser builds agree on these, so
    /// rendering stays consistent across hydration.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ODONLAB_API_URL"), option_env!("ODONLAB_LAYOUT"))
    }

    pub fn from_values(api_base_url: Option<&str>, layout: Option<&str>) -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: api_base_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            layout: layout
                .and_then(|raw| {
                    raw.parse()
                        .map_err(|e| log::warn!("Ignoring layout setting: {}", e))
                        .ok()
                })
                .unwrap_or(defaults.layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_defaults() {
        assert_eq!(SiteConfig::from_values(None, None), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_values(Some("  "), Some("bogus")),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_from_values_overrides() {
        let config = SiteConfig::from_values(Some("https://api.lab.example"), Some("Single-Page"));

        assert_eq!(config.api_base_url, "https://api.lab.example");
        assert_eq!(config.layout, Layout::SinglePage);
    }
}
