use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Prompt labels and title templates (optional `[strings]` section in
/// config.toml). Override the whole section to localise; templates use
/// `{product}` and `{app}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptStrings {
    /// Affirmative button label for generic handoff prompts.
    pub open: String,
    /// Dismiss button label; choosing it leaves the navigation blocked.
    pub cancel: String,
    /// Affirmative button label for `mailto:` handoffs.
    pub email: String,
    /// Prompt title for external schemes with no dedicated handling.
    pub external_app: String,
    /// Prompt title for handoffs to a named app (Echo, Maps, App Store).
    pub external_app_named: String,
}

impl Default for PromptStrings {
    fn default() -> Self {
        Self {
            open: "Open".to_string(),
            cancel: "Cancel".to_string(),
            email: "Email".to_string(),
            external_app: "{product} wants to open another application".to_string(),
            external_app_named: "{product} wants to open {app}".to_string(),
        }
    }
}

impl PromptStrings {
    /// Title for the generic external-scheme prompt.
    pub fn external_app_title(&self, product: &str) -> String {
        self.external_app.replace("{product}", product)
    }

    /// Title for a prompt naming the target app.
    pub fn named_app_title(&self, product: &str, app: &str) -> String {
        self.external_app_named
            .replace("{product}", product)
            .replace("{app}", app)
    }
}

/// Global configuration loaded from `~/.config/linkgate/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkgateConfig {
    /// Product name substituted into prompt titles (the embedding browser).
    pub product_name: String,
    /// Command used to launch handed-off URLs (None = xdg-open).
    #[serde(default)]
    pub opener: Option<String>,
    /// Prompt labels and templates; see [`PromptStrings`].
    #[serde(default)]
    pub strings: PromptStrings,
}

impl Default for LinkgateConfig {
    fn default() -> Self {
        Self {
            product_name: "Linkgate".to_string(),
            opener: None,
            strings: PromptStrings::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkgateConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LinkgateConfig::default();
        assert_eq!(cfg.product_name, "Linkgate");
        assert!(cfg.opener.is_none());
        assert_eq!(cfg.strings.open, "Open");
        assert_eq!(cfg.strings.cancel, "Cancel");
        assert_eq!(cfg.strings.email, "Email");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkgateConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkgateConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.product_name, cfg.product_name);
        assert_eq!(parsed.strings.external_app, cfg.strings.external_app);
        assert_eq!(parsed.strings.external_app_named, cfg.strings.external_app_named);
    }

    #[test]
    fn config_toml_minimal() {
        let toml = r#"
            product_name = "Firefox Klar"
        "#;
        let cfg: LinkgateConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.product_name, "Firefox Klar");
        assert!(cfg.opener.is_none());
        // Missing [strings] falls back to the defaults.
        assert_eq!(cfg.strings.open, "Open");
    }

    #[test]
    fn config_toml_localised_strings() {
        let toml = r#"
            product_name = "Firefox Klar"
            opener = "gio open"

            [strings]
            open = "Öffnen"
            cancel = "Abbrechen"
            email = "E-Mail"
            external_app = "{product} möchte eine andere App öffnen"
            external_app_named = "{product} möchte {app} öffnen"
        "#;
        let cfg: LinkgateConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.opener.as_deref(), Some("gio open"));
        assert_eq!(cfg.strings.cancel, "Abbrechen");
        assert_eq!(
            cfg.strings.named_app_title("Firefox Klar", "Maps"),
            "Firefox Klar möchte Maps öffnen"
        );
    }

    #[test]
    fn title_templates_substitute() {
        let strings = PromptStrings::default();
        assert_eq!(
            strings.external_app_title("Firefox Focus"),
            "Firefox Focus wants to open another application"
        );
        assert_eq!(
            strings.named_app_title("Firefox Focus", "App Store"),
            "Firefox Focus wants to open App Store"
        );
    }
}
