//! Desktop launcher backed by the XDG utilities.

use std::process::Command;

use anyhow::{bail, Context, Result};
use linkgate_core::config::LinkgateConfig;
use linkgate_core::launcher::Launcher;
use url::Url;

/// Opener used when the config names none.
const DEFAULT_OPENER: &str = "xdg-open";

/// Opens URLs through the desktop's URL opener and answers capability
/// probes via `xdg-mime`.
#[derive(Debug, Clone)]
pub struct XdgOpenLauncher {
    opener: String,
}

impl XdgOpenLauncher {
    pub fn from_config(cfg: &LinkgateConfig) -> Self {
        Self {
            opener: cfg
                .opener
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENER.to_string()),
        }
    }

    /// Opener program plus leading arguments; the URL is appended last.
    fn opener_argv(&self) -> Vec<&str> {
        self.opener.split_whitespace().collect()
    }
}

impl Launcher for XdgOpenLauncher {
    fn can_open_directly(&self, url: &Url) -> bool {
        // A registered x-scheme-handler means some application claims the
        // scheme. No handler (or no xdg-mime at all) means the open would
        // need the user's say-so first.
        let mime = format!("x-scheme-handler/{}", url.scheme());
        match Command::new("xdg-mime")
            .args(["query", "default", &mime])
            .output()
        {
            Ok(out) => out.status.success() && !out.stdout.iter().all(u8::is_ascii_whitespace),
            Err(e) => {
                tracing::debug!("xdg-mime probe failed for {}: {}", mime, e);
                false
            }
        }
    }

    fn open(&self, url: &Url) -> Result<()> {
        let argv = self.opener_argv();
        let (program, args) = argv.split_first().context("opener command is empty")?;
        let status = Command::new(program)
            .args(args)
            .arg(url.as_str())
            .status()
            .with_context(|| format!("failed to spawn opener `{program}`"))?;
        if !status.success() {
            bail!("opener `{program}` exited with {status} for {url}");
        }
        tracing::debug!("opened {} via `{}`", url, program);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher(opener: Option<&str>) -> XdgOpenLauncher {
        let cfg = LinkgateConfig {
            opener: opener.map(str::to_string),
            ..LinkgateConfig::default()
        };
        XdgOpenLauncher::from_config(&cfg)
    }

    #[test]
    fn default_opener_is_xdg_open() {
        assert_eq!(launcher(None).opener_argv(), vec!["xdg-open"]);
    }

    #[test]
    fn configured_opener_splits_into_program_and_args() {
        assert_eq!(launcher(Some("gio open")).opener_argv(), vec!["gio", "open"]);
    }

    #[test]
    fn blank_opener_fails_instead_of_spawning_nothing() {
        let l = launcher(Some("   "));
        let err = l.open(&Url::parse("tel:123").unwrap()).unwrap_err();
        assert!(err.to_string().contains("opener command is empty"));
    }
}
