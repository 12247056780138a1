//! `linkgate open <url>` – evaluate a URL and carry the decision out.

use anyhow::Result;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::handoff::LinkPolicy;

use crate::cli::launcher::XdgOpenLauncher;
use crate::cli::prompt::TermPresenter;

pub fn run_open(cfg: &LinkgateConfig, url: &str, yes: bool) -> Result<()> {
    let policy = LinkPolicy::from_config(cfg);
    let launcher = XdgOpenLauncher::from_config(cfg);
    let presenter = TermPresenter::new(yes);

    if policy.handle_for_url(url, &launcher, &presenter) {
        println!("No handoff rule applies; a browser would load this URL itself.");
    }
    Ok(())
}
