//! `linkgate decide <url>` – print the policy decision without side effects.

use anyhow::Result;
use linkgate_core::config::LinkgateConfig;
use linkgate_core::handoff::LinkPolicy;

use crate::cli::launcher::XdgOpenLauncher;

pub fn run_decide(cfg: &LinkgateConfig, url: &str) -> Result<()> {
    let policy = LinkPolicy::from_config(cfg);
    let launcher = XdgOpenLauncher::from_config(cfg);
    let decision = policy.decide_for_url(url, &launcher);
    println!("{decision}");
    Ok(())
}
