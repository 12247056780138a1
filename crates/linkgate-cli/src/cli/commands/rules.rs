//! `linkgate rules` – show the built-in scheme and host tables.

use anyhow::Result;
use linkgate_core::handoff::{HostRule, INTERNAL_SCHEMES, KNOWN_HOSTS};

pub fn run_rules() -> Result<()> {
    println!("Internal schemes (load in the browser unless a host rule matches):");
    println!("  {}", INTERNAL_SCHEMES.join(", "));
    println!();
    println!("{:<18} {:<10} {}", "HOST", "KIND", "TARGET");
    for (host, rule) in KNOWN_HOSTS {
        let (kind, target) = match rule {
            HostRule::DeepLink { scheme, app } => ("deep-link", format!("{app} ({scheme}://)")),
            HostRule::ConfirmOpen { app } => ("confirm", app.to_string()),
        };
        println!("{:<18} {:<10} {}", host, kind, target);
    }
    Ok(())
}
