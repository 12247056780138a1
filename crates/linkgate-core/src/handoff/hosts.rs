//! Known-host table: hosts whose navigations leave the browser.
//!
//! The table is a compile-time constant; there is no dynamic registration.
//! Hosts are matched exactly against the lower-cased host of the request.

/// Custom scheme of the Echo companion app.
pub const ECHO_SCHEME: &str = "echodotapp";

/// Display name of the Echo companion app.
pub const ECHO_APP: &str = "Echo";

/// What to do with a navigation to a known host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRule {
    /// Rewrite the URL onto `scheme://` and hand the deep link to `app`.
    DeepLink {
        scheme: &'static str,
        app: &'static str,
    },
    /// Hand off the original URL to `app` after confirmation.
    ConfirmOpen { app: &'static str },
}

/// Hosts with a handoff rule. The social-media aliases cover one brand's
/// main and regional domains; the remaining entries are simple
/// confirm-and-open hosts.
pub const KNOWN_HOSTS: &[(&str, HostRule)] = &[
    (
        "twitter.com",
        HostRule::DeepLink {
            scheme: ECHO_SCHEME,
            app: ECHO_APP,
        },
    ),
    (
        "www.twitter.com",
        HostRule::DeepLink {
            scheme: ECHO_SCHEME,
            app: ECHO_APP,
        },
    ),
    (
        "mobile.twitter.com",
        HostRule::DeepLink {
            scheme: ECHO_SCHEME,
            app: ECHO_APP,
        },
    ),
    (
        "x.com",
        HostRule::DeepLink {
            scheme: ECHO_SCHEME,
            app: ECHO_APP,
        },
    ),
    (
        "www.x.com",
        HostRule::DeepLink {
            scheme: ECHO_SCHEME,
            app: ECHO_APP,
        },
    ),
    (
        "mobile.x.com",
        HostRule::DeepLink {
            scheme: ECHO_SCHEME,
            app: ECHO_APP,
        },
    ),
    ("maps.apple.com", HostRule::ConfirmOpen { app: "Maps" }),
    ("itunes.apple.com", HostRule::ConfirmOpen { app: "App Store" }),
];

/// Look up the rule for a host, if any. `host` must already be lower case
/// (the URL parser guarantees that for parsed requests).
pub fn rule_for_host(host: &str) -> Option<HostRule> {
    KNOWN_HOSTS
        .iter()
        .find(|(known, _)| *known == host)
        .map(|(_, rule)| *rule)
}
