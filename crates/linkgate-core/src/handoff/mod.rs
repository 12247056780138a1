//! Navigation handoff policy.
//!
//! Classifies a requested URL (browser-renderable scheme vs external, known
//! host vs not) and decides whether the browser loads it, hands it straight
//! to the OS, or asks the user first. Deep-link rewriting for the
//! social-media alias hosts lives here too. Evaluation is synchronous and
//! stateless; the side effects (capability probe, prompt, launch) go
//! through the [`crate::launcher`] and [`crate::presenter`] seams.

mod decision;
mod deeplink;
mod hosts;
mod policy;
mod request;
mod schemes;

pub use decision::Decision;
pub use hosts::{rule_for_host, HostRule, ECHO_APP, ECHO_SCHEME, KNOWN_HOSTS};
pub use policy::LinkPolicy;
pub use request::NavRequest;
pub use schemes::{classify, is_web, SchemeClass, INTERNAL_SCHEMES};
