//! Launcher interface for opening URLs outside the browser.
//!
//! The policy core only depends on this trait and does not know how the
//! host application actually launches URLs (desktop handler registry, test
//! stub, ...).

use url::Url;

/// Trait implemented by the hosting application's URL opener.
pub trait Launcher {
    /// Whether `url` can be handed to its handler right now without asking
    /// the user. Probe failures count as "no".
    fn can_open_directly(&self, url: &Url) -> bool;

    /// Launch `url` in its external handler.
    fn open(&self, url: &Url) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysDirect;

    impl Launcher for AlwaysDirect {
        fn can_open_directly(&self, _url: &Url) -> bool {
            true
        }

        fn open(&self, _url: &Url) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let launcher: &dyn Launcher = &AlwaysDirect;
        let url = Url::parse("echodotapp://user").unwrap();
        assert!(launcher.can_open_directly(&url));
        assert!(launcher.open(&url).is_ok());
    }
}
