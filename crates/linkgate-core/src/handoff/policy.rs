//! The handoff policy: one decision per navigation request.

use url::Url;

use crate::config::{LinkgateConfig, PromptStrings};
use crate::launcher::Launcher;
use crate::presenter::Presenter;

use super::decision::Decision;
use super::deeplink;
use super::hosts::{self, HostRule};
use super::request::NavRequest;
use super::schemes::{self, SchemeClass};

/// Product name, not a localised label.
const FACETIME_ACTION: &str = "FaceTime";

/// Decides whether a navigation loads in the browser or leaves it.
///
/// A policy is a pure function of the request, the compile-time scheme and
/// host tables, the injected strings, and the launcher's capability answer.
/// Evaluating the same request twice with unchanged collaborator answers
/// yields the same decision.
#[derive(Debug, Clone)]
pub struct LinkPolicy {
    product: String,
    strings: PromptStrings,
}

impl LinkPolicy {
    pub fn new(product: impl Into<String>, strings: PromptStrings) -> Self {
        Self {
            product: product.into(),
            strings,
        }
    }

    pub fn from_config(cfg: &LinkgateConfig) -> Self {
        Self::new(cfg.product_name.clone(), cfg.strings.clone())
    }

    /// Evaluate one request.
    ///
    /// `launcher` is consulted only for the deep-link capability probe; no
    /// URL is opened here. See [`LinkPolicy::handle`] for the effectful
    /// wrapper.
    pub fn decide(&self, req: &NavRequest, launcher: &dyn Launcher) -> Decision {
        let scheme = req.scheme();
        if let SchemeClass::External = schemes::classify(scheme) {
            return self.decide_external(req);
        }

        // Internal non-web schemes (ftp, file, about, javascript, data)
        // render in the browser; so do web URLs without a host.
        if !schemes::is_web(scheme) {
            return Decision::LoadInBrowser;
        }
        let Some(host) = req.host() else {
            return Decision::LoadInBrowser;
        };

        match hosts::rule_for_host(host) {
            Some(HostRule::DeepLink { scheme, app }) => {
                self.decide_deep_link(req, scheme, app, launcher)
            }
            Some(HostRule::ConfirmOpen { app }) => Decision::ConfirmThenHandOff {
                title: self.strings.named_app_title(&self.product, app),
                action: self.strings.open.clone(),
                target: req.url().clone(),
            },
            None => Decision::LoadInBrowser,
        }
    }

    /// Like [`LinkPolicy::decide`], taking the raw URL string. Unparseable
    /// URLs fail open to `LoadInBrowser`.
    pub fn decide_for_url(&self, raw: &str, launcher: &dyn Launcher) -> Decision {
        match NavRequest::parse(raw) {
            Ok(req) => self.decide(&req, launcher),
            Err(e) => {
                tracing::debug!("{:#}; loading in browser", e);
                Decision::LoadInBrowser
            }
        }
    }

    /// External schemes never load in the browser; pick handoff shape and
    /// labels per scheme.
    fn decide_external(&self, req: &NavRequest) -> Decision {
        let title = req.path().to_string();
        let target = req.url().clone();
        match req.scheme() {
            // The OS presents its own call dialog; ours would be a second
            // confirmation.
            "tel" => Decision::HandOff { target },
            "facetime" | "facetime-audio" => Decision::ConfirmThenHandOff {
                title,
                action: FACETIME_ACTION.to_string(),
                target,
            },
            "mailto" => Decision::ConfirmThenHandOff {
                title,
                action: self.strings.email.clone(),
                target,
            },
            _ => Decision::ConfirmThenHandOff {
                title: self.strings.external_app_title(&self.product),
                action: self.strings.open.clone(),
                target,
            },
        }
    }

    fn decide_deep_link(
        &self,
        req: &NavRequest,
        deep_scheme: &str,
        app: &str,
        launcher: &dyn Launcher,
    ) -> Decision {
        let Some(deep) = deeplink::rewrite(deep_scheme, req) else {
            // Malformed reassembly falls back to normal loading.
            return Decision::LoadInBrowser;
        };
        if launcher.can_open_directly(&deep) {
            Decision::HandOff { target: deep }
        } else {
            Decision::ConfirmThenHandOff {
                title: self.strings.named_app_title(&self.product, app),
                action: self.strings.open.clone(),
                target: deep,
            }
        }
    }

    /// Evaluate and carry out the decision.
    ///
    /// Returns whether the browser should load the URL itself (`true`) or
    /// the navigation was intercepted (`false`). `HandOff` opens the target
    /// immediately; `ConfirmThenHandOff` hands the presenter an accept
    /// continuation that opens the target. A failed open is logged and the
    /// navigation stays intercepted.
    pub fn handle(
        &self,
        req: &NavRequest,
        launcher: &dyn Launcher,
        presenter: &dyn Presenter,
    ) -> bool {
        match self.decide(req, launcher) {
            Decision::LoadInBrowser => true,
            Decision::HandOff { target } => {
                open_logged(launcher, &target);
                false
            }
            Decision::ConfirmThenHandOff {
                title,
                action,
                target,
            } => {
                presenter.confirm(
                    &title,
                    &self.strings.cancel,
                    &action,
                    Box::new(move || open_logged(launcher, &target)),
                );
                false
            }
        }
    }

    /// Like [`LinkPolicy::handle`], taking the raw URL string. Unparseable
    /// URLs fail open (`true`, browser proceeds).
    pub fn handle_for_url(
        &self,
        raw: &str,
        launcher: &dyn Launcher,
        presenter: &dyn Presenter,
    ) -> bool {
        match NavRequest::parse(raw) {
            Ok(req) => self.handle(&req, launcher, presenter),
            Err(e) => {
                tracing::debug!("{:#}; loading in browser", e);
                true
            }
        }
    }
}

/// Open `url` through the launcher; failures only log, they never bubble up
/// into the navigation path.
fn open_logged(launcher: &dyn Launcher, url: &Url) {
    if let Err(e) = launcher.open(url) {
        tracing::warn!("handoff open failed for {}: {:#}", url, e);
    }
}
