//! Stub collaborators for handoff flow tests.
//!
//! `RecordingLauncher` answers a fixed capability and records every open;
//! `ScriptedPresenter` records prompts and accepts or cancels per script.

use std::sync::Mutex;

use linkgate_core::launcher::Launcher;
use linkgate_core::presenter::Presenter;
use url::Url;

pub struct RecordingLauncher {
    direct: bool,
    fail_open: bool,
    opened: Mutex<Vec<Url>>,
}

impl RecordingLauncher {
    pub fn new(direct: bool) -> Self {
        Self {
            direct,
            fail_open: false,
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Launcher whose `open` records the attempt but reports failure,
    /// like a missing opener binary.
    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::new(false)
        }
    }

    pub fn opened(&self) -> Vec<Url> {
        self.opened.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn can_open_directly(&self, _url: &Url) -> bool {
        self.direct
    }

    fn open(&self, url: &Url) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(url.clone());
        if self.fail_open {
            anyhow::bail!("opener unavailable");
        }
        Ok(())
    }
}

/// One recorded prompt: title, cancel label, action label.
pub type Prompt = (String, String, String);

pub struct ScriptedPresenter {
    accept: bool,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedPresenter {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            accept: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Presenter for ScriptedPresenter {
    fn confirm<'a>(
        &self,
        title: &str,
        cancel: &str,
        action: &str,
        on_accept: Box<dyn FnOnce() + 'a>,
    ) {
        self.prompts
            .lock()
            .unwrap()
            .push((title.to_string(), cancel.to_string(), action.to_string()));
        if self.accept {
            on_accept();
        }
    }
}
