//! Link model and the external dispatch seams.
//!
//! A `Link` annotates a span of source text; its resolved target is a
//! `LinkDetails` decoupled from the display text. Routing a semantic action
//! (profile, channel, ...) is owned by the game shell behind `LinkDispatcher`;
//! opening raw URLs is the host's job behind `UrlOpener`. Both may be absent
//! (e.g. a stripped-down embedding), which is why link activation resolves its
//! handler lazily at click time.

/// Semantic link targets understood by the game shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkAction {
    External,
    Custom,
    OpenUserProfile,
    OpenChannel,
    OpenBeatmap,
    OpenWiki,
    SearchBeatmapSet,
    JoinMultiplayerMatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkDetails {
    pub action: LinkAction,
    pub argument: String,
}

impl LinkDetails {
    pub fn new(action: LinkAction, argument: impl Into<String>) -> Self {
        Self {
            action,
            argument: argument.into(),
        }
    }
}

/// A link annotation over a span `[index, index + length)` of source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub index: usize,
    pub length: usize,
    pub url: Option<String>,
    pub action: LinkAction,
    pub argument: String,
}

impl Link {
    pub fn external(index: usize, length: usize, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            index,
            length,
            url: Some(url.clone()),
            action: LinkAction::External,
            argument: url,
        }
    }

    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

pub trait LinkDispatcher {
    fn handle_link(&mut self, link: &LinkDetails);
}

pub trait UrlOpener {
    fn open_url(&mut self, url: &str);
}

/// The environment a link activation resolves against. Both collaborators are
/// optional; availability is decided by the embedding, not at link creation.
#[derive(Default)]
pub struct LinkEnv<'a> {
    pub dispatcher: Option<&'a mut dyn LinkDispatcher>,
    pub opener: Option<&'a mut dyn UrlOpener>,
}

impl<'a> LinkEnv<'a> {
    /// No dispatcher, no opener: every non-custom activation is a no-op.
    pub fn headless() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/link.rs"]
mod tests;
