//! Lazy tab content.
//!
//! Content for a tab is built the first time the tab becomes active and kept
//! across tab switches. Opening a different entry drops everything built for
//! the previous one.

use std::collections::HashMap;

use tagdeck_types::Entry;

use crate::features::tabs::{TabId, TabsState};

/// Mount key for tab content: the same tab on a different entry mounts fresh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub tab: TabId,
    pub entry: String,
}

impl ContentKey {
    pub fn new(tab: TabId, entry: &Entry) -> Self {
        Self {
            tab,
            entry: entry.path.clone(),
        }
    }
}

/// Host factory for tab content.
pub trait ContentProvider {
    type Content;

    fn load(&mut self, tab: TabId, entry: &Entry) -> Self::Content;
}

/// Activated content for the current entry.
pub struct ContentRegistry<P: ContentProvider> {
    provider: P,
    entry: Option<String>,
    loaded: HashMap<TabId, P::Content>,
}

impl<P: ContentProvider> ContentRegistry<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            entry: None,
            loaded: HashMap::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the content for `tab`, building it on first activation.
    pub fn activate(&mut self, tab: TabId, entry: &Entry) -> &P::Content {
        if self.entry.as_deref() != Some(entry.path.as_str()) {
            if self.entry.is_some() {
                tracing::trace!(entry = %entry.path, "entry changed; dropping tab content");
            }
            self.loaded.clear();
            self.entry = Some(entry.path.clone());
        }

        let provider = &mut self.provider;
        self.loaded.entry(tab).or_insert_with(|| {
            tracing::debug!(%tab, entry = %entry.path, "loading tab content");
            provider.load(tab, entry)
        })
    }

    /// Activates the selected tab of `tabs`, if any.
    pub fn activate_selected(&mut self, tabs: &TabsState) -> Option<(ContentKey, &P::Content)> {
        let key = tabs.selected_content_key()?;
        let entry = tabs.entry()?;
        let tab = key.tab;
        Some((key, self.activate(tab, entry)))
    }

    pub fn is_loaded(&self, tab: TabId) -> bool {
        self.loaded.contains_key(&tab)
    }

    /// Forces `tab` to be rebuilt on its next activation.
    pub fn reset(&mut self, tab: TabId) {
        self.loaded.remove(&tab);
    }

    pub fn reset_all(&mut self) {
        self.loaded.clear();
        self.entry = None;
    }
}
