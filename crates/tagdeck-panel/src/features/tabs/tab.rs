//! Tab identities and the capability-gated tab catalog.

use std::fmt;

use tagdeck_core::config::Capabilities;
use tagdeck_types::Entry;

/// Recognized tab identities, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TabId {
    Details,
    Description,
    Revisions,
    AiSettings,
}

impl TabId {
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Details => "details",
            TabId::Description => "description",
            TabId::Revisions => "revisions",
            TabId::AiSettings => "aiSettings",
        }
    }

    /// Stable test id hosts attach to the tab element.
    pub fn test_id(self) -> &'static str {
        match self {
            TabId::Details => "detailsTabTID",
            TabId::Description => "descriptionTabTID",
            TabId::Revisions => "revisionsTabTID",
            TabId::AiSettings => "aiTabTID",
        }
    }

    /// Translation key of the tab title.
    pub fn title_key(self) -> &'static str {
        match self {
            TabId::Details => "core:details",
            TabId::Description => "core:filePropertiesDescription",
            TabId::Revisions => "core:revisions",
            TabId::AiSettings => "core:aiSettingsTab",
        }
    }

    pub fn all() -> &'static [TabId] {
        &[
            TabId::Details,
            TabId::Description,
            TabId::Revisions,
            TabId::AiSettings,
        ]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIcon {
    FolderProperties,
    Description,
    EditDescription,
    Revision,
    Ai,
}

/// A materialized tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    /// Whether presence depends on runtime state (revisions, capabilities).
    pub is_dynamic: bool,
    pub icon: TabIcon,
}

/// Runtime inputs the catalog predicates read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabContext {
    pub have_revisions: bool,
    pub have_description: bool,
    pub capabilities: Capabilities,
}

struct TabSpec {
    id: TabId,
    is_dynamic: bool,
    /// Whether the entry qualifies for the tab at all.
    eligible: fn(&Entry, &TabContext) -> bool,
    /// Whether the host can show an eligible tab.
    materializes: fn(&TabContext) -> bool,
}

const TAB_CATALOG: [TabSpec; 4] = [
    TabSpec {
        id: TabId::Details,
        is_dynamic: false,
        eligible: always,
        materializes: any_host,
    },
    TabSpec {
        id: TabId::Description,
        is_dynamic: false,
        eligible: always,
        materializes: any_host,
    },
    TabSpec {
        id: TabId::Revisions,
        is_dynamic: true,
        eligible: has_revisions,
        materializes: any_host,
    },
    TabSpec {
        id: TabId::AiSettings,
        is_dynamic: true,
        eligible: ai_settings_eligible,
        materializes: desktop_host,
    },
];

fn always(_: &Entry, _: &TabContext) -> bool {
    true
}

fn any_host(_: &TabContext) -> bool {
    true
}

fn has_revisions(_: &Entry, ctx: &TabContext) -> bool {
    ctx.have_revisions
}

fn ai_settings_eligible(entry: &Entry, ctx: &TabContext) -> bool {
    let caps = ctx.capabilities;
    !entry.is_file || (caps.dev_mode && caps.pro && caps.host.is_desktop())
}

// Web builds do not ship the assistant.
fn desktop_host(ctx: &TabContext) -> bool {
    ctx.capabilities.host.is_desktop()
}

fn icon_for(id: TabId, ctx: &TabContext) -> TabIcon {
    match id {
        TabId::Details => TabIcon::FolderProperties,
        TabId::Description if ctx.have_description => TabIcon::EditDescription,
        TabId::Description => TabIcon::Description,
        TabId::Revisions => TabIcon::Revision,
        TabId::AiSettings => TabIcon::Ai,
    }
}

/// Returns whether `id` passes the eligibility gate for `entry`.
pub fn is_eligible(id: TabId, entry: &Entry, ctx: &TabContext) -> bool {
    TAB_CATALOG
        .iter()
        .find(|spec| spec.id == id)
        .is_some_and(|spec| (spec.eligible)(entry, ctx))
}

/// Builds the ordered tab set for `entry`.
///
/// A tab is appended only when it is both eligible and materializable.
pub fn build_tab_set(entry: &Entry, ctx: &TabContext) -> Vec<Tab> {
    TAB_CATALOG
        .iter()
        .filter(|spec| (spec.eligible)(entry, ctx) && (spec.materializes)(ctx))
        .map(|spec| Tab {
            id: spec.id,
            is_dynamic: spec.is_dynamic,
            icon: icon_for(spec.id, ctx),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tagdeck_core::config::HostKind;

    use super::*;

    fn ids(tabs: &[Tab]) -> Vec<TabId> {
        tabs.iter().map(|t| t.id).collect()
    }

    fn ctx(dev_mode: bool, pro: bool, host: HostKind) -> TabContext {
        TabContext {
            capabilities: Capabilities {
                dev_mode,
                pro,
                host,
            },
            ..TabContext::default()
        }
    }

    #[test]
    fn test_directory_on_desktop_gets_ai_tab() {
        let dir = Entry::directory("/photos", "d1", "loc");
        let tabs = build_tab_set(&dir, &ctx(false, false, HostKind::Desktop));
        assert_eq!(
            ids(&tabs),
            [TabId::Details, TabId::Description, TabId::AiSettings]
        );
    }

    #[test]
    fn test_directory_on_web_is_eligible_but_not_materialized() {
        let dir = Entry::directory("/photos", "d1", "loc");
        let web = ctx(false, false, HostKind::Web);

        assert!(is_eligible(TabId::AiSettings, &dir, &web));
        assert_eq!(
            ids(&build_tab_set(&dir, &web)),
            [TabId::Details, TabId::Description]
        );
    }

    #[test]
    fn test_file_needs_dev_mode_and_license_for_ai_tab() {
        let file = Entry::file("/a.txt", "f1", "loc");

        for (dev, pro) in [(false, false), (true, false), (false, true)] {
            let tabs = build_tab_set(&file, &ctx(dev, pro, HostKind::Desktop));
            assert!(!ids(&tabs).contains(&TabId::AiSettings), "dev={dev} pro={pro}");
        }

        let tabs = build_tab_set(&file, &ctx(true, true, HostKind::Desktop));
        assert_eq!(ids(&tabs).last(), Some(&TabId::AiSettings));
        assert!(!is_eligible(
            TabId::AiSettings,
            &file,
            &ctx(true, true, HostKind::Web)
        ));
    }

    #[test]
    fn test_revisions_sits_between_description_and_ai() {
        let dir = Entry::directory("/photos", "d1", "loc");
        let context = TabContext {
            have_revisions: true,
            ..ctx(false, false, HostKind::Desktop)
        };
        let tabs = build_tab_set(&dir, &context);
        assert_eq!(
            ids(&tabs),
            [
                TabId::Details,
                TabId::Description,
                TabId::Revisions,
                TabId::AiSettings
            ]
        );
        assert!(!tabs[0].is_dynamic);
        assert!(tabs[2].is_dynamic);
    }

    #[test]
    fn test_description_icon_follows_have_description() {
        let file = Entry::file("/a.txt", "f1", "loc");
        let plain = build_tab_set(&file, &TabContext::default());
        assert_eq!(plain[1].icon, TabIcon::Description);

        let described = build_tab_set(
            &file,
            &TabContext {
                have_description: true,
                ..TabContext::default()
            },
        );
        assert_eq!(described[1].icon, TabIcon::EditDescription);
    }

    #[test]
    fn test_tab_metadata() {
        assert_eq!(TabId::AiSettings.to_string(), "aiSettings");
        assert_eq!(TabId::AiSettings.test_id(), "aiTabTID");
        assert_eq!(TabId::Description.title_key(), "core:filePropertiesDescription");
        assert_eq!(TabId::all().len(), 4);
    }
}
