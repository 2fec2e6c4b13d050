//! Tabs command handler.

use std::path::{self, Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tagdeck_core::config::{Capabilities, Config, HostKind};
use tagdeck_core::location::{LocalLocation, LocationRegistry, backup_file_dir};
use tagdeck_panel::features::tabs::{TabId, TabsState};
use tagdeck_panel::{
    ContentProvider, ContentRegistry, PanelEvent, PanelRuntime, PanelServices, PanelState,
    RecordingHost,
};
use tagdeck_types::Entry;
use tokio::fs;

use super::fixture::{FixtureTenantApi, SignedOutIdentity};

const LOCATION_ID: &str = "local";

#[derive(clap::Args, Debug)]
pub struct TabsArgs {
    /// File or directory to open
    path: PathBuf,

    /// Root of the local location (default: the entry's parent directory)
    #[arg(long, value_name = "DIR")]
    location_root: Option<PathBuf>,

    /// Entry uuid used to find revisions (default: the file name)
    #[arg(long)]
    uuid: Option<String>,

    /// Treat the entry as editable (probes for revisions)
    #[arg(long)]
    editable: bool,

    /// Start with the properties panel closed
    #[arg(long)]
    closed: bool,

    /// Persisted tab index
    #[arg(long, value_name = "N")]
    tab: Option<usize>,

    /// Enable developer mode
    #[arg(long)]
    dev: bool,

    /// Enable the licensed feature set
    #[arg(long)]
    pro: bool,

    /// Run as the web build
    #[arg(long)]
    web: bool,

    /// The entry has a description
    #[arg(long)]
    described: bool,
}

impl TabsArgs {
    /// Applies command line overrides on top of the loaded config.
    fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        let caps = config.capabilities;
        config.capabilities = Capabilities {
            dev_mode: caps.dev_mode || self.dev,
            pro: caps.pro || self.pro,
            host: if self.web { HostKind::Web } else { caps.host },
        };
        config.panel.open = config.panel.open && !self.closed;
        if self.tab.is_some() {
            config.panel.tab = self.tab;
        }
        config
    }
}

/// One-line content summaries standing in for the real tab views.
struct Summary;

impl ContentProvider for Summary {
    type Content = String;

    fn load(&mut self, tab: TabId, entry: &Entry) -> String {
        match tab {
            TabId::Details => format!("{} {}", entry_kind(entry), entry.path),
            TabId::Description => format!("description of {}", entry.uuid),
            TabId::Revisions => {
                let dir = backup_file_dir(&entry.path, &entry.uuid, path::MAIN_SEPARATOR);
                format!("revisions in {dir}")
            }
            TabId::AiSettings => "assistant settings".to_string(),
        }
    }
}

pub async fn run(config: &Config, args: TabsArgs) -> Result<()> {
    let entry_path = fs::canonicalize(&args.path)
        .await
        .with_context(|| format!("Failed to resolve {}", args.path.display()))?;
    let metadata = fs::metadata(&entry_path)
        .await
        .with_context(|| format!("Failed to read {}", entry_path.display()))?;

    let root = args
        .location_root
        .clone()
        .or_else(|| entry_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let uuid = args.uuid.clone().unwrap_or_else(|| {
        entry_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    });
    let entry_str = entry_path.to_string_lossy().to_string();
    let entry = if metadata.is_dir() {
        Entry::directory(entry_str, uuid, LOCATION_ID)
    } else {
        Entry::file(entry_str, uuid, LOCATION_ID)
    };

    tracing::debug!(
        entry = %entry.path,
        kind = entry_kind(&entry),
        root = %root.display(),
        "opening entry"
    );

    let mut locations = LocationRegistry::new();
    locations.insert(Arc::new(LocalLocation::new(LOCATION_ID, root)));
    let services = PanelServices {
        locations,
        identity: Arc::new(SignedOutIdentity),
        tenant_api: Arc::new(FixtureTenantApi::unavailable()),
    };
    let config = args.apply(config);
    let mut runtime = PanelRuntime::new(PanelState::new(&config), RecordingHost::new(), services);

    runtime.dispatch(PanelEvent::DescriptionChanged(args.described));
    runtime.dispatch(PanelEvent::EditableChanged(args.editable));
    runtime.dispatch(PanelEvent::EntryOpened(Some(entry)));
    runtime.settle().await;
    tracing::debug!(
        tabs = runtime.state.tabs.tabs().len(),
        have_revisions = runtime.state.tabs.have_revisions,
        "tab set settled"
    );

    print_tabs(&runtime.state.tabs);

    let mut content = ContentRegistry::new(Summary);
    if let Some((key, text)) = content.activate_selected(&runtime.state.tabs) {
        println!("content {}: {text}", key.tab);
    }
    Ok(())
}

fn entry_kind(entry: &Entry) -> &'static str {
    if entry.is_directory() {
        "directory"
    } else {
        "file"
    }
}

fn print_tabs(tabs: &TabsState) {
    if let Some(entry) = tabs.entry() {
        println!("{} {}", entry_kind(entry), entry.path);
    }

    let selected = tabs.selected_index();
    for (index, tab) in tabs.tabs().iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        println!(
            "{marker} {index} {:<12} {:<18} {}",
            tab.id.as_str(),
            tab.id.test_id(),
            tab.id.title_key()
        );
    }

    match tabs.selected_tab() {
        Some(tab) => println!("selected: {}", tab.id),
        None => println!("selected: none"),
    }
}
