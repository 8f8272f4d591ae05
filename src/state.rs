use std::path::Path;

use crate::config::ViewerConfig;
use crate::data::store::CatalogStore;
use crate::detail::Chrome;
use crate::navigation::NavigationShell;
use crate::resolver::DirectoryResolver;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Published catalog snapshots.
    pub store: CatalogStore,

    /// List rows and the open detail screen, if any.
    pub shell: NavigationShell,

    /// Maps identifiers to files in the scanned directory.
    pub resolver: DirectoryResolver,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Scan the configured directory once and start on the list screen.
    pub fn new(config: ViewerConfig) -> Self {
        let mut store = CatalogStore::load(&config.resource_dir, &config.prefix);
        let shell = NavigationShell::new(config.title.clone(), &mut store);
        let resolver = DirectoryResolver::new(config.resource_dir.clone());
        Self {
            config,
            store,
            shell,
            resolver,
            status_message: None,
        }
    }

    /// Push the detail screen for `identifier` and resolve its picture.
    pub fn select(&mut self, identifier: &str) {
        if !self.shell.select(identifier) {
            return;
        }
        if let Some(view) = self.shell.detail_mut() {
            view.resolve(&self.resolver);
        }
    }

    pub fn back(&mut self) {
        self.shell.back();
    }

    /// Tap on the detail picture; no-op on the list screen.
    pub fn tap(&mut self) -> Option<Chrome> {
        self.shell.detail_mut().map(|view| view.tap())
    }

    /// Whether the navigation bar should be drawn. Always true on the list.
    pub fn chrome_visible(&self) -> bool {
        self.shell
            .detail()
            .map_or(true, |view| view.chrome().is_visible())
    }

    /// Rescan a different directory with the configured prefix. An open
    /// picture belongs to the old directory, so the list is shown again.
    pub fn open_folder(&mut self, dir: &Path) {
        self.shell.back();
        self.config.resource_dir = dir.to_path_buf();
        self.resolver = DirectoryResolver::new(dir);
        self.store.reload(dir, &self.config.prefix);
        self.shell.sync();

        let catalog = self.store.snapshot();
        self.status_message = catalog
            .is_empty()
            .then(|| format!("No \"{}\" pictures in {}", self.config.prefix, dir.display()));
    }
}
