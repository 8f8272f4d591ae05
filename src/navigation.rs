use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use crate::data::model::Catalog;
use crate::data::store::CatalogStore;
use crate::detail::DetailView;

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The picture list.
    List,
    /// One picture, pushed on top of the list.
    Detail(DetailView),
}

// ---------------------------------------------------------------------------
// NavigationShell – list rows and the master/detail transition
// ---------------------------------------------------------------------------

/// Shows the catalog as rows and owns the list → detail transition.
pub struct NavigationShell {
    title: String,
    catalog: Arc<Catalog>,
    updates: Receiver<Arc<Catalog>>,
    screen: Screen,
}

impl NavigationShell {
    pub fn new(title: impl Into<String>, store: &mut CatalogStore) -> Self {
        let mut shell = Self {
            title: title.into(),
            catalog: store.snapshot(),
            updates: store.subscribe(),
            screen: Screen::List,
        };
        shell.sync();
        shell
    }

    /// Row labels in catalog order; each label is also the row key.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.catalog.iter()
    }

    pub fn row_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match &self.screen {
            Screen::Detail(view) => Some(view),
            Screen::List => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        match &mut self.screen {
            Screen::Detail(view) => Some(view),
            Screen::List => None,
        }
    }

    /// Title of the visible screen.
    pub fn title(&self) -> &str {
        match &self.screen {
            Screen::List => &self.title,
            Screen::Detail(view) => view.title(),
        }
    }

    /// Open the detail screen for `identifier`. Identifiers that are not in
    /// the catalog are ignored and `false` is returned.
    pub fn select(&mut self, identifier: &str) -> bool {
        if !self.catalog.contains(identifier) {
            log::debug!("Ignoring selection of unknown picture {identifier:?}");
            return false;
        }
        log::debug!("List → {identifier}");
        self.screen = Screen::Detail(DetailView::new(identifier));
        true
    }

    #[cfg(test)]
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.catalog.get(index).map(str::to_owned) {
            Some(identifier) => self.select(&identifier),
            None => false,
        }
    }

    /// Dismiss the detail screen, dropping its state.
    pub fn back(&mut self) {
        if let Screen::Detail(view) = &self.screen {
            log::debug!("{} → List", view.identifier());
        }
        self.screen = Screen::List;
    }

    /// Adopt any snapshot published since the last call. Returns whether
    /// the rows changed. An open picture that left the catalog is closed.
    pub fn sync(&mut self) -> bool {
        let mut latest = None;
        loop {
            match self.updates.try_recv() {
                Ok(catalog) => latest = Some(catalog),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        let Some(catalog) = latest else {
            return false;
        };
        let changed = !Arc::ptr_eq(&catalog, &self.catalog);
        self.catalog = catalog;

        let vanished = self
            .detail()
            .is_some_and(|view| !self.catalog.contains(view.identifier()));
        if vanished {
            self.back();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::Chrome;

    fn storm_store() -> CatalogStore {
        CatalogStore::new(Catalog::from_names([
            "nssl0001.jpg",
            "nssl0002.jpg",
            "nssl0003.jpg",
        ]))
    }

    #[test]
    fn rows_follow_catalog_order() {
        let mut store = storm_store();
        let shell = NavigationShell::new("Storm Viewer", &mut store);

        assert_eq!(
            shell.rows().collect::<Vec<_>>(),
            ["nssl0001.jpg", "nssl0002.jpg", "nssl0003.jpg"]
        );
        assert_eq!(shell.title(), "Storm Viewer");
        assert_eq!(shell.screen(), &Screen::List);
    }

    #[test]
    fn empty_catalog_has_no_rows() {
        let mut store = CatalogStore::new(Catalog::default());
        let mut shell = NavigationShell::new("Storm Viewer", &mut store);

        assert_eq!(shell.row_count(), 0);
        assert!(!shell.select_index(0));
    }

    #[test]
    fn selecting_a_row_opens_detail_titled_by_identifier() {
        let mut store = storm_store();
        let mut shell = NavigationShell::new("Storm Viewer", &mut store);

        assert!(shell.select("nssl0002.jpg"));

        let view = shell.detail().expect("detail screen should be open");
        assert_eq!(view.title(), "nssl0002.jpg");
        assert_eq!(view.chrome(), Chrome::Visible);
        assert_eq!(shell.title(), "nssl0002.jpg");
    }

    #[test]
    fn unknown_identifier_stays_on_list() {
        let mut store = storm_store();
        let mut shell = NavigationShell::new("Storm Viewer", &mut store);

        assert!(!shell.select("readme.txt"));
        assert_eq!(shell.screen(), &Screen::List);
    }

    #[test]
    fn chrome_state_does_not_survive_navigation() {
        let mut store = storm_store();
        let mut shell = NavigationShell::new("Storm Viewer", &mut store);

        shell.select_index(0);
        shell.detail_mut().expect("detail open").tap();
        assert_eq!(shell.detail().map(DetailView::chrome), Some(Chrome::Hidden));

        shell.back();
        assert_eq!(shell.screen(), &Screen::List);

        shell.select_index(0);
        assert_eq!(shell.detail().map(DetailView::chrome), Some(Chrome::Visible));
    }

    #[test]
    fn sync_adopts_new_snapshot_and_closes_vanished_picture() {
        let mut store = storm_store();
        let mut shell = NavigationShell::new("Storm Viewer", &mut store);
        shell.select("nssl0003.jpg");

        store.replace(Catalog::from_names(["nssl0001.jpg"]));

        assert!(shell.sync());
        assert_eq!(shell.row_count(), 1);
        assert_eq!(shell.screen(), &Screen::List);
        assert!(!shell.sync());
    }

    #[test]
    fn sync_keeps_picture_that_is_still_listed() {
        let mut store = storm_store();
        let mut shell = NavigationShell::new("Storm Viewer", &mut store);
        shell.select("nssl0001.jpg");

        store.replace(Catalog::from_names(["nssl0001.jpg", "nssl0009.jpg"]));
        shell.sync();

        assert_eq!(shell.title(), "nssl0001.jpg");
    }
}
