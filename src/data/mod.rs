/// Data layer: picture catalog model, directory scanning, and the
/// observable store the UI reads from.
///
/// Architecture:
/// ```text
///   resource directory
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read_dir → prefix filter → sort → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CatalogStore  │  Arc<Catalog> snapshot + mpsc subscribers
///   └──────────────┘
///        │
///        ▼
///   NavigationShell (rows, selection)
/// ```

pub mod loader;
pub mod model;
pub mod store;
