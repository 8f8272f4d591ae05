use eframe::egui::Vec2;

use crate::resolver::{ImageResolver, ResolvedImage};

/// Pictures are shown at the bundle's native 1024x768 aspect ratio.
pub const ASPECT_RATIO: f32 = 1024.0 / 768.0;
pub const CORNER_RADIUS: f32 = 10.0;
pub const PADDING: f32 = 16.0;

// ---------------------------------------------------------------------------
// Chrome visibility
// ---------------------------------------------------------------------------

/// Whether the navigation bar is shown above the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chrome {
    #[default]
    Visible,
    Hidden,
}

impl Chrome {
    pub fn toggled(self) -> Self {
        match self {
            Chrome::Visible => Chrome::Hidden,
            Chrome::Hidden => Chrome::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Chrome::Visible
    }
}

// ---------------------------------------------------------------------------
// Detail view state
// ---------------------------------------------------------------------------

/// What the detail screen can draw for its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Not resolved yet.
    Pending,
    Ready(ResolvedImage),
    /// Resolution failed; the reason is shown in place of the picture.
    Unavailable(String),
}

/// State of one open detail screen. A fresh instance is created for every
/// selection, so chrome visibility never carries over between pictures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    identifier: String,
    chrome: Chrome,
    content: Content,
}

impl DetailView {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            chrome: Chrome::Visible,
            content: Content::Pending,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Screen title: the identifier itself.
    pub fn title(&self) -> &str {
        &self.identifier
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// A tap on the picture flips chrome visibility.
    pub fn tap(&mut self) -> Chrome {
        self.chrome = self.chrome.toggled();
        log::debug!("{}: chrome {:?}", self.identifier, self.chrome);
        self.chrome
    }

    /// Resolve the picture once; later calls return the cached outcome.
    pub fn resolve(&mut self, resolver: &dyn ImageResolver) -> &Content {
        if self.content == Content::Pending {
            self.content = match resolver.resolve(&self.identifier) {
                Ok(image) => Content::Ready(image),
                Err(e) => {
                    log::warn!("Cannot display {}: {e}", self.identifier);
                    Content::Unavailable(e.to_string())
                }
            };
        }
        &self.content
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Largest `ASPECT_RATIO` rectangle that fits inside `available` after
/// `PADDING` on every side. Never crops, never negative.
pub fn fit_to_bounds(available: Vec2) -> Vec2 {
    let inner = (available - Vec2::splat(2.0 * PADDING)).max(Vec2::ZERO);
    if inner.x / ASPECT_RATIO <= inner.y {
        Vec2::new(inner.x, inner.x / ASPECT_RATIO)
    } else {
        Vec2::new(inner.y * ASPECT_RATIO, inner.y)
    }
}
