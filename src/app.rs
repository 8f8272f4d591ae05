use eframe::egui;

use crate::config::ViewerConfig;
use crate::navigation::Screen;
use crate::state::AppState;
use crate::ui::detail::DetailAction;
use crate::ui::panels::BarAction;
use crate::ui::{detail, list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StormViewerApp {
    pub state: AppState,
}

impl StormViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    fn apply_bar_action(&mut self, action: BarAction) {
        match action {
            BarAction::Back => self.state.back(),
            BarAction::OpenFolder(dir) => self.state.open_folder(&dir),
        }
    }
}

impl eframe::App for StormViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.shell.sync();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.back();
        }

        // ---- Top panel: navigation chrome, hidden on tap ----
        if self.state.chrome_visible() {
            let status = self.state.status_message.clone();
            let bar = egui::TopBottomPanel::top("nav_bar")
                .show(ctx, |ui| panels::top_bar(ui, &self.state.shell, status.as_deref()))
                .inner;
            if let Some(action) = bar {
                self.apply_bar_action(action);
            }
        }

        // ---- Central panel: list or picture ----
        let state = &mut self.state;
        egui::CentralPanel::default().show(ctx, |ui| match state.shell.screen() {
            Screen::List => {
                if let Some(identifier) = list::picture_list(ui, &state.shell) {
                    state.select(&identifier);
                }
            }
            Screen::Detail(view) => match detail::picture(ui, view) {
                Some(DetailAction::Tapped) => {
                    state.tap();
                }
                Some(DetailAction::Back) => state.back(),
                None => {}
            },
        });
    }
}
