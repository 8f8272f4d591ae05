use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::detail::Content;
use crate::navigation::NavigationShell;

/// What the navigation bar asked for this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarAction {
    Back,
    OpenFolder(PathBuf),
}

// ---------------------------------------------------------------------------
// Top bar (navigation chrome)
// ---------------------------------------------------------------------------

/// Render the navigation bar: menu, back button and the screen title.
pub fn top_bar(ui: &mut Ui, shell: &NavigationShell, status: Option<&str>) -> Option<BarAction> {
    let mut action = None;
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                action = pick_folder().map(BarAction::OpenFolder);
                ui.close_menu();
            }
        });

        ui.separator();

        match shell.detail() {
            Some(view) => {
                if ui.button("‹ Back").clicked() {
                    action = Some(BarAction::Back);
                }
                ui.label(RichText::new(view.title()).strong());
                if let Content::Ready(image) = view.content() {
                    ui.weak(format!("{}×{}", image.width, image.height));
                }
            }
            None => {
                ui.heading(shell.title());
                ui.label(format!("{} pictures", shell.row_count()));
            }
        }

        if let Some(msg) = status {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    action
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

fn pick_folder() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open picture folder")
        .pick_folder()
}
