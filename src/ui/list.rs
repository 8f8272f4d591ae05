use eframe::egui::{self, ScrollArea, Ui};

use crate::navigation::NavigationShell;

// ---------------------------------------------------------------------------
// Picture list (central panel, master screen)
// ---------------------------------------------------------------------------

/// Render one row per catalog identifier. Returns the identifier the user
/// picked this frame, if any.
pub fn picture_list(ui: &mut Ui, shell: &NavigationShell) -> Option<String> {
    if shell.row_count() == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No pictures found  (File → Open folder…)");
        });
        return None;
    }

    let mut picked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for identifier in shell.rows() {
                // The identifier is the row's egui id as well as its label.
                ui.push_id(identifier, |ui: &mut Ui| {
                    let row = ui.add_sized(
                        [ui.available_width(), 28.0],
                        egui::Button::new(identifier).frame(false),
                    );
                    if row.clicked() {
                        picked = Some(identifier.to_string());
                    }
                });
                ui.separator();
            }
        });
    picked
}
