use eframe::egui::{self, Color32, RichText, Sense, Ui};

use crate::detail::{fit_to_bounds, Content, DetailView, CORNER_RADIUS};

/// What happened on the detail screen this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Tapped,
    Back,
}

// ---------------------------------------------------------------------------
// Picture (central panel, detail screen)
// ---------------------------------------------------------------------------

/// Render the picture stretched to the fixed aspect ratio (whatever its own
/// proportions), or a placeholder when it could not be resolved.
pub fn picture(ui: &mut Ui, view: &DetailView) -> Option<DetailAction> {
    match view.content() {
        Content::Ready(image) => {
            let size = fit_to_bounds(ui.available_size());
            let top = ((ui.available_height() - size.y) / 2.0).max(0.0);
            let mut action = None;
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(top);
                let response = ui.add(
                    egui::Image::from_uri(image.uri.clone())
                        .fit_to_exact_size(size)
                        .maintain_aspect_ratio(false)
                        .rounding(CORNER_RADIUS)
                        .sense(Sense::click()),
                );
                if response.clicked() {
                    action = Some(DetailAction::Tapped);
                }
            });
            action
        }
        Content::Unavailable(reason) => unavailable(ui, view.identifier(), reason),
        Content::Pending => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.spinner();
            });
            None
        }
    }
}

fn unavailable(ui: &mut Ui, identifier: &str, reason: &str) -> Option<DetailAction> {
    let mut action = None;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading(format!("{identifier} is unavailable"));
        ui.label(RichText::new(reason).color(Color32::RED));
        ui.add_space(8.0);
        if ui.button("Back to list").clicked() {
            action = Some(DetailAction::Back);
        }
    });
    action
}
