//! Helper functions for laying out the profile card.
//!
//! Provides consistent spacing and text styling for the component.

/// Maximum width of the profile portrait
pub const IMAGE_MAX_WIDTH: f32 = 250.0;

/// Font size of the profile name line
pub const NAME_FONT_SIZE: f32 = 20.0;

/// Minimum size of the toggle button
pub const BUTTON_MIN_SIZE: [f32; 2] = [120.0, 28.0];

/// Helper to show the page heading with consistent styling.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(title);
    ui.add_space(4.0);
}

/// Helper to show the profile name as a sub-heading.
pub fn name_heading(ui: &mut egui::Ui, name: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(name).size(NAME_FONT_SIZE).strong());
}

/// Helper to show a `Label: value` line with the label emphasised.
pub fn labeled_value(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}

/// Helper to add spacing after a section.
pub fn section_spacing(ui: &mut egui::Ui) {
    ui.add_space(12.0);
}
