//! Pure description of what the profile toggle displays.
//!
//! [`ProfileView`] is computed from component state without side effects and
//! can either be painted into an egui `Ui` or formatted as plain text.

use crate::section::{self, BUTTON_MIN_SIZE, IMAGE_MAX_WIDTH};
use std::fmt;

/// Page title, always displayed
pub const TITLE: &str = "State Checkpoint";

/// Label of the show/hide control, always displayed
pub const TOGGLE_LABEL: &str = "Toggler Show";

/// Profile block contents, borrowed from the record they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDetails<'a> {
    pub img_src: &'a str,
    pub full_name: &'a str,
    pub profession: &'a str,
    pub bio: &'a str,
}

/// Everything the component shows for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileView<'a> {
    /// Heading text
    pub title: &'static str,
    /// Profile block, present only while visible
    pub details: Option<ProfileDetails<'a>>,
    /// Toggle control label
    pub toggle_label: &'static str,
}

impl ProfileView<'_> {
    /// Paint the description and report whether the toggle control was clicked.
    pub fn paint(&self, ui: &mut egui::Ui) -> bool {
        section::section_heading(ui, self.title);

        if let Some(details) = &self.details {
            ui.add(
                egui::Image::from_uri(details.img_src)
                    .max_width(IMAGE_MAX_WIDTH)
                    .show_loading_spinner(true),
            );
            section::name_heading(ui, details.full_name);
            section::labeled_value(ui, "Profession: ", details.profession);
            section::labeled_value(ui, "Bio: ", details.bio);
            section::section_spacing(ui);
        }

        ui.add(egui::Button::new(self.toggle_label).min_size(BUTTON_MIN_SIZE.into()))
            .clicked()
    }
}

impl fmt::Display for ProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        if let Some(details) = &self.details {
            writeln!(f, "[image: {}]", details.img_src)?;
            writeln!(f, "## {}", details.full_name)?;
            writeln!(f, "Profession: {}", details.profession)?;
            writeln!(f, "Bio: {}", details.bio)?;
        }
        write!(f, "[{}]", self.toggle_label)
    }
}
