//! Profile toggle component using egui
//!
//! Owns the fixed profile record and the visibility flag, describes itself via
//! [`ProfileToggle::render`] and paints that description with [`ProfileToggle::show`].

use crate::profile::ProfileRecord;
use crate::view::{ProfileDetails, ProfileView, TITLE, TOGGLE_LABEL};
use crate::visibility::Visibility;

/// Actions that can be triggered from the profile toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileToggleAction {
    /// No action
    None,
    /// The toggle control was activated; carries the new visibility
    Toggled(Visibility),
}

/// Profile toggle UI state
#[derive(Debug, Clone, Default)]
pub struct ProfileToggle {
    profile: ProfileRecord,
    visibility: Visibility,
}

impl ProfileToggle {
    /// Create the component with the fixed record and the profile hidden
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }

    /// Negate the visibility flag. No other state is touched.
    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        log::info!("Profile toggled: {}", self.visibility.display_name());
        self.visibility
    }

    /// Describe the UI for the current state.
    pub fn render(&self) -> ProfileView<'_> {
        let details = self.is_visible().then(|| ProfileDetails {
            img_src: self.profile.img_src(),
            full_name: self.profile.full_name(),
            profession: self.profile.profession(),
            bio: self.profile.bio(),
        });

        ProfileView {
            title: TITLE,
            details,
            toggle_label: TOGGLE_LABEL,
        }
    }

    /// Paint the component into a central panel and return any action triggered
    pub fn show(&mut self, ctx: &egui::Context) -> ProfileToggleAction {
        let mut clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                clicked = self.render().paint(ui);
            });
        });

        if clicked {
            let visibility = self.toggle_visibility();
            ctx.request_repaint();
            ProfileToggleAction::Toggled(visibility)
        } else {
            ProfileToggleAction::None
        }
    }
}
