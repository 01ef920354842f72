//! Profile toggle component for egui.
//!
//! This crate provides a self-contained UI component that shows a fixed
//! profile card behind a show/hide control. It includes:
//!
//! - [`ProfileRecord`]: the read-only data describing the displayed subject
//! - [`Visibility`]: the two-state flag driving conditional display
//! - [`ProfileView`]: a pure description of what the component shows
//! - [`ProfileToggle`]: the component itself, owning state and painting via egui

pub mod component;
pub mod profile;
pub mod section;
pub mod view;
pub mod visibility;

// Re-export main types for convenience
pub use component::{ProfileToggle, ProfileToggleAction};
pub use profile::ProfileRecord;
pub use view::{ProfileDetails, ProfileView, TOGGLE_LABEL, TITLE};
pub use visibility::Visibility;
