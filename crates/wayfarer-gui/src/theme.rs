//! Theme and styling constants

use egui::Color32;
use wayfarer_model::{ActivityTag, VisaStatus};

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    /// In-progress indicator color (orange)
    pub const IN_PROGRESS: Color32 = Color32::from_rgb(249, 115, 22);
    /// Informational accent (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
}

/// Badge color for an activity tag. Exhaustive so a new tag cannot ship
/// without a style.
pub fn tag_color(tag: ActivityTag) -> Color32 {
    match tag {
        ActivityTag::Travel => colors::ACCENT,
        ActivityTag::Hotel => Color32::from_rgb(147, 51, 234),
        ActivityTag::Sightseeing => Color32::from_rgb(16, 185, 129),
        ActivityTag::Food => Color32::from_rgb(245, 158, 11),
    }
}

/// Status icon derived from the visa status, never stored separately.
pub fn visa_status_icon(status: VisaStatus) -> (&'static str, Color32) {
    match status {
        VisaStatus::Pending => (egui_phosphor::regular::CIRCLE, Color32::GRAY),
        VisaStatus::InProgress => (egui_phosphor::regular::WARNING_CIRCLE, colors::IN_PROGRESS),
        VisaStatus::Completed => (egui_phosphor::regular::CHECK_CIRCLE, colors::SUCCESS),
        VisaStatus::NotRequired => (egui_phosphor::regular::CHECK_CIRCLE, colors::ACCENT),
    }
}
