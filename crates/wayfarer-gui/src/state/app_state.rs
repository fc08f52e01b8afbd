//! Shell-level state

/// Top-level shell state. View-local state (selected day, checklist filter,
/// dialog drafts) lives on the individual view structs instead.
pub struct AppState {
    /// Active section in the sidebar navigation
    pub section: Section,
    /// Whether the sidebar shows labels or icons only
    pub sidebar_expanded: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            sidebar_expanded: true,
        }
    }
}

/// One entry of the sidebar navigation, each presenting one slice of the
/// itinerary document.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    #[default]
    Itinerary,
    Routes,
    Travelers,
    Stays,
    Finance,
    Checklist,
}

impl Section {
    /// Get display name for the section
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Itinerary => "Itinerary",
            Self::Routes => "Routes",
            Self::Travelers => "Travelers",
            Self::Stays => "Stays",
            Self::Finance => "Finance",
            Self::Checklist => "Checklist",
        }
    }

    /// Get sidebar icon for the section
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Summary => egui_phosphor::regular::BRIEFCASE,
            Self::Itinerary => egui_phosphor::regular::CALENDAR,
            Self::Routes => egui_phosphor::regular::MAP_TRIFOLD,
            Self::Travelers => egui_phosphor::regular::SHIELD_CHECK,
            Self::Stays => egui_phosphor::regular::HOUSE,
            Self::Finance => egui_phosphor::regular::CREDIT_CARD,
            Self::Checklist => egui_phosphor::regular::CHECK_SQUARE,
        }
    }

    /// Get all sections in sidebar order
    pub fn all() -> &'static [Section] {
        &[
            Self::Summary,
            Self::Itinerary,
            Self::Routes,
            Self::Travelers,
            Self::Stays,
            Self::Finance,
            Self::Checklist,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_appears_in_sidebar_order() {
        let all = Section::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Section::Summary);
        // Labels are unique; duplicate entries would be a nav bug.
        let mut labels: Vec<&str> = all.iter().map(Section::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);
    }

    #[test]
    fn default_section_is_the_itinerary() {
        assert_eq!(AppState::default().section, Section::Itinerary);
    }
}
