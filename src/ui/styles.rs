//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::client::{ClientStatus, ScoreBand};

// =============================================================================
// Panels
// =============================================================================

/// Border of the panel that receives keys.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Column headers and section titles.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_row_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Secondary text: emails, timestamps, hints.
pub fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn nav_item_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

// =============================================================================
// Client data
// =============================================================================

/// Traffic-light color for a protection score band.
pub fn score_band_style(band: ScoreBand) -> Style {
    let color = match band {
        ScoreBand::Low => Color::Red,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::High => Color::Green,
    };
    Style::default().fg(color)
}

pub fn status_badge_style(status: ClientStatus) -> Style {
    let color = match status {
        ClientStatus::NewLead => Color::Blue,
        ClientStatus::AssessmentSent => Color::Yellow,
        ClientStatus::ReportReady => Color::Green,
        ClientStatus::FollowUpNeeded => Color::LightRed,
        ClientStatus::ApplicationStarted => Color::Magenta,
        ClientStatus::Protected => Color::Gray,
    };
    Style::default().fg(color)
}

/// Coverage gap amount; zero gaps are not highlighted.
pub fn coverage_gap_style(gap: u64) -> Style {
    if gap == 0 {
        muted_style()
    } else {
        Style::default().fg(Color::LightRed)
    }
}

// =============================================================================
// Inputs and feedback
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn notice_style() -> Style {
    Style::default().fg(Color::Yellow)
}

// =============================================================================
// Assistant chat
// =============================================================================

pub fn chat_agent_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn chat_assistant_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}
