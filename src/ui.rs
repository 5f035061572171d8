use ratatui::prelude::*;

use crate::constants::{CURRENT_STEP, WIZARD_STEPS};
use crate::models::SkipTier;

/// Render the wizard progress line: completed steps, the active step,
/// and the steps still ahead.
pub fn steps_line<'a>() -> Line<'a> {
    let mut spans: Vec<Span> = Vec::new();

    for (index, label) in WIZARD_STEPS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }
        let span = if index < CURRENT_STEP {
            Span::styled(format!("[x] {}", label), Style::default().fg(Color::Green))
        } else if index == CURRENT_STEP {
            Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
            )
        } else {
            Span::styled(format!("[ ] {}", label), Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }

    Line::from(spans)
}

/// Accent color per sprite tier
pub fn tier_color(tier: Option<SkipTier>) -> Color {
    match tier {
        Some(SkipTier::Mini) => Color::Yellow,
        Some(SkipTier::Maxi) => Color::Cyan,
        Some(SkipTier::RollOnOff) => Color::Magenta,
        None => Color::DarkGray,
    }
}

/// ASCII sprite for a tier. Sizes outside the tier table get no sprite
/// and the card simply renders without one.
pub fn sprite(tier: Option<SkipTier>) -> &'static [&'static str] {
    match tier {
        Some(SkipTier::Mini) => &["  \\~~~~~~/  ", "   \\____/   "],
        Some(SkipTier::Maxi) => &[" \\~~~~~~~~~~/ ", "  \\________/  "],
        Some(SkipTier::RollOnOff) => &["|~~~~~~~~~~~~~~|", "|______________|"],
        None => &[],
    }
}

/// Title for the full-screen loading/error popups
pub fn popup_title() -> String {
    format!(" {} ", crate::constants::APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_line_covers_all_steps() {
        let line = steps_line();
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        for label in WIZARD_STEPS {
            assert!(text.contains(label), "missing step label {}", label);
        }
    }

    #[test]
    fn test_unknown_tier_has_no_sprite() {
        assert!(sprite(None).is_empty());
        assert!(!sprite(Some(SkipTier::Mini)).is_empty());
    }

    #[test]
    fn test_popup_title_uses_app_name() {
        assert_eq!(popup_title(), format!(" {} ", crate::constants::APP_NAME));
    }
}
