use console::{style, Style};
use dialoguer::theme::ColorfulTheme;
use filmes::Notice;

/// Returns the standard theme used for the sidebar prompts
pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        active_item_style: Style::new().cyan().bold(),
        active_item_prefix: style("❯".to_string()).cyan().bold(),
        inactive_item_prefix: style(" ".to_string()),
        prompt_style: Style::new().bold(),
        prompt_prefix: style("?".to_string()).yellow().bold(),
        success_prefix: style("✔".to_string()).green().bold(),
        error_prefix: style("✖".to_string()).red().bold(),
        hint_style: Style::new().dim(),
        values_style: Style::new().cyan(),
        ..Default::default()
    }
}

pub fn heading_style() -> Style {
    Style::new().bold().underlined()
}

pub fn header_style() -> Style {
    Style::new().bold()
}

pub fn prompt_style() -> Style {
    Style::new().blue()
}

/// Prefix and color for a notice line
pub fn notice_style(notice: &Notice) -> (&'static str, Style) {
    match notice {
        Notice::Success(_) => ("✔", Style::new().green()),
        Notice::Warning(_) => ("!", Style::new().yellow()),
        Notice::Error(_) => ("✖", Style::new().red()),
    }
}
