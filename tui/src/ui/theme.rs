use ratatui::style::{Color, Modifier, Style};

/// Plot palette, close to a classic matplotlib figure on a dark terminal.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(12, 12, 16);
    pub const FG: Color = Color::Rgb(220, 220, 220);
    pub const FG_DIM: Color = Color::Rgb(140, 140, 150);
    pub const FG_MUTED: Color = Color::Rgb(80, 80, 90);

    pub const LINE_BLUE: Color = Color::Rgb(70, 130, 255);
    pub const POINT_RED: Color = Color::Rgb(255, 80, 80);
    pub const RESIDUAL_GREEN: Color = Color::Rgb(60, 200, 90);
    pub const TEST_ORANGE: Color = Color::Rgb(255, 170, 40);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 230, 0);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The focused control row.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::POINT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Intercept values, red as in the equation header.
    pub fn intercept() -> Style {
        Style::default()
            .fg(Self::POINT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Slope values, green as in the equation header.
    pub fn slope() -> Style {
        Style::default()
            .fg(Self::RESIDUAL_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ssr() -> Style {
        Style::default()
            .fg(Self::LINE_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn line() -> Style {
        Style::default().fg(Self::LINE_BLUE)
    }

    pub fn points() -> Style {
        Style::default().fg(Self::POINT_RED)
    }

    pub fn test_points() -> Style {
        Style::default().fg(Self::TEST_ORANGE)
    }

    pub fn residuals() -> Style {
        Style::default().fg(Self::RESIDUAL_GREEN)
    }

    pub fn axes() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The marker of the current parameter value on a sweep curve.
    pub fn current() -> Style {
        Style::default()
            .fg(Self::RESIDUAL_GREEN)
            .add_modifier(Modifier::BOLD)
    }
}
