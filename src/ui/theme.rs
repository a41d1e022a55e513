use crossterm::style::{Color, Stylize};

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub heading: Color,
    pub text: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            heading: Color::Rgb { r: 247, g: 118, b: 142 }, // #F7768E Coral Red
            text: Color::Rgb { r: 169, g: 177, b: 214 },    // #A9B1D6 Light Blue
            success: Color::Rgb { r: 158, g: 206, b: 106 }, // #9ECE6A Green
            warning: Color::Rgb { r: 224, g: 175, b: 104 }, // #E0AF68 Amber
            error: Color::Rgb { r: 247, g: 118, b: 142 },
            dimmed: Color::Rgb { r: 100, g: 110, b: 150 }, // #646E96 Dimmed Blue
        }
    }
}

/// Applies the theme, or nothing when colour output is off
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    theme: Theme,
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self {
            theme: Theme::default(),
            enabled,
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, self.theme.heading, true)
    }

    pub fn text(&self, text: &str) -> String {
        self.paint(text, self.theme.text, false)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, self.theme.success, false)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, self.theme.warning, false)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.theme.error, true)
    }

    pub fn dimmed(&self, text: &str) -> String {
        self.paint(text, self.theme.dimmed, false)
    }
}
