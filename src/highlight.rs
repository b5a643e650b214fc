use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct MessageStyler {
    color_support: ColorSupport,
}

impl Default for MessageStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStyler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn success(&self, message: &str) -> String {
        let text = format!("✓ {}", message);
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text;
        }

        let style = Style::builder().foreground(Color::Green).build();
        text.style(style).to_string()
    }

    pub fn error(&self, message: &str) -> String {
        let text = format!("✗ {}", message);
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text;
        }

        let style = Style::builder().foreground(Color::Red).bold().build();
        text.style(style).to_string()
    }

    pub fn info(&self, message: &str) -> String {
        let text = format!("ℹ {}", message);
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text;
        }

        let style = Style::builder().foreground(Color::Blue).build();
        text.style(style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        let text = format!("⚠ {}", message);
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text;
        }

        let style = Style::builder()
            .foreground(Color::RGB(255, 135, 0))
            .build();
        text.style(style).to_string()
    }

    pub fn header(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let style = Style::builder().foreground(Color::Cyan).bold().build();
        message.style(style).to_string()
    }
}
