use crate::{Color, parse::parse_color};

/// State of the hex text field.
///
/// It always displays the canonical `#rrggbbaa` text of the last accepted
/// color. Rejected text leaves it untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexEdit {
    committed: String,
}

impl HexEdit {
    pub fn new(color: Color) -> Self {
        Self {
            committed: color.to_hex(),
        }
    }

    /// The text the field should display.
    pub fn text(&self) -> &str {
        &self.committed
    }

    /// Show a color set from elsewhere.
    pub fn set_color(&mut self, color: Color) {
        self.committed = color.to_hex();
    }

    /// Commit text typed by the user.
    ///
    /// Returns the parsed color, or `None` when the text is unchanged or
    /// cannot be parsed.
    pub fn commit(&mut self, text: &str) -> Option<Color> {
        let text = simplify_whitespace(text);
        if text == self.committed {
            return None;
        }

        match parse_color(&text) {
            Ok(color) => {
                self.set_color(color);
                Some(color)
            }
            Err(err) => {
                tracing::debug!("ignored color text {:?}: {}", text, err);
                None
            }
        }
    }
}

/// Trim and collapse inner whitespace runs to one space.
fn simplify_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
