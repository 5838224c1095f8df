//! Filter Controller
//!
//! Case-insensitive substring match over row labels.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    needle: String,
}

impl Filter {
    #[cfg(test)]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn set(&mut self, text: &str) {
        self.needle = text.to_lowercase();
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.needle
    }

    /// Empty filter matches everything
    pub fn matches(&self, label: &str) -> bool {
        label.to_lowercase().contains(&self.needle)
    }
}
