use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLORS: [&str; 5] = ["#f8a769", "#ffd982", "#bbcb7d", "#79aeeb", "#8a8c91"];
pub const FALLBACK_COLOR: &str = "#808080";

/// Cyclic color palette for pie slices and legends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub colors: Vec<String>,
    pub fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect(),
            fallback: FALLBACK_COLOR.to_owned(),
        }
    }
}

impl Palette {
    /// Gives each distinct label the next palette color, wrapping around, in
    /// the order labels first appear.
    pub fn assign<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> ColorMap {
        let mut colors: HashMap<String, String> = HashMap::new();
        if self.colors.is_empty() {
            return ColorMap {
                colors,
                fallback: self.fallback.clone(),
            };
        }

        for label in labels {
            if colors.contains_key(label) {
                continue;
            }
            let color = self.colors[colors.len() % self.colors.len()].clone();
            colors.insert(label.to_owned(), color);
        }

        ColorMap {
            colors,
            fallback: self.fallback.clone(),
        }
    }
}

/// Label to color lookup built by [`Palette::assign`].
#[derive(Clone, Debug)]
pub struct ColorMap {
    colors: HashMap<String, String>,
    fallback: String,
}

impl ColorMap {
    pub fn color_for(&self, label: &str) -> &str {
        self.colors
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}
