use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::errors::PanelError;
use super::options::{
    self, ArticleOption, BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS,
};

/// The five article settings a reader can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    ContentWidth,
    BackgroundColor,
}

/// How a field is presented in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Select,
    RadioGroup,
}

impl ArticleField {
    /// Fields in the order the panel lays them out.
    pub const ALL: [ArticleField; 5] = [
        ArticleField::FontFamily,
        ArticleField::FontSize,
        ArticleField::FontColor,
        ArticleField::ContentWidth,
        ArticleField::BackgroundColor,
    ];

    /// Wire name used by the page script and the RPC driver.
    pub fn key(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "fontFamily",
            ArticleField::FontSize => "fontSize",
            ArticleField::FontColor => "fontColor",
            ArticleField::ContentWidth => "contentWidth",
            ArticleField::BackgroundColor => "backgroundColor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "Font",
            ArticleField::FontSize => "Font size",
            ArticleField::FontColor => "Text color",
            ArticleField::ContentWidth => "Container width",
            ArticleField::BackgroundColor => "Background color",
        }
    }

    pub fn control(self) -> ControlKind {
        match self {
            ArticleField::FontSize | ArticleField::ContentWidth => ControlKind::RadioGroup,
            _ => ControlKind::Select,
        }
    }

    pub fn options(self) -> &'static [ArticleOption] {
        match self {
            ArticleField::FontFamily => &FONT_FAMILY_OPTIONS,
            ArticleField::FontSize => &FONT_SIZE_OPTIONS,
            ArticleField::FontColor => &FONT_COLORS,
            ArticleField::ContentWidth => &CONTENT_WIDTHS,
            ArticleField::BackgroundColor => &BACKGROUND_COLORS,
        }
    }

    /// Resolves a value (or title) against this field's table.
    pub fn resolve(self, value: &str) -> Result<&'static ArticleOption, PanelError> {
        options::find_option(self.options(), value).ok_or_else(|| PanelError::UnknownOption {
            field: self.key().to_string(),
            value: value.to_string(),
        })
    }

    /// The CSS custom property this field drives on the page container.
    pub fn css_variable(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "--font-family",
            ArticleField::FontSize => "--font-size",
            ArticleField::FontColor => "--font-color",
            ArticleField::ContentWidth => "--container-width",
            ArticleField::BackgroundColor => "--bg-color",
        }
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ArticleField {
    type Err = PanelError;

    /// Accepts both the camelCase wire name and snake_case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fontFamily" | "font_family" => Ok(ArticleField::FontFamily),
            "fontSize" | "font_size" => Ok(ArticleField::FontSize),
            "fontColor" | "font_color" => Ok(ArticleField::FontColor),
            "contentWidth" | "content_width" => Ok(ArticleField::ContentWidth),
            "backgroundColor" | "background_color" => Ok(ArticleField::BackgroundColor),
            other => Err(PanelError::UnknownField(other.to_string())),
        }
    }
}

/// A full set of article settings: one option per field.
///
/// Used for both the committed state (page shell) and the draft (settings panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleState {
    pub font_family: &'static ArticleOption,
    pub font_size: &'static ArticleOption,
    pub font_color: &'static ArticleOption,
    pub content_width: &'static ArticleOption,
    pub background_color: &'static ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: &FONT_FAMILY_OPTIONS[0],
            font_size: &FONT_SIZE_OPTIONS[0],
            font_color: &FONT_COLORS[0],
            content_width: &CONTENT_WIDTHS[0],
            background_color: &BACKGROUND_COLORS[0],
        }
    }
}

impl ArticleState {
    pub fn get(&self, field: ArticleField) -> &'static ArticleOption {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::ContentWidth => self.content_width,
            ArticleField::BackgroundColor => self.background_color,
        }
    }

    /// Replaces one field. The option must come from that field's table.
    pub fn set(&mut self, field: ArticleField, option: &'static ArticleOption) -> Result<(), PanelError> {
        if !options::contains(field.options(), option) {
            return Err(PanelError::UnknownOption {
                field: field.key().to_string(),
                value: option.value.to_string(),
            });
        }
        match field {
            ArticleField::FontFamily => self.font_family = option,
            ArticleField::FontSize => self.font_size = option,
            ArticleField::FontColor => self.font_color = option,
            ArticleField::ContentWidth => self.content_width = option,
            ArticleField::BackgroundColor => self.background_color = option,
        }
        Ok(())
    }

    /// Builds a state from `(field, value)` pairs on top of the defaults.
    pub fn from_values<'a, I>(values: I) -> Result<Self, PanelError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::default();
        for (key, value) in values {
            let field: ArticleField = key.parse()?;
            state.set(field, field.resolve(value)?)?;
        }
        Ok(state)
    }

    /// Whether every field holds an entry of its own table.
    pub fn is_consistent(&self) -> bool {
        ArticleField::ALL
            .iter()
            .all(|f| options::contains(f.options(), self.get(*f)))
    }

    /// The five custom properties applied to the article container, in field order.
    pub fn style_variables(&self) -> Vec<(&'static str, &'static str)> {
        ArticleField::ALL
            .iter()
            .map(|f| (f.css_variable(), self.get(*f).value))
            .collect()
    }

    /// Inline `style` attribute value carrying the custom properties.
    pub fn inline_style(&self) -> String {
        self.style_variables()
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }
}
