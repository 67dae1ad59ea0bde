//! Static option tables for the article settings.
//!
//! Every value a setting can take lives in one of these tables; states hold
//! `&'static` references into them, never free-form strings.

use serde::Serialize;

/// One fixed, named choice belonging to a setting's enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleOption {
    pub title: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'static str>,
    /// Class applied to the entry inside a dropdown list (color swatches, width icons).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_class_name: Option<&'static str>,
}

impl ArticleOption {
    const fn plain(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name: Some(class_name),
            option_class_name: None,
        }
    }

    const fn swatch(
        title: &'static str,
        value: &'static str,
        class_name: &'static str,
        option_class_name: &'static str,
    ) -> Self {
        Self {
            title,
            value,
            class_name: Some(class_name),
            option_class_name: Some(option_class_name),
        }
    }
}

pub static FONT_FAMILY_OPTIONS: [ArticleOption; 5] = [
    ArticleOption::plain("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::plain("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::plain("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::plain("Days One", "Days One", "days-one"),
    ArticleOption::plain("Merriweather", "Merriweather", "merriweather"),
];

pub static FONT_SIZE_OPTIONS: [ArticleOption; 3] = [
    ArticleOption::plain("18px", "18px", "font-size-18"),
    ArticleOption::plain("25px", "25px", "font-size-25"),
    ArticleOption::plain("38px", "38px", "font-size-38"),
];

pub static FONT_COLORS: [ArticleOption; 9] = [
    ArticleOption::swatch("Black", "#000000", "font-black", "option-black"),
    ArticleOption::swatch("White", "#FFFFFF", "font-white", "option-white"),
    ArticleOption::swatch("Gray", "#C4C4C4", "font-gray", "option-gray"),
    ArticleOption::swatch("Pink", "#FEAFE8", "font-pink", "option-pink"),
    ArticleOption::swatch("Hot pink", "#FD24AF", "font-fuchsia", "option-fuchsia"),
    ArticleOption::swatch("Yellow", "#FFC802", "font-yellow", "option-yellow"),
    ArticleOption::swatch("Green", "#80D994", "font-green", "option-green"),
    ArticleOption::swatch("Blue", "#6FC1FD", "font-blue", "option-blue"),
    ArticleOption::swatch("Purple", "#5F39AF", "font-purple", "option-purple"),
];

pub static BACKGROUND_COLORS: [ArticleOption; 9] = [
    ArticleOption::swatch("White", "#FFFFFF", "bg-white", "option-white"),
    ArticleOption::swatch("Black", "#000000", "bg-black", "option-black"),
    ArticleOption::swatch("Gray", "#C4C4C4", "bg-gray", "option-gray"),
    ArticleOption::swatch("Pink", "#FEAFE8", "bg-pink", "option-pink"),
    ArticleOption::swatch("Hot pink", "#FD24AF", "bg-fuchsia", "option-fuchsia"),
    ArticleOption::swatch("Yellow", "#FFC802", "bg-yellow", "option-yellow"),
    ArticleOption::swatch("Green", "#80D994", "bg-green", "option-green"),
    ArticleOption::swatch("Blue", "#6FC1FD", "bg-blue", "option-blue"),
    ArticleOption::swatch("Purple", "#5F39AF", "bg-purple", "option-purple"),
];

pub static CONTENT_WIDTHS: [ArticleOption; 2] = [
    ArticleOption::swatch("Wide", "1394px", "width-wide", "option-wide"),
    ArticleOption::swatch("Narrow", "948px", "width-narrow", "option-narrow"),
];

/// Finds an option in `table` by its value, falling back to its title.
pub fn find_option(table: &'static [ArticleOption], key: &str) -> Option<&'static ArticleOption> {
    table
        .iter()
        .find(|o| o.value == key)
        .or_else(|| table.iter().find(|o| o.title == key))
}

/// Whether `option` is one of the entries of `table`.
pub fn contains(table: &[ArticleOption], option: &ArticleOption) -> bool {
    table.iter().any(|o| o == option)
}
