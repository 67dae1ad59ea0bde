//! Primitive controls rendered into the settings panel.
//!
//! Controls are stateless: they render the current selection and tag their
//! interactive elements with `data-*` attributes that the page script turns
//! into IPC messages. The dropdown's own open/closed state lives in the page
//! script, independent of the settings panel.

use crate::services::article_content::escape_html;
use crate::types::article::ArticleField;
use crate::types::options::ArticleOption;

/// A renderable control.
pub trait Control {
    fn render(&self) -> String;
}

/// Dropdown selector.
pub struct Select<'a> {
    pub title: &'a str,
    pub field: ArticleField,
    pub options: &'a [ArticleOption],
    pub selected: &'a ArticleOption,
}

impl Control for Select<'_> {
    fn render(&self) -> String {
        let mut html = String::with_capacity(512 + self.options.len() * 128);
        html.push_str(&format!(
            "<div class=\"select\" data-select data-field=\"{}\">",
            self.field.key()
        ));
        html.push_str(&format!("<h3 class=\"control-title\">{}</h3>", escape_html(self.title)));
        html.push_str(&format!(
            "<button type=\"button\" class=\"select-placeholder {}\" data-select-toggle>{}</button>",
            self.selected.option_class_name.unwrap_or(""),
            escape_html(self.selected.title)
        ));
        html.push_str("<ul class=\"select-list\" role=\"listbox\">");
        for option in self.options {
            let selected = option == self.selected;
            html.push_str(&format!(
                "<li class=\"select-option {}{}\" role=\"option\" aria-selected=\"{}\" data-field=\"{}\" data-value=\"{}\">{}</li>",
                option.option_class_name.unwrap_or(""),
                if selected { " select-option-selected" } else { "" },
                selected,
                self.field.key(),
                escape_html(option.value),
                escape_html(option.title)
            ));
        }
        html.push_str("</ul></div>");
        html
    }
}

/// Group of mutually exclusive radio buttons.
pub struct RadioGroup<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub options: &'a [ArticleOption],
    pub selected: &'a ArticleOption,
}

impl Control for RadioGroup<'_> {
    fn render(&self) -> String {
        let mut html = String::with_capacity(256 + self.options.len() * 160);
        html.push_str("<div class=\"radio-group\">");
        html.push_str(&format!("<h3 class=\"control-title\">{}</h3>", escape_html(self.title)));
        html.push_str("<div class=\"radio-items\">");
        for option in self.options {
            html.push_str(&format!(
                "<label class=\"radio-item\"><input type=\"radio\" name=\"{name}\" data-field=\"{name}\" value=\"{value}\"{checked}/><span>{title}</span></label>",
                name = self.name,
                value = escape_html(option.value),
                checked = if option == self.selected { " checked" } else { "" },
                title = escape_html(option.title)
            ));
        }
        html.push_str("</div></div>");
        html
    }
}

/// HTML `type` of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Submit,
    Reset,
}

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Apply,
    Clear,
}

pub struct Button<'a> {
    pub title: &'a str,
    pub role: ButtonRole,
    pub variant: ButtonVariant,
}

impl Control for Button<'_> {
    fn render(&self) -> String {
        let html_type = match self.role {
            ButtonRole::Submit => "submit",
            ButtonRole::Reset => "reset",
        };
        let variant = match self.variant {
            ButtonVariant::Apply => "button-apply",
            ButtonVariant::Clear => "button-clear",
        };
        format!(
            "<button type=\"{}\" class=\"button {}\">{}</button>",
            html_type,
            variant,
            escape_html(self.title)
        )
    }
}

/// The arrow that opens the panel; points the other way while expanded.
pub struct ArrowButton {
    pub expanded: bool,
}

impl Control for ArrowButton {
    fn render(&self) -> String {
        format!(
            "<button type=\"button\" class=\"arrow-button{}\" data-action=\"toggle\" aria-label=\"Open article settings\" aria-expanded=\"{}\"><span class=\"arrow\">&#10148;</span></button>",
            if self.expanded { " arrow-button-open" } else { "" },
            self.expanded
        )
    }
}
