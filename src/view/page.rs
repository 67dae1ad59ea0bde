//! Page rendering.
//!
//! The page is rendered once in full; afterwards only the panel markup and
//! the container's custom properties are pushed to the WebView.

use serde::Serialize;

use crate::managers::settings_panel::{SettingsPanel, SettingsPanelTrait};
use crate::services::article_content::{ArticleContent, ArticleContentTrait};
use crate::types::article::{ArticleField, ArticleState, ControlKind};
use crate::types::content::Article;
use crate::view::controls::{ArrowButton, Button, ButtonRole, ButtonVariant, Control, RadioGroup, Select};

const PAGE_CSS: &str = include_str!("../../resources/ui/styles.css");
const PAGE_JS: &str = include_str!("../../resources/ui/page.js");

/// Incremental update applied by `window.__av_apply` in the page script.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageUpdate {
    pub panel_html: String,
    pub style: Vec<(String, String)>,
    pub open: bool,
}

impl PageUpdate {
    /// Script that applies this update in the WebView.
    pub fn to_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "null".to_string());
        format!("if(window.__av_apply)window.__av_apply({})", json)
    }
}

/// Arrow toggle plus, while open, the settings sidebar with its form.
pub fn render_panel(panel: &SettingsPanel) -> String {
    let open = panel.is_open();
    let mut html = ArrowButton { expanded: open }.render();
    if !open {
        return html;
    }

    let draft = panel.draft();
    html.push_str("<aside class=\"sidebar sidebar-open\" id=\"settings-panel\">");
    html.push_str("<form class=\"settings-form\" id=\"settings-form\">");
    for field in ArticleField::ALL {
        let control = match field.control() {
            ControlKind::Select => Select {
                title: field.label(),
                field,
                options: field.options(),
                selected: draft.get(field),
            }
            .render(),
            ControlKind::RadioGroup => RadioGroup {
                name: field.key(),
                title: field.label(),
                options: field.options(),
                selected: draft.get(field),
            }
            .render(),
        };
        html.push_str(&control);
    }
    html.push_str("<div class=\"form-buttons\">");
    html.push_str(
        &Button { title: "Reset", role: ButtonRole::Reset, variant: ButtonVariant::Clear }.render(),
    );
    html.push_str(
        &Button { title: "Apply", role: ButtonRole::Submit, variant: ButtonVariant::Apply }.render(),
    );
    html.push_str("</div></form></aside>");
    html
}

pub fn render_update(committed: &ArticleState, panel: &SettingsPanel) -> PageUpdate {
    PageUpdate {
        panel_html: render_panel(panel),
        style: committed
            .style_variables()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        open: panel.is_open(),
    }
}

/// Complete HTML document for the WebView.
pub fn render_page(committed: &ArticleState, panel: &SettingsPanel, article: &Article) -> String {
    let article_html = ArticleContent::new().render_html(article);
    let panel_html = render_panel(panel);
    let style = committed.inline_style();

    let mut html = String::with_capacity(
        PAGE_CSS.len() + PAGE_JS.len() + article_html.len() + panel_html.len() + 512,
    );
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
    html.push_str(&crate::services::article_content::escape_html(&article.title));
    html.push_str("</title><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    html.push_str(&format!("<main class=\"main\" id=\"main\" style=\"{}\">", style));
    html.push_str("<div id=\"panel-root\">");
    html.push_str(&panel_html);
    html.push_str("</div>");
    html.push_str(&article_html);
    html.push_str("</main><script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}
