//! ArticleView: an article reading page with a dismissible settings sidebar.
//!
//! Entry point: opens the article in a WebView window. When built without the
//! `gui` feature, or with `--demo`, runs a console walkthrough instead.

use std::path::PathBuf;

use clap::Parser;

use articleview::app::App;
use articleview::managers::page_shell::PageShell;
use articleview::managers::settings_panel::SettingsPanelTrait;
use articleview::types::article::ArticleField;
use articleview::types::errors::PanelError;
use articleview::types::event::{UiEvent, WindowEvent};

#[derive(Parser, Debug)]
#[command(name = "articleview", version, about = "Article reading page with a settings sidebar")]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, env = "ARTICLEVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Plain-text article to show instead of the configured one
    #[arg(long)]
    article: Option<PathBuf>,

    /// Run the console walkthrough instead of opening a window
    #[arg(long)]
    demo: bool,
}

fn main() {
    let cli = Cli::parse();

    let app = match App::new(cli.config, cli.article) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("articleview: {}", e);
            std::process::exit(1);
        }
    };

    if cli.demo {
        run_demo(app);
    } else {
        launch(app);
    }
}

#[cfg(feature = "gui")]
fn launch(app: App) {
    if let Err(e) = articleview::ui::webview_app::run(app) {
        eprintln!("articleview: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn launch(app: App) {
    run_demo(app);
}

// ─── Console walkthrough ───

fn run_demo(mut app: App) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              ArticleView v{} - Demo Mode                 ║", env!("CARGO_PKG_VERSION"));
    println!("║        Article reading page with a settings sidebar         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let steps: [(&str, fn(&mut PageShell) -> Result<(), PanelError>); 6] = [
        ("Article & Options", demo_options),
        ("Open Panel & Edit Draft", demo_edit_draft),
        ("Dismissal", demo_dismissal),
        ("Submit", demo_submit),
        ("Reset", demo_reset),
        ("Rendering", demo_rendering),
    ];

    for (name, step) in steps {
        section(name);
        if let Err(e) = step(&mut app.shell) {
            println!("  ✗ {}", e);
            std::process::exit(1);
        }
        println!();
    }

    app.shutdown();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ Walkthrough finished after {} commits.", app.shell.commit_count());
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_state(label: &str, shell: &PageShell) {
    println!("  {}: {}", label, shell.committed().inline_style());
}

fn demo_options(shell: &mut PageShell) -> Result<(), PanelError> {
    let article = shell.article();
    println!("  \"{}\" ({} paragraphs, {} min read)",
        article.title, article.paragraphs.len(), article.estimated_read_time_minutes);
    for field in ArticleField::ALL {
        let titles: Vec<&str> = field.options().iter().map(|o| o.title).collect();
        println!("  {:<17} {}", field.label(), titles.join(", "));
    }
    print_state("Committed", shell);
    println!("  ✓ Options OK");
    Ok(())
}

fn demo_edit_draft(shell: &mut PageShell) -> Result<(), PanelError> {
    shell.dispatch(UiEvent::Toggle)?;
    println!("  Panel open: {}", shell.panel().is_open());
    shell.dispatch(UiEvent::ChangeField { field: ArticleField::FontFamily, value: "Merriweather".into() })?;
    shell.dispatch(UiEvent::ChangeField { field: ArticleField::ContentWidth, value: "948px".into() })?;
    println!("  Draft font: {}, width: {}",
        shell.panel().draft().font_family.title, shell.panel().draft().content_width.title);
    print_state("Committed (unchanged)", shell);

    let rejected = shell.dispatch(UiEvent::ChangeField { field: ArticleField::FontSize, value: "99px".into() });
    if let Err(e) = rejected {
        println!("  Rejected: {}", e);
    }
    println!("  ✓ Draft isolation OK");
    Ok(())
}

fn demo_dismissal(shell: &mut PageShell) -> Result<(), PanelError> {
    shell.dispatch(UiEvent::Window(WindowEvent::PointerDown { inside_panel: true }))?;
    println!("  Click inside panel, open: {}", shell.panel().is_open());
    shell.dispatch(UiEvent::Window(WindowEvent::KeyDown { key: "Escape".into() }))?;
    println!("  Escape, open: {}", shell.panel().is_open());
    print_state("Committed (unchanged)", shell);

    shell.dispatch(UiEvent::Toggle)?;
    println!("  Reopened, draft font: {}", shell.panel().draft().font_family.title);
    println!("  ✓ Dismissal OK");
    Ok(())
}

fn demo_submit(shell: &mut PageShell) -> Result<(), PanelError> {
    shell.dispatch(UiEvent::ChangeField { field: ArticleField::BackgroundColor, value: "#FEAFE8".into() })?;
    shell.dispatch(UiEvent::ChangeField { field: ArticleField::FontSize, value: "25px".into() })?;
    shell.dispatch(UiEvent::Submit)?;
    println!("  Panel open: {}", shell.panel().is_open());
    print_state("Committed", shell);
    println!("  ✓ Submit OK");
    Ok(())
}

fn demo_reset(shell: &mut PageShell) -> Result<(), PanelError> {
    shell.dispatch(UiEvent::Toggle)?;
    shell.dispatch(UiEvent::Reset)?;
    println!("  Panel open: {}", shell.panel().is_open());
    print_state("Committed", shell);
    println!("  ✓ Reset OK");
    Ok(())
}

fn demo_rendering(shell: &mut PageShell) -> Result<(), PanelError> {
    let html = shell.render();
    println!("  Page HTML: {} bytes", html.len());
    let update = shell.render_update();
    println!("  Update script: {} bytes, {} style variables", update.to_script().len(), update.style.len());
    println!("  ✓ Rendering OK");
    Ok(())
}
