use anyhow::{anyhow, Context, Result};
use cli::Cli;
use std::path::Path;
use std::process::ExitCode;

use config::{Config, ConfigLayer};
use diagnostics::Diagnostics;
use dom::Document;
use linter::LintIssue;

mod cli;
mod config;
mod diagnostics;
mod dom;
mod ingest;
mod l10n;
mod linter;
mod people;
mod profiles;
mod templates;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Render {
            input,
            config,
            output,
        } => render(input, config, output),
        cli::Commands::Lint { input, config } => lint(input, config),
    }
}

fn load_user_layer(path: &Path) -> Result<ConfigLayer> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to load {} contents", path.display()))?;
    toml::from_str(&contents).with_context(|| "Failed to parse TOML")
}

fn load_document(path: &Path) -> Result<Document> {
    let markdown = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source document {}", path.display()))?;
    Ok(ingest::parse_markdown(&markdown))
}

fn render(input: &Path, config: &Path, output: &Path) -> Result<()> {
    let user = load_user_layer(config)?;
    let mut doc = load_document(input)?;

    let mut diagnostics = Diagnostics::new();
    let conf = profiles::kikv::resolve(user, &mut diagnostics)
        .with_context(|| "Failed to resolve configuration")?;

    let registry = profiles::kikv::lint_registry();
    let issues = registry.run(&doc, &conf, &mut diagnostics);

    profiles::kikv::headers::render(&conf, &mut doc, &mut diagnostics)
        .with_context(|| "Failed to render document header")?;

    let html = page(&conf, &doc);
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write output file {}", output.display()))?;

    report(&diagnostics, &issues);
    println!("  Output: {}", output.display());
    Ok(())
}

fn lint(input: &Path, config: &Path) -> Result<()> {
    let user = load_user_layer(config)?;
    let doc = load_document(input)?;

    let mut diagnostics = Diagnostics::new();
    let conf = profiles::kikv::resolve(user, &mut diagnostics)
        .with_context(|| "Failed to resolve configuration")?;

    let registry = profiles::kikv::lint_registry();
    let issues = registry.run(&doc, &conf, &mut diagnostics);
    report(&diagnostics, &issues);

    if issues.is_empty() {
        println!("No lint issues found.");
        Ok(())
    } else {
        Err(anyhow!("found {} lint issue(s)", issues.len()))
    }
}

/// Wrap the rendered document body in a complete HTML page.
fn page(conf: &Config, doc: &Document) -> String {
    let title = doc
        .element_by_id("title")
        .map(|el| doc.text_content(el))
        .unwrap_or_else(|| conf.short_name.clone());
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8"/>
<title>{title}</title>
</head>
{body}
</html>
"#,
        lang = html_escape::encode_double_quoted_attribute(&conf.language),
        title = html_escape::encode_text(&title),
        body = doc.to_html(),
    )
}

fn report(diagnostics: &Diagnostics, issues: &[LintIssue]) {
    for warning in diagnostics.warnings() {
        match &warning.hint {
            Some(hint) => eprintln!(
                "{} [{}] {} ({hint})",
                console::style("Warning").yellow(),
                warning.plugin,
                warning.message
            ),
            None => eprintln!(
                "{} [{}] {}",
                console::style("Warning").yellow(),
                warning.plugin,
                warning.message
            ),
        }
    }
    for issue in issues {
        match &issue.hint {
            Some(hint) => eprintln!(
                "{} [{}] {} ({hint})",
                console::style("Lint").magenta(),
                issue.rule,
                issue.message
            ),
            None => eprintln!(
                "{} [{}] {}",
                console::style("Lint").magenta(),
                issue.rule,
                issue.message
            ),
        }
    }
}
