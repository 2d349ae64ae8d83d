use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use docvars::cli::{CliArgs, CliCommand};
use docvars::config::EditorConfig;
use docvars::context::PositionContext;
use docvars::expand::expand;
use docvars::messages::Msg;
use docvars::model::AppModel;
use docvars::search_results::SearchResultsState;
use docvars::theme::load_theme;
use docvars::update::update;
use docvars::variables::{Value, VariableKind, VariableRegistry};

#[derive(Serialize)]
struct VariableRow<'a> {
    name: &'a str,
    description: &'a str,
    kind: VariableKind,
    value: Value,
}

fn main() -> Result<()> {
    docvars::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();
    let registry = VariableRegistry::global();

    match args.command {
        CliCommand::Vars { document, json } => {
            let doc = document
                .load(&config)
                .with_context(|| format!("Failed to read {}", document.file.display()))?;
            let rows: Vec<VariableRow> = registry
                .variables()
                .map(|var| VariableRow {
                    name: var.name(),
                    description: var.description(),
                    kind: var.kind(),
                    value: var.resolve(&doc),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{}\t{}", row.name, row.value);
                }
            }
        }

        CliCommand::Expand {
            document,
            templates,
        } => {
            let doc = document
                .load(&config)
                .with_context(|| format!("Failed to read {}", document.file.display()))?;
            for template in &templates {
                let expanded = expand(registry, &doc, template)
                    .with_context(|| format!("Failed to expand {:?}", template))?;
                println!("{}", expanded);
            }
        }

        CliCommand::Replace {
            document,
            text,
            in_place,
        } => {
            let doc = document
                .load(&config)
                .with_context(|| format!("Failed to read {}", document.file.display()))?;
            let mut model = AppModel::new(config).with_focused(doc);
            update(&mut model, Msg::ReplaceSelectionRequested(text));

            let Some(doc) = model.focused else {
                anyhow::bail!("No focused document after replace");
            };
            let snapshot = doc.snapshot();
            if in_place {
                std::fs::write(&document.file, doc.text())
                    .with_context(|| format!("Failed to write {}", document.file.display()))?;
            } else {
                print!("{}", doc.text());
                if !doc.text().ends_with('\n') {
                    println!();
                }
            }
            eprintln!(
                "selection: anchor={} cursor={}",
                snapshot.anchor_offset.unwrap_or(snapshot.cursor_offset),
                snapshot.cursor_offset
            );
        }

        CliCommand::Palette { theme } => {
            let mut model = AppModel::new(config);
            if let Some(id) = theme {
                let theme =
                    load_theme(&id).with_context(|| format!("Failed to load theme {}", id))?;
                update(&mut model, Msg::ThemeChanged(theme));
            }

            let mut state = SearchResultsState::default();
            if let Some(cmd) = update(&mut model, Msg::Startup) {
                cmd.run(&mut state);
            }

            if let Some(font) = &state.font {
                println!("font\t{} {}pt", font.family, font.point_size);
            }
            if let Some(width) = state.tab_width {
                println!("tab_width\t{}", width);
            }
            for entry in state.palette.iter().flat_map(|p| p.iter()) {
                println!(
                    "{:?}\ttext={}/{} match={}/{} scope={}/{}",
                    entry.style,
                    entry.text_foreground.to_hex(),
                    entry.text_background.to_hex(),
                    entry.match_foreground.to_hex(),
                    entry.match_background.to_hex(),
                    entry.containing_scope_foreground.to_hex(),
                    entry.containing_scope_background.to_hex(),
                );
            }
        }
    }

    Ok(())
}
