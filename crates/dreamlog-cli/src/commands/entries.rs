use std::io::IsTerminal;

use dialoguer::Confirm;

use dreamlog_core::{Dream, DreamError, NewDream};

use crate::app::AppContext;
use crate::cli::{AddArgs, DeleteArgs, EditArgs, ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{parse_date, read_content, require_text, today};
use crate::output::{
    dream_lines, dream_table, parse_output_format, print_dream, print_json, sort_newest_first,
    OutputFormat,
};

fn dream_not_found(id: &str) -> DreamError {
    DreamError::NotFound(format!("dream {}", id))
}

pub async fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let title = require_text("Title", &args.title)?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => today().format("%Y-%m-%d").to_string(),
    };

    let store = ctx.open_store()?;
    let editor = ctx.editor()?;
    let content = read_content(args.no_input, args.content.clone(), editor.as_deref())?;

    let dream = store
        .create(NewDream::new(date, title).with_content(content))
        .await?;

    if ctx.quiet() {
        println!("{}", dream.id);
    } else {
        println!("Added dream {}", dream.id);
    }
    Ok(())
}

pub async fn handle_list(ctx: &AppContext<'_>, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let store = ctx.open_store()?;

    let mut dreams = store.fetch_all().await?;
    sort_newest_first(&mut dreams);

    if args.json {
        return print_json(&dreams);
    }
    if dreams.is_empty() {
        if !ctx.quiet() {
            println!("No dreams recorded yet");
        }
        return Ok(());
    }
    match format {
        OutputFormat::Table => println!("{}", dream_table(&dreams)),
        OutputFormat::Plain => println!("{}", dream_lines(&dreams)),
    }
    Ok(())
}

pub async fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let dream = store
        .get(args.id.as_str())
        .await?
        .ok_or_else(|| dream_not_found(&args.id))?;

    if args.json {
        return print_json(&dream);
    }
    print_dream(&dream, ctx.quiet());
    Ok(())
}

pub async fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    if args.title.is_none() && args.date.is_none() && args.content.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to change; pass --title, --date, or --content",
        )
        .into());
    }

    let store = ctx.open_store()?;
    let existing = store
        .get(args.id.as_str())
        .await?
        .ok_or_else(|| dream_not_found(&args.id))?;

    let edited = Dream {
        title: match args.title.as_deref() {
            Some(value) => require_text("Title", value)?,
            None => existing.title.clone(),
        },
        date: match args.date.as_deref() {
            Some(value) => parse_date(value)?,
            None => existing.date.clone(),
        },
        content: match args.content.as_deref() {
            Some(value) => require_text("Content", value)?,
            None => existing.content.clone(),
        },
        ..existing
    };

    let saved = store.update(edited).await?;

    if !ctx.quiet() {
        println!("Updated dream {}", saved.id);
    }
    Ok(())
}

pub async fn handle_delete(ctx: &AppContext<'_>, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    if !args.force {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation\nHint: Pass --force when running non-interactively.",
            )
            .into());
        }

        let Some(dream) = store.get(args.id.as_str()).await? else {
            if !ctx.quiet() {
                println!("No dream {}; nothing to delete", args.id);
            }
            return Ok(());
        };

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete dream '{}'?", dream.title))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                println!("Cancelled");
            }
            return Ok(());
        }
    }

    store.delete(args.id.as_str()).await?;

    if !ctx.quiet() {
        println!("Deleted dream {}", args.id);
    }
    Ok(())
}
