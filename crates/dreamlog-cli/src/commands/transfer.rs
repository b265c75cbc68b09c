use std::path::PathBuf;

use dreamlog_core::transfer::{export_json, merge_imported, write_export};

use crate::app::AppContext;
use crate::cli::{ExportArgs, ImportArgs};
use crate::errors::CliError;
use crate::helpers::today;

pub async fn handle_export(ctx: &AppContext<'_>, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let dreams = store.fetch_all().await?;

    if args.stdout {
        let bytes = export_json(&dreams)?;
        println!("{}", String::from_utf8(bytes)?);
        return Ok(());
    }

    let dir = match args.dir.as_deref() {
        Some(dir) => PathBuf::from(dir),
        None => match ctx.export_dir()? {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        },
    };
    if !dir.is_dir() {
        return Err(CliError::not_found(
            format!("Export directory {} does not exist", dir.display()),
            "Hint: Create it first or pass --dir.",
        )
        .into());
    }

    let day = today();
    let path = tokio::task::spawn_blocking(move || write_export(&dir, &dreams, day)).await??;

    if ctx.quiet() {
        println!("{}", path.display());
    } else {
        println!("Exported dreams to {}", path.display());
    }
    Ok(())
}

pub async fn handle_import(ctx: &AppContext<'_>, args: &ImportArgs) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .map_err(|e| CliError::not_found(
            format!("Cannot read import file {}: {}", args.file, e),
            "Hint: Pass the path of a file written by `dreamlog export`.",
        ))?;

    let store = ctx.open_store()?;
    let loaded = store.fetch_all().await?;
    let imported = store.import(bytes).await?;
    let merged = merge_imported(loaded, &imported);
    tracing::debug!(imported = imported.len(), total = merged.len(), "merged import");

    if ctx.quiet() {
        println!("{}", imported.len());
    } else {
        println!(
            "Successfully imported {} dreams ({} in journal).",
            imported.len(),
            merged.len()
        );
    }
    Ok(())
}
