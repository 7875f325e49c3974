#![warn(clippy::perf, clippy::style, warnings)]

mod common;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use common::*;
use emojify::prelude::*;
use emojify::Tone;

fn main() -> Result<()> {
    install_logging();
    color_eyre::install()?;

    let ctx = Context::init()?;

    match &ctx.args.command {
        Command::Scan { files } => scan(&ctx, files),
        Command::Lookup { alias } => lookup(&ctx, alias),
        Command::List { filter } => list(&ctx, filter.as_deref()),
        Command::Flag { code } => flag(code),
        Command::Tone { alias, tones } => tone(alias, tones),
    }
}

fn install_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(ErrorLayer::default())
        .init();
}

fn scan(ctx: &Context, files: &[PathBuf]) -> Result<()> {
    if files.is_empty() || files.iter().all(|file| file == Path::new("-")) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .wrap_err("Could not read standard input.")?;

        let mut scanner = ctx.table.scanner();
        return write_out(&scanner.scan(&text));
    }

    info!("Scanning {} file(s).", files.len());

    let outputs: Vec<String> = files
        .par_iter()
        .map(|file| -> Result<String> {
            let text = match file == Path::new("-") {
                true => bail!("Standard input (`-`) can't be mixed with file arguments."),
                false => std::fs::read_to_string(file)
                    .wrap_err_with(|| format!("Could not read {}.", file.display()))
                    .suggestion("Make sure the file exists and is valid UTF-8.")?,
            };

            Ok(ctx.table.scan(&text))
        })
        .collect::<Result<_>>()?;

    for output in outputs {
        write_out(&output)?;
    }

    Ok(())
}

fn write_out(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn lookup(ctx: &Context, alias: &str) -> Result<()> {
    let Some(code) = ctx.table.lookup(alias) else {
        let err = eyre!("No emoji is registered for {alias:?}.")
            .note("Aliases are matched exactly, colons and case included.")
            .suggestion("Run `emojify list --filter <name>` to search the known aliases.");
        bail!(err)
    };

    println!("{code}");
    Ok(())
}

fn list(ctx: &Context, filter: Option<&str>) -> Result<()> {
    let aliases = ctx.table.list();
    let entries: Vec<_> = aliases
        .sorted()
        .into_iter()
        .filter(|(alias, _)| filter.map_or(true, |filter| alias.contains(filter)))
        .collect();

    let count = entries.len();
    println!("{}", output::alias_table(entries));
    output::summary(format!(
        "{count} of {} aliases ({} configured).",
        aliases.len(),
        ctx.config.aliases.len()
    ));

    Ok(())
}

fn flag(code: &str) -> Result<()> {
    let flag = emojify::encode_country_flag(code)
        .suggestion("Country codes are two letters, such as `tr` or `GB`.")?;

    println!("{flag}");
    Ok(())
}

fn tone(alias: &str, tones: &[Tone]) -> Result<()> {
    let Some(template) = emojify::toned(alias) else {
        let err = eyre!("{alias:?} is not a tone-parameterized alias.")
            .suggestion("Tones can be applied to the built-in catalog, such as `:thumbs_up:` or `:people_holding_hands:`.");
        bail!(err)
    };

    let composed = emojify::compose_tone(template, tones);
    output::labelled(alias, composed);

    Ok(())
}
