use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use emojify::prelude::*;
use emojify::AliasTable;

use super::{Arguments, Config, CONFIG_FILENAME};

/// Global program context, borrowed by every subcommand.
#[derive(Debug)]
pub struct Context {
    pub args: Arguments,
    pub config: Config,
    pub table: AliasTable,
}

impl Context {
    pub fn init() -> Result<Context> {
        let args = Arguments::parse();

        let config = match &args.config {
            Some(path) => Config::from_path(path)?,
            None => match try_locate_config(&env::current_dir()?) {
                Some(path) => {
                    debug!("Using configuration at {}.", path.display());
                    Config::from_path(&path)?
                }
                None => {
                    debug!("No {CONFIG_FILENAME} found - using defaults.");
                    Config::default()
                }
            }
        };

        let table = config.build_table();

        Ok(Context { args, config, table })
    }
}

/// Walks from `start` up to the filesystem root looking for [`CONFIG_FILENAME`].
fn try_locate_config(start: &Path) -> Option<PathBuf> {
    let mut path: PathBuf = start.into();
    let target = Path::new(CONFIG_FILENAME);

    loop {
        path.push(target);

        if path.is_file() {
            break Some(path);
        }

        if !(path.pop() && path.pop()) {
            break None;
        }
    }
}
