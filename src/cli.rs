//! Command-line front end for the `i18n-page` binary.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use clap::{
    Parser,
    Subcommand,
};

use crate::config::{
    self,
    ConfigError,
    LookupSettings,
};
use crate::{
    TranslationValue,
    build_translations,
    get_base_name,
    get_translation_value_with,
    read_translation_file,
    read_zip_file,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Lookup settings file (default: `.i18n-page.json` in the working directory)
    #[arg(long, global = true, env = "I18N_PAGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge page translations over base translations and print the result
    Merge {
        #[arg(long)]
        base: Option<PathBuf>,
        #[arg(long)]
        page: Option<PathBuf>,
    },
    /// Print the value stored under a key path
    Get {
        /// Translation file (base translations when `--page` is given)
        file: PathBuf,
        key: String,
        #[arg(long)]
        page: Option<PathBuf>,
    },
    /// List the entries of a ZIP archive, or print one JSON entry
    Zip {
        archive: PathBuf,
        #[arg(long)]
        entry: Option<String>,
    },
    /// Print a file name without directories and its last extension
    Basename { path: String },
}

/// Runs the parsed command, writing results to stdout.
pub async fn run(args: Arguments) -> anyhow::Result<()> {
    match args.command {
        Command::Merge { base, page } => {
            let translations = load_translations(base.as_deref(), page.as_deref()).await?;
            print_json(translations.as_ref())?;
        }
        Command::Get { file, key, page } => {
            let settings = load_settings(args.config.as_deref())?;
            let translations = load_translations(Some(file.as_path()), page.as_deref()).await?;
            print_json(get_translation_value_with(translations.as_ref(), &key, &settings))?;
        }
        Command::Zip { archive, entry } => {
            let bundle = read_zip_file(&archive)
                .await
                .with_context(|| format!("Failed to open {}", archive.display()))?;
            match entry {
                Some(name) => {
                    let value = TranslationValue::from(bundle.read_json_entry(&name)?);
                    print_json(Some(&value))?;
                }
                None => {
                    for entry in bundle.entries() {
                        let kind = if entry.is_dir { "dir" } else { "file" };
                        println!("{kind}\t{}\t{}", entry.uncompressed_size, entry.name);
                    }
                }
            }
        }
        Command::Basename { path } => println!("{}", get_base_name(&path)),
    }

    Ok(())
}

/// Resolves lookup settings from an explicit file or the working directory.
pub fn load_settings(config_path: Option<&Path>) -> Result<LookupSettings, ConfigError> {
    if let Some(path) = config_path {
        return config::load_from_file(path);
    }

    let cwd = std::env::current_dir()?;
    Ok(config::load_from_dir(&cwd)?.unwrap_or_default())
}

/// Reads both sides and assembles them.
async fn load_translations(
    base: Option<&Path>,
    page: Option<&Path>,
) -> anyhow::Result<Option<TranslationValue>> {
    let base = read_optional(base).await?;
    let page = read_optional(page).await?;
    Ok(build_translations(base, page))
}

/// Reads a translation file when a path is given.
async fn read_optional(path: Option<&Path>) -> anyhow::Result<Option<TranslationValue>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let value = read_translation_file(path)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(Some(value))
}

/// Prints `value` as pretty JSON, `null` when absent.
fn print_json(value: Option<&TranslationValue>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
