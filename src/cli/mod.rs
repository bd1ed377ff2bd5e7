//! CLI module for Gazetteer

mod args;

pub use args::{Args, Command};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::generator::Generator;
use crate::model::Manifest;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Generate {
            manifest,
            output,
            config,
            show_private,
            show_inherited,
            index_base,
            no_notice,
            verbose,
        } => {
            // Load config file if it exists
            let mut cfg = if let Some(config_path) = &config {
                Config::load_or_default(config_path)
            } else {
                Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            };

            // Merge CLI arguments (CLI takes precedence)
            cfg.merge_cli(output, show_private, show_inherited, index_base, no_notice);

            if verbose {
                println!("Manifest: {}", manifest.display());
                println!("Output: {}", cfg.output.directory.display());
                println!("Content dir: {}", cfg.output.content_dir);
                println!("Show private: {}", cfg.generator.show_private);
                println!("Show inherited: {}", cfg.generator.show_inherited);
                println!("Notice: {}", cfg.generator.notice);
                if let Some(base) = &cfg.index.base {
                    println!("Index base: {}", base.display());
                }
            }

            if !manifest.exists() {
                return Err(crate::error::Error::PathNotFound(manifest));
            }

            println!("Loading manifest...");
            let loaded = Manifest::load(&manifest)?;
            println!("Documenting {} packages...", loaded.packages.len());

            let generator = Generator::new(cfg.clone())?;
            let report = generator.document_packages(&loaded.packages)?;

            for path in &report.collisions {
                eprintln!("Warning: duplicate output path: {}", path.display());
            }

            println!("{}", report.summary());
            println!(
                "Index written to: {}",
                cfg.output.directory.join("index.rst").display()
            );

            Ok(())
        }

        Command::Version => {
            println!("gazetteer {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
