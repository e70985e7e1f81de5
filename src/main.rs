use anyhow::Result;
use clap::Parser;

use xml_translator::cli::commands::translate;
use xml_translator::cli::{Args, Command};
use xml_translator::output::{self, OutputConfig};
use xml_translator::translation::print_languages;

fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var_os("NO_COLOR").is_some(),
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                to: args.to,
                interval: args.interval,
                env_file: args.env_file,
                output_dir: args.output_dir,
            };
            translate::run_translate(options)?;
        }
    }

    Ok(())
}
