//!
//! The benchmark reporter binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    let exit_code = match main_inner(arguments) {
        Ok(()) => benchmark_reporter::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_reporter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let config = benchmark_reporter::Config::from_env()?;

    let records = benchmark_reporter::Collector::new(arguments.is_quiet())
        .collect(arguments.base_path.as_path(), arguments.pr_path.as_path())?;
    let table = benchmark_reporter::Table::from(records.as_slice());
    let section = benchmark_reporter::Section::new(&table);

    let client = benchmark_reporter::GitHubClient::new(&config)?;
    let mut sink = arguments.target.sink(&client);

    if arguments.dry_run {
        let preview = benchmark_reporter::sink::preview(sink.as_mut(), &section)?;
        println!("{preview}");
        return Ok(());
    }

    if !arguments.quiet {
        println!(
            "    {} pull request {}#{} {} with {} benchmarks",
            "Updating".bright_green().bold(),
            config.repository,
            config.pr_number,
            arguments.target,
            records.len(),
        );
    }
    benchmark_reporter::sink::update(sink.as_mut(), &section)?;
    if !arguments.quiet {
        println!(
            "    {} pull request {}",
            "Finished".bright_green().bold(),
            arguments.target,
        );
    }

    Ok(())
}
