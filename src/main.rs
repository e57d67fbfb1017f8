//! docfuse binary entry point.

use clap::Parser;
use docfuse::cli::{self, Cli};
use docfuse::error::Result;
use docfuse::output::OutputFormatter;
use docfuse::{merge, utils};
use std::process;

#[tokio::main]
async fn main() {
    // Map argument errors to exit code 1; help and version stay 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = cli::parse_error_exit_code(&err);
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = cli.to_config()?;

    let formatter = OutputFormatter::from_config(&config);
    for warning in &warnings {
        formatter.warning(warning);
    }

    let stats = merge::merge_documents(&config, |done, total, name| {
        formatter.progress(done, total, name);
    })
    .await?;

    formatter.success(&format!(
        "Merged {} file(s) into {}",
        stats.files_merged,
        config.output.display()
    ));
    formatter.detail(&format!(
        "{} pages, {} read in {:.2}s",
        stats.total_pages,
        utils::format_file_size(stats.input_size),
        stats.merge_time.as_secs_f64()
    ));

    Ok(())
}
