use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tabulon::{RecordingSurface, Sample, TabulonError};

/// Draws the bundled sample tables to PDF or dumps their drawing primitives.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Log layout and drawing details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a sample table into a one-page PDF
    Render {
        sample: Sample,

        /// Where to write the PDF
        #[arg(short, long)]
        output: PathBuf,

        /// Leave content streams uncompressed
        #[arg(long)]
        no_compress: bool,
    },
    /// Print the primitives a sample draws, as JSON
    Ops {
        sample: Sample,

        #[arg(long)]
        pretty: bool,
    },
    /// List the available samples
    List,
}

fn main() -> Result<(), TabulonError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Render {
            sample,
            output,
            no_compress,
        } => {
            let document = sample.render()?.with_compression(!no_compress);
            document.save(&output)?;
            println!("Wrote {sample} to {}", output.display());
        }
        Command::Ops { sample, pretty } => {
            let table = sample.table()?;
            let mut surface = RecordingSurface::new();
            sample.draw(&table, &mut surface)?;

            let json = if pretty {
                serde_json::to_string_pretty(surface.ops())?
            } else {
                serde_json::to_string(surface.ops())?
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
        Command::List => {
            for sample in Sample::ALL {
                println!("{sample}");
            }
        }
    }
    Ok(())
}
