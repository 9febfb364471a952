use clap::{Parser, Subcommand};

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "ckptlog-summary")]
#[command(about = "Checkpoint log timing summary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize per-tag timings from a checkpoint log.
    Summarize {
        /// Path to the checkpoint log file.
        #[arg(long, default_value = "log_ckpt2.txt")]
        log: String,

        /// Also print residual tags outside the fixed watch-list.
        #[arg(long)]
        all_residual: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Summarize { log, all_residual } => {
            // 1) Parse log (all-or-nothing: any malformed line aborts the run).
            let records = log::parse_log_file(&log)?;

            // 2) Aggregate per tag.
            let data = model::build_summary(&records);

            // 3) Warn (stderr) about residual tags outside the watch-list.
            for warning in render::warning_lines(&data) {
                eprintln!("{}", warning);
            }

            // 4) Render summary text.
            print!("{}", render::render_summary(&data, all_residual));
        }
    }

    Ok(())
}
