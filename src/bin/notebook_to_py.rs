use clap::Parser;
use module_detect::utils::logger;
use module_detect::{convert_notebook, LocalStorage};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notebook-to-py")]
#[command(about = "Convert a Jupyter notebook into a plain Python script")]
struct Args {
    /// Notebook to convert; the script is written next to it
    notebook: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    if !args.notebook.exists() {
        eprintln!("Error: The file \"{}\" does not exist.", args.notebook.display());
        return ExitCode::FAILURE;
    }

    let storage = LocalStorage::default();
    match convert_notebook(&storage, &args.notebook) {
        Ok(script_path) => {
            println!("Notebook converted to Python script: {}", script_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("Error during conversion: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::FAILURE
        }
    }
}
