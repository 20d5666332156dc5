use module_detect::utils::logger;
use module_detect::{dispatch, DispatchArgs};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 初始化日誌 (只寫到 stderr)
    logger::init_cli_logger(false);

    let config = DispatchArgs::from_env();
    tracing::debug!("CLI args: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dispatch(config.args.as_slice(), &mut out) {
        Ok(classification) => {
            tracing::info!(?classification, "dispatch finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Could not write to stdout: {}", e);
            ExitCode::FAILURE
        }
    }
}
