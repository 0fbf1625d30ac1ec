use std::process::ExitCode;

use chatboteval::cli::dispatch;
use chatboteval::config::Config;
use chatboteval::logging;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env();
    logging::init(&config.log)?;

    Ok(dispatch(std::env::args_os()).emit())
}
