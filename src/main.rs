use jiratt::commands::Cli;
use jiratt::libs::logging;
use jiratt::msg_error;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(err) = Cli::menu().await {
        msg_error!(err);
        std::process::exit(1);
    }
}
