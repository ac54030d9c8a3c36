use std::process;

use clap::Parser;

use ranger::cli::Ranger;
use ranger::utils::logger;

#[tokio::main]
async fn main() {
    let app = Ranger::parse();
    logger::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    match app.run().await {
        Ok(output) => {
            output.print(app.format);
            process::exit(0);
        }
        Err(error) => {
            tracing::debug!(?error);
            eprintln!("{error}");
            process::exit(1);
        }
    }
}
