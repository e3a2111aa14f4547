mod app;
mod events;
mod host;
mod terminal;
mod view;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::Options;

#[tokio::main]
async fn main() {
    match File::create("picklist-tui.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file: {}", e),
    }

    let options = Options::from_args(std::env::args().skip(1));
    if let Err(e) = app::run(options).await {
        eprintln!("Error: {}", e);
    }
}
