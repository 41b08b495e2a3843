use std::io;

use csv_sieve::app;
use csv_sieve::console::prompt::Console;
use csv_sieve::data::classify::ClassifierConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    app::run(&mut console, &ClassifierConfig::default())
}
