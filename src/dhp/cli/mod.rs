pub mod args;
mod menu;
mod print;

use args::Cli;
use dhp::api::DhpApi;
use dhp::config::DhpConfig;
use dhp::error::Result;
use dhp::registry::Registry;
use dhp::store::FileStore;
use menu::Session;
use std::io;
use std::path::PathBuf;

/// Resolve the storage choice, open the registry, and run the menu until exit.
pub fn run(cli: Cli) -> Result<()> {
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let config = DhpConfig::load(&data_dir)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.welcome()?;

    let encoding = match cli.storage.or(config.storage) {
        Some(encoding) => encoding,
        None => match session.choose_encoding()? {
            Some(encoding) => encoding,
            None => return session.goodbye(),
        },
    };

    let store = FileStore::open(encoding, config.data_file(&data_dir, encoding));
    log::debug!("using {} storage at {}", encoding, store.path().display());
    let registry = Registry::open(store)?;
    let mut api = DhpApi::new(registry);

    session.run(&mut api)
}
