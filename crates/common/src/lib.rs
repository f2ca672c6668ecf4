use clap::Parser;
use ledger::LedgerStore;

#[derive(Clone)]
pub struct AppState {
    pub store: LedgerStore,
    pub config: Config,
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,
}
