mod commands;
mod terminal;

use commands::{CommandLine, parse};
use pathfinder_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        debug: commands.debug,
        filename: commands.filename,
        output: commands.output,
    };

    logging::init_logging(cfg.debug);
    print::header("nmap xml report parser");
    parse::parse(&cfg)
}
