use clap::Parser;

use pipeline_audit::cli::{Cli, Commands};
use pipeline_audit::commands::{run_check, run_init, run_list};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::List(args) => run_list(args, &cli),
    };

    std::process::exit(exit_code);
}
