use clap::CommandFactory;
use ebrick::{
    cli::{get_log_level_from_verbose, parse_cli, run, run_generated, Cli, Commands},
    constants::EBRICK_VERSION,
    error::{default_error_handler, Error},
};

fn main() {
    let cli = parse_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let result = match cli.command {
        Some(Commands::New(args)) => run(args),
        Some(Commands::Run(args)) => run_generated(args),
        Some(Commands::Version) => {
            println!("{EBRICK_VERSION}");
            Ok(())
        }
        None => Cli::command().print_help().map(|()| println!()).map_err(Error::IoError),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
