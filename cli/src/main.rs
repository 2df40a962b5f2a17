mod commands;
mod terminal;

use commands::{CommandLine, Commands, compare, delete, folder, import, list, report, view};
use macdiff_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);
    print::banner(commands.quiet);

    let cfg = Config {
        data_dir: commands.resolve_data_dir(),
        quiet: commands.quiet,
        no_vendors: commands.no_vendors,
    };

    match commands.command {
        Commands::Import {
            file,
            name,
            kind,
            edge_only,
        } => import::import(&cfg, &file, &name, kind, edge_only),
        Commands::List => list::list(&cfg),
        Commands::View { name } => view::view(&cfg, &name),
        Commands::Delete { names } => delete::delete(&cfg, &names),
        Commands::Compare { pre, post } => compare::compare(&cfg, &pre, &post),
        Commands::Report => report::report(&cfg),
        Commands::Folder => folder::folder(&cfg),
    }
}
