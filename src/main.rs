use checked_path::{sanitize_filename, validate_path, EntityKind};
use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::FmtSubscriber;

#[derive(clap::Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// tracing filter directives
    #[clap(
        long,
        default_value = "pathcheck=info,checked_path=info",
        env = "PATHCHECK_LOG"
    )]
    log_filter: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Confirm that a path exists and print it with `~` expanded
    Check {
        path: String,

        /// file, dir, or any
        #[clap(long, default_value = "any", env = "PATHCHECK_KIND")]
        kind: EntityKind,
    },
    /// Print a filesystem-safe filename for each input
    Sanitize {
        #[clap(required = true)]
        text: Vec<String>,
    },
}

fn main() -> Result<(), eyre::Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(args.log_filter.as_str())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Check { path, kind } => {
            let checked = validate_path(&path, kind)
                .wrap_err_with(|| format!("'{}' is not a valid {} path", path, kind))?;
            println!("{}", checked.display());
        }
        Command::Sanitize { text } => {
            for value in text {
                println!("{}", sanitize_filename(value));
            }
        }
    }

    Ok(())
}
