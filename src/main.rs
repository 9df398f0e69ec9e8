use clap::Parser;
use totpvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::CreateDb => totpvault::cli::commands::create_db::execute(&cli),
        Commands::AddUrl { ref url, clipboard } => {
            totpvault::cli::commands::add_url::execute(&cli, url.as_deref(), clipboard)
        }
        Commands::AddQrc { ref image } => {
            totpvault::cli::commands::add_qrc::execute(&cli, image)
        }
        Commands::List => totpvault::cli::commands::list::execute(&cli),
        Commands::Generate {
            ref account,
            ref issuer,
            clipboard,
        } => totpvault::cli::commands::generate::execute(&cli, account, issuer, clipboard),
        Commands::Remove {
            ref account,
            ref issuer,
        } => totpvault::cli::commands::remove::execute(&cli, account, issuer),
    };

    if let Err(e) = result {
        totpvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
