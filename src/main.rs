use chrono::Local;
use clap::Parser;
use devj::application::{
    export_journal, init::init, unpack, ConfigService, EditEntryService, NewEntryService,
    SyncService,
};
use devj::cli::{format_config, format_journal_summary, Cli, Commands};
use devj::domain::{wire, Style};
use devj::error::{DevjError, Result};
use devj::infrastructure::{FileSystemRepository, JournalRepository, SyncTarget};
use devj::logging;
use std::fs;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    debug!(command = ?cli.command, "starting devj");

    match cli.command {
        Some(Commands::Init { path, style }) => {
            let style = Style::from_name(&style)
                .ok_or_else(|| DevjError::Config(format!("Invalid style: '{}'", style)))?;
            init(&path, style)
        }
        Some(Commands::New) => {
            let repo = FileSystemRepository::discover()?;
            let path = NewEntryService::new(repo).execute(Local::now().date_naive())?;
            println!("new entry created: {}", path.display());
            Ok(())
        }
        Some(Commands::Edit) => {
            let repo = FileSystemRepository::discover()?;
            EditEntryService::new(repo).execute()?;
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let repo = FileSystemRepository::discover()?;
            let json = export_journal(&repo)?;
            match output {
                Some(path) => {
                    fs::write(&path, json).map_err(|e| DevjError::io(&path, e))?;
                    println!("journal export written to {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Some(Commands::Sync {
            url,
            user,
            password,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let target = SyncTarget {
                url: url.or(config.url).unwrap_or_default(),
                user: user.or(config.user).unwrap_or_default(),
                password: password.unwrap_or_default(),
            };

            let report = SyncService::new(repo).execute(&target)?;
            println!(
                "sent {} entries, server answered with status {}",
                report.entries, report.status
            );
            Ok(())
        }
        Some(Commands::Unpack { file, into }) => {
            let text = fs::read_to_string(&file).map_err(|e| DevjError::io(&file, e))?;
            let journal = wire::from_json(&text)?;
            let report = unpack(&journal, &into)?;
            print!("{}", format_journal_summary(&journal));
            println!(
                "unpacked {} entries and {} files into {}",
                report.entries,
                report.files,
                into.display()
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: devj config [--list | <key> [<value>]]");
                println!("Valid keys: editor, style, public_sections, url, user");
            }
            Ok(())
        }
        None => {
            println!("devj - developer journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
