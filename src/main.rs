use clap::Parser;
use journ::application::{
    init, ConfigService, DeleteAccountService, EntryService, LoginService, SignupService,
};
use journ::cli::{format_entry_list, prompt, Cli, Commands};
use journ::error::JournError;
use journ::infrastructure::{
    AccountStore, EditorSession, EntryStore, FileSystemRepository, JournalRepository, Session,
};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Username of the logged-in user, or NotLoggedIn
fn require_login(repo: &FileSystemRepository) -> Result<String, JournError> {
    Ok(Session::load(repo)?
        .ok_or(JournError::NotLoggedIn)?
        .username)
}

fn run(cli: Cli) -> Result<(), JournError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Signup { username, password } => {
            let repo = FileSystemRepository::discover()?;
            let (password, confirm) = prompt::password_or_prompt_twice(password)?;

            SignupService::new(AccountStore::new(repo)).execute(&username, &password, &confirm)?;
            println!("Account created. Log in with: journ login {}", username);
            Ok(())
        }
        Commands::Login { username, password } => {
            let repo = FileSystemRepository::discover()?;
            let password = prompt::password_or_prompt(password)?;

            LoginService::new(AccountStore::new(repo.clone())).execute(&username, &password)?;

            // Credentials check out; the session file is what keeps the
            // user logged in across invocations
            Session::start(&username).save(&repo)?;
            println!("Welcome, {}!", username);
            Ok(())
        }
        Commands::Logout => {
            let repo = FileSystemRepository::discover()?;
            Session::clear(&repo)?;
            println!("Logged out");
            Ok(())
        }
        Commands::Whoami => {
            let repo = FileSystemRepository::discover()?;
            let username = require_login(&repo)?;
            println!("{}", username);
            Ok(())
        }
        Commands::Add { title, message } => {
            let repo = FileSystemRepository::discover()?;
            let username = require_login(&repo)?;

            let content = match message {
                Some(m) => m,
                None => {
                    let config = repo.load_config()?;
                    EditorSession::new(config.get_editor()).compose()?
                }
            };

            let entry =
                EntryService::new(EntryStore::new(repo)).add(&username, &title, &content)?;
            println!("Added \"{}\" ({})", entry.title, entry.timestamp);
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let username = require_login(&repo)?;

            let entries = EntryService::new(EntryStore::new(repo)).list(&username)?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Search { keyword } => {
            let repo = FileSystemRepository::discover()?;
            let username = require_login(&repo)?;

            let entries = EntryService::new(EntryStore::new(repo)).search(&username, &keyword)?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Delete { number } => {
            let repo = FileSystemRepository::discover()?;
            let username = require_login(&repo)?;
            let service = EntryService::new(EntryStore::new(repo));

            // The list is numbered from 1 on screen; the store counts from 0
            let len = service.list(&username)?.len();
            let Some(position) = number.checked_sub(1) else {
                return Err(JournError::IndexOutOfRange {
                    position: number,
                    len,
                });
            };

            service.delete(&username, position).map_err(|e| match e {
                // Report the number as the user typed it
                JournError::IndexOutOfRange { len, .. } => JournError::IndexOutOfRange {
                    position: number,
                    len,
                },
                other => other,
            })?;

            println!("Deleted entry {}", number);
            Ok(())
        }
        Commands::DeleteAccount { yes } => {
            let repo = FileSystemRepository::discover()?;
            let username = require_login(&repo)?;

            if !yes {
                let answer = prompt::read_line(&format!(
                    "Delete account '{}' and all its entries? Type the username to confirm: ",
                    username
                ))?;
                if answer != username {
                    println!("Aborted");
                    return Ok(());
                }
            }

            DeleteAccountService::new(
                AccountStore::new(repo.clone()),
                EntryStore::new(repo.clone()),
            )
            .execute(&username)?;
            Session::clear(&repo)?;

            println!("Account '{}' deleted", username);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: journ config [--list | <key> [<value>]]");
                println!("Valid keys: editor");
                Ok(())
            }
        }
    }
}
