use log::{error, info};
use std::process;

use contact_book::auth::{setup_initial_password, CredentialGate};
use contact_book::config::{AppConfig, RunMode};
use contact_book::contacts::{ContactRepository, ContactStore};
use contact_book::error::AppError;
use contact_book::menu::run_menu;
use contact_book::storage::FileBackend;
use contact_book::utils::io::Terminal;
use contact_book::utils::logging::initialize_logging;

fn run(config: &AppConfig) -> Result<(), AppError> {
    let mut console = Terminal;
    let gate = CredentialGate::new(FileBackend, &config.password_file);

    match config.mode {
        RunMode::InitPassword => {
            setup_initial_password(&gate, &mut console)?;
            Ok(())
        }
        RunMode::Interactive => {
            println!("\n----------- Contact Book Manager -----------");
            gate.authenticate(&mut console)?;

            let store = ContactStore::new(ContactRepository::new(
                FileBackend,
                &config.contacts_file,
            ));
            run_menu(&store, &gate, &mut console)
        }
    }
}

fn main() {
    let config = match AppConfig::from_args().map_err(AppError::Config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    // The book still works without a log file
    if let Err(e) = initialize_logging(&config.log_file, config.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!(
        "Starting with contacts file {} and password file {}",
        config.contacts_file.display(),
        config.password_file.display()
    );

    match run(&config) {
        Ok(()) => {}
        Err(AppError::Fatal(fatal)) => {
            error!("Fatal: {}", fatal);
            eprintln!("{}", fatal);
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
