use log::{error, info};
use tabled::settings::Style;
use tabled::Table;

use super::command::MenuCommand;
use crate::modules::auth::{CredentialGate, PasswordChange};
use crate::modules::contacts::{
    BackupOutcome, Contact, ContactStore, DeleteOutcome, RestoreOutcome, SearchOutcome,
    UpdateOutcome,
};
use crate::modules::error::AppError;
use crate::modules::storage::StorageBackend;
use crate::modules::utils::io::{wait_for_enter, Console};

/// Function to show the main menu
pub fn show_menu(console: &mut dyn Console) {
    console.show("\nMenu:");
    for command in MenuCommand::ALL {
        console.show(&format!("{}. {}", command.key(), command.label()));
    }
}

/// Grid table of contacts with the field names as headers
pub fn render_contacts(contacts: Vec<Contact>) -> String {
    let mut table = Table::new(contacts);
    table.with(Style::ascii());
    table.to_string()
}

/// Main menu loop; returns `Ok` on Exit
///
/// Recoverable failures are reported and the menu comes back. Fatal
/// conditions and a closed input end the loop with the error.
pub fn run_menu<B: StorageBackend>(
    store: &ContactStore<B>,
    gate: &CredentialGate<B>,
    console: &mut dyn Console,
) -> Result<(), AppError> {
    loop {
        show_menu(console);

        let choice = console.prompt("\nYour choice: ")?;
        let Some(command) = MenuCommand::from_choice(&choice) else {
            console.show("Invalid choice!");
            continue;
        };

        if command == MenuCommand::Exit {
            info!("Session ended by user");
            console.show("Goodbye!");
            return Ok(());
        }

        if let Err(e) = execute(command, store, gate, console) {
            if e.ends_session() {
                return Err(e);
            }
            error!("{} failed: {}", command.label(), e);
            console.show(&format!("Operation failed: {}", e));
        }

        wait_for_enter(console)?;
    }
}

fn execute<B: StorageBackend>(
    command: MenuCommand,
    store: &ContactStore<B>,
    gate: &CredentialGate<B>,
    console: &mut dyn Console,
) -> Result<(), AppError> {
    match command {
        MenuCommand::Add => {
            store.add(console)?;
            console.show("Contact saved!");
        }
        MenuCommand::Update => match store.update(console)? {
            UpdateOutcome::Updated(_) => console.show("Contact updated!"),
            UpdateOutcome::NotFound(_) => console.show("Contact not found!"),
            UpdateOutcome::NameTaken(_) => {
                console.show("A contact with this name already exists!")
            }
        },
        MenuCommand::Delete => match store.delete(console)? {
            DeleteOutcome::Deleted(_) => console.show("Contact deleted!"),
            DeleteOutcome::NotFound(_) => console.show("Contact not found!"),
        },
        MenuCommand::Search => match store.search(console)? {
            SearchOutcome::Matches(found) => console.show(&render_contacts(found)),
            SearchOutcome::NoMatches => console.show("No matches found!"),
            SearchOutcome::EmptyStore => console.show("No contacts stored yet!"),
        },
        MenuCommand::Count => {
            let total = store.count(console)?;
            console.show(&format!("\nTotal contacts: {}", total));
        }
        MenuCommand::ChangePassword => match gate.change_password(console)? {
            PasswordChange::Changed => console.show("Password changed!"),
            PasswordChange::WrongCurrentPassword => console.show("Incorrect password!"),
            PasswordChange::Mismatch => console.show("Passwords don't match!"),
            PasswordChange::EmptyPassword => console.show("Password cannot be empty!"),
        },
        MenuCommand::ViewAll => {
            let contacts = store.list_all(console)?;
            if contacts.is_empty() {
                console.show("No contacts found!");
            } else {
                console.show(&render_contacts(contacts));
            }
        }
        MenuCommand::Backup => match store.backup()? {
            BackupOutcome::Created => console.show("Backup created!"),
            BackupOutcome::NothingToBackUp => console.show("No contacts to back up!"),
        },
        MenuCommand::Restore => match store.restore()? {
            RestoreOutcome::Restored => console.show("Contacts restored from backup!"),
            RestoreOutcome::NoBackupFound => console.show("No backup found!"),
        },
        // Handled by the loop before dispatch
        MenuCommand::Exit => {}
    }
    Ok(())
}
