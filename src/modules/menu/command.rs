/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Update,
    Delete,
    Search,
    Count,
    ChangePassword,
    ViewAll,
    Backup,
    Restore,
    Exit,
}

impl MenuCommand {
    /// Display order of the menu
    pub const ALL: [MenuCommand; 10] = [
        MenuCommand::Add,
        MenuCommand::Update,
        MenuCommand::Delete,
        MenuCommand::Search,
        MenuCommand::Count,
        MenuCommand::ChangePassword,
        MenuCommand::ViewAll,
        MenuCommand::Backup,
        MenuCommand::Restore,
        MenuCommand::Exit,
    ];

    pub fn key(&self) -> char {
        match self {
            MenuCommand::Add => '1',
            MenuCommand::Update => '2',
            MenuCommand::Delete => '3',
            MenuCommand::Search => '4',
            MenuCommand::Count => '5',
            MenuCommand::ChangePassword => '6',
            MenuCommand::ViewAll => '7',
            MenuCommand::Backup => '8',
            MenuCommand::Restore => '9',
            MenuCommand::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::Add => "Add Contact",
            MenuCommand::Update => "Update Contact",
            MenuCommand::Delete => "Delete Contact",
            MenuCommand::Search => "Search Contacts",
            MenuCommand::Count => "Count Contacts",
            MenuCommand::ChangePassword => "Change Password",
            MenuCommand::ViewAll => "View All",
            MenuCommand::Backup => "Backup Contacts",
            MenuCommand::Restore => "Restore Contacts",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Map the typed menu choice to a command
    pub fn from_choice(choice: &str) -> Option<Self> {
        let mut chars = choice.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::ALL.into_iter().find(|command| command.key() == key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_round_trips() {
        for command in MenuCommand::ALL {
            let typed = command.key().to_string();
            assert_eq!(MenuCommand::from_choice(&typed), Some(command));
        }
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(MenuCommand::from_choice(" 6 "), Some(MenuCommand::ChangePassword));
        assert_eq!(MenuCommand::from_choice("0"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_choice(""), None);
        assert_eq!(MenuCommand::from_choice("10"), None);
        assert_eq!(MenuCommand::from_choice("add"), None);
    }
}
