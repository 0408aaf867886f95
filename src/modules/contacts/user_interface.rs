// Field prompts shared by add and update; each loops until the input is valid
use std::io;

use super::model::Category;
use super::validation::{validate_email, validate_phone};
use crate::modules::utils::io::Console;

fn field_label(label: &str, current: Option<&str>) -> String {
    match current {
        Some(value) => format!("{} ({}): ", label, value),
        None => format!("{}: ", label),
    }
}

/// Phone prompt; with `current`, a blank answer keeps it
pub fn prompt_phone(console: &mut dyn Console, current: Option<&str>) -> io::Result<String> {
    let label = field_label("Phone", current);
    loop {
        let phone = console.prompt(&label)?;
        match current {
            Some(value) if phone.is_empty() => return Ok(value.to_string()),
            _ if validate_phone(&phone) => return Ok(phone),
            _ => console.show("Invalid phone format!"),
        }
    }
}

/// Email prompt, lower-cased; with `current`, a blank answer keeps it
pub fn prompt_email(console: &mut dyn Console, current: Option<&str>) -> io::Result<String> {
    let label = field_label("Email", current);
    loop {
        let email = console.prompt(&label)?.to_lowercase();
        match current {
            Some(value) if email.is_empty() => return Ok(value.to_string()),
            _ if validate_email(&email) => return Ok(email),
            _ => console.show("Invalid email!"),
        }
    }
}

pub fn prompt_age(console: &mut dyn Console) -> io::Result<i64> {
    loop {
        match console.prompt("Age: ")?.parse::<i64>() {
            Ok(age) => return Ok(age),
            Err(_) => console.show("Invalid age!"),
        }
    }
}

pub fn prompt_category(console: &mut dyn Console) -> io::Result<Category> {
    let label = format!("Category ({}): ", Category::choices());
    loop {
        match console.prompt(&label)?.parse::<Category>() {
            Ok(category) => return Ok(category),
            Err(_) => console.show("Invalid category!"),
        }
    }
}
