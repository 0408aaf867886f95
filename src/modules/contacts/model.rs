use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tabled::Tabled;

/// Fixed set of groups a contact can belong to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Family,
    Friend,
    Work,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Family, Category::Friend, Category::Work];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Family => "family",
            Category::Friend => "friend",
            Category::Work => "work",
        }
    }

    /// The accepted values joined for a prompt, e.g. `family/friend/work`
    pub fn choices() -> String {
        Category::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "family" => Ok(Category::Family),
            "friend" => Ok(Category::Friend),
            "work" => Ok(Category::Work),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// One persisted contact; `name` is the normalized primary key
///
/// Field order here is the field order in the contacts file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Tabled)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub age: i64,
    pub category: Category,
}

impl Contact {
    /// Substring match on name, phone or email; `query` must already be lower-case
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
            || self.phone_number.contains(query)
            || self.email.contains(query)
    }
}
