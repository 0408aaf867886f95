use std::collections::BTreeMap;

use super::model::Contact;
use super::validation::normalize_name;

/// The full contact collection for the duration of one operation
///
/// Keyed by normalized name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from loaded records, normalizing every name
    ///
    /// Two records that normalize to the same name are an error; neither is dropped.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Result<Self, String> {
        let mut book = Self::new();
        for mut contact in contacts {
            contact.name = normalize_name(&contact.name);
            if book.contains(&contact.name) {
                return Err(format!("duplicate name {:?}", contact.name));
            }
            book.put(contact);
        }
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Insert or replace under the contact's own name
    pub fn put(&mut self, contact: Contact) {
        self.contacts.insert(contact.name.clone(), contact);
    }

    /// Remove and hand back a contact
    pub fn take(&mut self, name: &str) -> Option<Contact> {
        self.contacts.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Contacts whose name, phone or email contains `query` (case-insensitive)
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim().to_lowercase();
        self.iter().filter(|contact| contact.matches(&query)).collect()
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contacts::model::Category;

    fn contact(name: &str, phone: &str, email: &str) -> Contact {
        Contact {
            name: name.to_string(),
            phone_number: phone.to_string(),
            email: email.to_string(),
            age: 30,
            category: Category::Work,
        }
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let book = ContactBook::from_contacts(vec![
            contact("alice smith", "123", "a@x.com"),
            contact("bob", "555", "alice@y.com"),
            contact("carol", "777", "c@z.com"),
        ])
        .unwrap();

        let names: Vec<&str> = book
            .search("ALICE")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["alice smith", "bob"]);

        assert_eq!(book.search("77").len(), 1);
        assert!(book.search("dave").is_empty());
    }

    #[test]
    fn test_names_are_normalized_on_build() {
        let book = ContactBook::from_contacts(vec![contact("  Dave ", "5550100", "dave@x.com")])
            .unwrap();

        let dave = book.get("dave").unwrap();
        assert_eq!(dave.name, "dave");
    }

    #[test]
    fn test_names_colliding_after_normalization_are_refused() {
        let result = ContactBook::from_contacts(vec![
            contact("  Dave ", "5550100", "dave@old.com"),
            contact("DAVE", "5550199", "dave@new.com"),
        ]);

        assert!(result.unwrap_err().contains("dave"));
    }

    #[test]
    fn test_take_and_put() {
        let mut book =
            ContactBook::from_contacts(vec![contact("erin", "5550100", "e@x.io")]).unwrap();

        let mut erin = book.take("erin").unwrap();
        assert!(book.is_empty());
        assert!(book.take("erin").is_none());

        erin.name = "erin b".to_string();
        book.put(erin);
        assert!(book.contains("erin b"));
        assert!(!book.contains("erin"));
        assert_eq!(book.into_contacts().len(), 1);
    }
}
