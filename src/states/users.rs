//! Users State
//!
//! In-memory roster behind the demo page, plus the draft being typed into the
//! form. The roster is never written anywhere.

use gpui::SharedString;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::notice::Notice;
use crate::components::composite::data_table::TableRow;

/// A roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Displayable fields of a [`User`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Age,
}

impl TableRow for User {
    type Field = UserField;

    fn field(&self, field: UserField) -> SharedString {
        match field {
            UserField::Name => self.name.clone().into(),
            UserField::Email => self.email.clone().into(),
            UserField::Age => self.age.to_string().into(),
        }
    }
}

/// User entry as written in the settings file (no id; one is assigned on load)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl SeedUser {
    fn new(name: &str, email: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    /// Alice, Bob and Charlie
    pub fn defaults() -> Vec<SeedUser> {
        vec![
            SeedUser::new("Alice", "alice@example.com", 25),
            SeedUser::new("Bob", "bob@example.com", 30),
            SeedUser::new("Charlie", "charlie@example.com", 28),
        ]
    }
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl UserDraft {
    /// Check the draft and turn it into (name, email, age).
    ///
    /// Name and email must be non-blank and age must be a positive whole number.
    pub fn validate(&self) -> Result<(String, String, u32), Notice> {
        if !self.invalid_fields().is_empty() {
            return Err(Notice::invalid_user());
        }
        let age = self.parsed_age().ok_or_else(Notice::invalid_user)?;
        Ok((self.name.clone(), self.email.clone(), age))
    }

    /// Fields whose current text would be rejected, in form order
    pub fn invalid_fields(&self) -> Vec<UserField> {
        let mut fields = Vec::new();
        if self.name.trim().is_empty() {
            fields.push(UserField::Name);
        }
        if self.email.trim().is_empty() {
            fields.push(UserField::Email);
        }
        if self.parsed_age().is_none() {
            fields.push(UserField::Age);
        }
        fields
    }

    fn parsed_age(&self) -> Option<u32> {
        self.age.trim().parse::<u32>().ok().filter(|age| *age > 0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsersState {
    users: Vec<User>,
    draft: UserDraft,
}

impl UsersState {
    pub fn new(seed: &[SeedUser]) -> Self {
        Self {
            users: seed
                .iter()
                .map(|s| User {
                    id: new_user_id(),
                    name: s.name.clone(),
                    email: s.email.clone(),
                    age: s.age,
                })
                .collect(),
            draft: UserDraft::default(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.draft.age = age.into();
    }

    /// Validate the draft and append it. On success the draft is emptied.
    pub fn add_from_draft(&mut self) -> Result<&User, Notice> {
        let (name, email, age) = self.draft.validate()?;
        let user = User {
            id: new_user_id(),
            name,
            email,
            age,
        };
        info!(id = %user.id, name = %user.name, "User added");

        self.draft = UserDraft::default();
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }
}

fn new_user_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, age: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            age: age.to_string(),
        }
    }

    #[test]
    fn test_seed_users() {
        let state = UsersState::new(&SeedUser::defaults());
        let names: Vec<_> = state.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
        assert!(state.users().iter().all(|u| !u.id.is_empty()));
    }

    #[test]
    fn test_validate_rejects_blank_and_bad_age() {
        assert_eq!(draft(" ", "a@b.c", "3").validate(), Err(Notice::invalid_user()));
        assert_eq!(draft("Ann", "", "3").validate(), Err(Notice::invalid_user()));
        assert_eq!(draft("Ann", "a@b.c", "0").validate(), Err(Notice::invalid_user()));
        assert_eq!(draft("Ann", "a@b.c", "").validate(), Err(Notice::invalid_user()));
        assert_eq!(draft("Ann", "a@b.c", "-4").validate(), Err(Notice::invalid_user()));
        assert_eq!(draft("Ann", "a@b.c", "abc").validate(), Err(Notice::invalid_user()));
    }

    #[test]
    fn test_invalid_fields_name_each_problem() {
        assert_eq!(
            draft("", " ", "0").invalid_fields(),
            vec![UserField::Name, UserField::Email, UserField::Age]
        );
        assert_eq!(draft("Ann", "a@b.c", "x").invalid_fields(), vec![UserField::Age]);
        assert!(draft("Ann", "a@b.c", "7").invalid_fields().is_empty());
    }

    #[test]
    fn test_validate_accepts_good_draft() {
        let (name, email, age) = draft("Ann", "ann@example.com", " 41 ")
            .validate()
            .expect("draft is valid");
        assert_eq!(name, "Ann");
        assert_eq!(email, "ann@example.com");
        assert_eq!(age, 41);
    }

    #[test]
    fn test_add_from_draft_appends_and_resets() {
        let mut state = UsersState::new(&SeedUser::defaults());
        state.set_name("Dana");
        state.set_email("dana@example.com");
        state.set_age("33");

        let added = state.add_from_draft().expect("valid draft").clone();
        assert_eq!(added.name, "Dana");
        assert_eq!(added.age, 33);
        assert_eq!(state.users().len(), 4);
        assert_eq!(state.users().last(), Some(&added));
        assert_eq!(state.draft(), &UserDraft::default());
    }

    #[test]
    fn test_rejected_draft_appends_nothing() {
        let mut state = UsersState::new(&[]);
        state.set_name("Eve");
        assert_eq!(state.add_from_draft(), Err(Notice::invalid_user()));
        assert!(state.users().is_empty());
        assert_eq!(state.draft().name, "Eve");
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut state = UsersState::new(&[]);
        for i in 1..=3 {
            state.set_name(format!("User {i}"));
            state.set_email(format!("user{i}@example.com"));
            state.set_age(i.to_string());
            state.add_from_draft().expect("valid draft");
        }
        let mut ids: Vec<_> = state.users().iter().map(|u| u.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_user_fields_as_text() {
        let user = User {
            id: "1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 25,
        };
        assert_eq!(user.field(UserField::Name).as_ref(), "Alice");
        assert_eq!(user.field(UserField::Age).as_ref(), "25");
    }
}
