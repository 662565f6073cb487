//! User record
//!
//! The four-field tuple persisted by the store.

/// A registered user as stored on disk: `full_name|phone|email|age`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
}

impl UserRecord {
    /// Arguments follow form order (name, age, phone, email), not storage order.
    pub fn new(
        full_name: impl Into<String>,
        age: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
            email: email.into(),
            age: age.into(),
        }
    }

    /// Fields in storage order
    pub fn fields(&self) -> [&str; 4] {
        [
            self.full_name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.age.as_str(),
        ]
    }
}
