// User directory domain model

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl UserSummary {
    pub fn new(user_id: String, name: String, avatar_url: Option<String>) -> Self {
        Self {
            user_id,
            name,
            avatar_url,
        }
    }

    /// Label shown next to the chart once this user's data has settled.
    pub fn header_label(&self) -> String {
        match &self.avatar_url {
            Some(url) => format!("{} ({})", self.name, url),
            None => self.name.clone(),
        }
    }
}
