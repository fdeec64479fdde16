use serde::Serialize;

/// One named argument of a slash command, after shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub value: String,
}

/// Values the reply is built from.
///
/// `title` already carries the role suffix (`"<title> (<role>)"`) when a role
/// was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub title: String,
    pub role: Option<String>,
}
