//! Narrowing of the interaction body into typed values.
//!
//! [`parse_interaction`] turns the untyped JSON into an [`Interaction`] and
//! [`extract_fields`] pulls the poll title and role out of a command's
//! options. Every rejection is the same [`InteractionError::BadRequest`].

use serde_json::Value;
use tracing::debug;

use super::parsing::{JsonKind, is_array, is_object_with_key, is_of_type, v_path};
use crate::core::models::{CommandOption, ExtractedFields};
use crate::errors::InteractionError;

pub const INTERACTION_TYPE_PING: u8 = 1;

pub const TITLE_OPTION: &str = "title";
pub const ROLE_OPTION: &str = "role";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Ping,
    /// Options in request order, up to the point where both a title and a
    /// role have been seen. Anything after that is never read.
    ApplicationCommand { options: Vec<CommandOption> },
}

/// Parse a request body into an [`Interaction`].
///
/// # Errors
///
/// Returns `BadRequest` if the body is absent, not an object with a `type`,
/// or (for non-ping types) lacks a `data.options` array whose entries all
/// carry a string `name` and string `value`.
pub fn parse_interaction(body: Option<&Value>) -> Result<Interaction, InteractionError> {
    let Some(body) = body.filter(|b| is_object_with_key(b, "type")) else {
        debug!("Body is not an object with a type");
        return Err(InteractionError::BadRequest);
    };

    if is_ping(&body["type"]) {
        return Ok(Interaction::Ping);
    }

    let Some(raw_options) = v_path(body, &["data", "options"]).filter(|o| is_array(o)) else {
        debug!("Command interaction missing data.options array");
        return Err(InteractionError::BadRequest);
    };

    let mut options = Vec::new();
    let mut seen_title = false;
    let mut seen_role = false;

    for raw in raw_options.as_array().into_iter().flatten() {
        let option = parse_option(raw)?;
        seen_title |= option.name == TITLE_OPTION;
        seen_role |= option.name == ROLE_OPTION;
        options.push(option);

        if seen_title && seen_role {
            break;
        }
    }

    Ok(Interaction::ApplicationCommand { options })
}

/// Pull the poll title and optional role out of validated options.
///
/// Later entries overwrite earlier ones with the same name. An empty role is
/// treated as no role.
///
/// # Errors
///
/// Returns `BadRequest` when no `title` option is present.
pub fn extract_fields(options: &[CommandOption]) -> Result<ExtractedFields, InteractionError> {
    let mut title: Option<&str> = None;
    let mut role: Option<&str> = None;

    for option in options {
        match option.name.as_str() {
            TITLE_OPTION => title = Some(option.value.as_str()),
            ROLE_OPTION => role = Some(option.value.as_str()),
            _ => {}
        }
    }

    let Some(title) = title else {
        debug!("Command interaction has no title option");
        return Err(InteractionError::BadRequest);
    };
    let role = role.filter(|r| !r.is_empty()).map(str::to_string);

    let title = match &role {
        Some(role) => format!("{title} ({role})"),
        None => title.to_string(),
    };

    Ok(ExtractedFields { title, role })
}

fn is_ping(kind: &Value) -> bool {
    kind.as_f64() == Some(f64::from(INTERACTION_TYPE_PING))
}

fn parse_option(raw: &Value) -> Result<CommandOption, InteractionError> {
    if !is_object_with_key(raw, "name") || !is_object_with_key(raw, "value") {
        debug!("Option missing name or value");
        return Err(InteractionError::BadRequest);
    }

    if !is_of_type(&raw["value"], JsonKind::String) {
        debug!("Option value is not a string");
        return Err(InteractionError::BadRequest);
    }

    let (Some(name), Some(value)) = (raw["name"].as_str(), raw["value"].as_str()) else {
        debug!("Option name is not a string");
        return Err(InteractionError::BadRequest);
    };

    Ok(CommandOption {
        name: name.to_string(),
        value: value.to_string(),
    })
}
