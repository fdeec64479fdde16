//! Interaction responses sent back to Discord.
//!
//! Both documents are plain serde structs so the serialized JSON is the same
//! bytes for the same input.

use serde::Serialize;

use super::form::{
    BUTTONS, ButtonSpec, EMBED_FIELD_LABELS, Emoji, FIELD_PLACEHOLDER, MAX_WEEKDAY_SELECTIONS,
    WEEKDAY_SELECT_ID, WEEKDAY_SELECT_PLACEHOLDER, WEEKDAYS, WeekdayOption,
};
use crate::core::models::ExtractedFields;

pub const RESPONSE_TYPE_PONG: u8 = 1;
pub const RESPONSE_TYPE_CHANNEL_MESSAGE: u8 = 4;

const COMPONENT_ACTION_ROW: u8 = 1;
const COMPONENT_BUTTON: u8 = 2;
const COMPONENT_STRING_SELECT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyDocument {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageData {
    pub embeds: Vec<Embed>,
    pub components: Vec<ActionRow>,
    pub allowed_mentions: AllowedMentions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: &'static str,
    pub value: &'static str,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: u8,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Select(SelectMenu),
    Button(Button),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectMenu {
    #[serde(rename = "type")]
    pub kind: u8,
    pub custom_id: &'static str,
    pub placeholder: &'static str,
    pub max_values: u8,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
    pub emoji: Emoji,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: u8,
    pub style: u8,
    pub label: &'static str,
    pub custom_id: &'static str,
    pub emoji: Emoji,
}

/// Which roles the reply may ping. `parse` is never sent, so nothing outside
/// `roles` is mentionable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowedMentions {
    pub roles: Vec<String>,
}

/// Acknowledge a `PING` interaction.
#[must_use]
pub fn build_pong() -> ReplyDocument {
    ReplyDocument {
        kind: RESPONSE_TYPE_PONG,
        data: None,
    }
}

/// Build the availability poll message for a validated command.
#[must_use]
pub fn build_poll_reply(fields: &ExtractedFields) -> ReplyDocument {
    let embed = Embed {
        title: fields.title.clone(),
        fields: EMBED_FIELD_LABELS
            .iter()
            .map(|&name| EmbedField {
                name,
                value: FIELD_PLACEHOLDER,
                inline: false,
            })
            .collect(),
    };

    let mut components = vec![Component::Select(weekday_select(&WEEKDAYS))];
    components.extend(BUTTONS.iter().map(|spec| Component::Button(button(spec))));

    ReplyDocument {
        kind: RESPONSE_TYPE_CHANNEL_MESSAGE,
        data: Some(MessageData {
            embeds: vec![embed],
            components: vec![ActionRow {
                kind: COMPONENT_ACTION_ROW,
                components,
            }],
            allowed_mentions: AllowedMentions {
                roles: fields.role.iter().cloned().collect(),
            },
        }),
    }
}

fn weekday_select(days: &[WeekdayOption]) -> SelectMenu {
    SelectMenu {
        kind: COMPONENT_STRING_SELECT,
        custom_id: WEEKDAY_SELECT_ID,
        placeholder: WEEKDAY_SELECT_PLACEHOLDER,
        max_values: MAX_WEEKDAY_SELECTIONS,
        options: days
            .iter()
            .map(|day| SelectOption {
                label: day.label,
                value: day.value,
                emoji: day.emoji.clone(),
            })
            .collect(),
    }
}

fn button(spec: &ButtonSpec) -> Button {
    Button {
        kind: COMPONENT_BUTTON,
        style: spec.style as u8,
        label: spec.label,
        custom_id: spec.custom_id,
        emoji: spec.emoji.clone(),
    }
}
