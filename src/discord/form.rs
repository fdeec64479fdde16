//! Static content of the availability poll: weekday options, buttons and the
//! embed's field labels.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Emoji attached to a select option or button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emoji {
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayOption {
    pub label: &'static str,
    pub value: &'static str,
    pub emoji: Emoji,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub style: ButtonStyle,
    pub label: &'static str,
    pub custom_id: &'static str,
    pub emoji: Emoji,
}

pub const WEEKDAY_SELECT_ID: &str = "weekdays";
pub const WEEKDAY_SELECT_PLACEHOLDER: &str = "Jours disponibles / Available days";
pub const MAX_WEEKDAY_SELECTIONS: u8 = 7;

/// Shown in each embed field until someone answers.
pub const FIELD_PLACEHOLDER: &str = "-";

/// Labels of the three informational rows of the poll embed.
pub const EMBED_FIELD_LABELS: [&str; 3] = [
    "⭐ Préféré / Preferred",
    "✅ Disponible / Available",
    "❌ Indisponible / Unavailable",
];

pub static WEEKDAYS: Lazy<Vec<WeekdayOption>> = Lazy::new(|| {
    [
        ("Lundi / Monday", "monday", "1️⃣"),
        ("Mardi / Tuesday", "tuesday", "2️⃣"),
        ("Mercredi / Wednesday", "wednesday", "3️⃣"),
        ("Jeudi / Thursday", "thursday", "4️⃣"),
        ("Vendredi / Friday", "friday", "5️⃣"),
        ("Samedi / Saturday", "saturday", "6️⃣"),
        ("Dimanche / Sunday", "sunday", "7️⃣"),
    ]
    .into_iter()
    .map(|(label, value, emoji)| WeekdayOption {
        label,
        value,
        emoji: Emoji { name: emoji },
    })
    .collect()
});

pub static BUTTONS: Lazy<[ButtonSpec; 2]> = Lazy::new(|| {
    [
        ButtonSpec {
            style: ButtonStyle::Success,
            label: "Préféré / Preferred",
            custom_id: "preferred",
            emoji: Emoji { name: "⭐" },
        },
        ButtonSpec {
            style: ButtonStyle::Danger,
            label: "Indisponible / Unavailable",
            custom_id: "unavailable",
            emoji: Emoji { name: "❌" },
        },
    ]
});
