//! Closed lookup tables from source tags to display descriptors.
//!
//! Every table has an explicit fallback for tags it does not recognise.

use std::borrow::Cow;

const NEUTRAL: &str = "bg-gray-100 text-gray-700";

/// Label and style class for a pill badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge<'a> {
    pub label: Cow<'a, str>,
    pub class: &'static str,
}

/// Kind of scheduled event (`tipo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Regular,
    Special,
    Entertainment,
    Unknown,
}

impl EventKind {
    pub fn parse(tipo: &str) -> Self {
        match tipo {
            "regular" => EventKind::Regular,
            "especial" => EventKind::Special,
            "entretenimento" => EventKind::Entertainment,
            _ => EventKind::Unknown,
        }
    }

    /// Unknown kinds keep their raw label with the neutral style.
    pub fn badge(tipo: &str) -> Badge<'_> {
        let (label, class) = match EventKind::parse(tipo) {
            EventKind::Regular => ("Regular", "bg-blue-100 text-blue-700"),
            EventKind::Special => ("Especial", "bg-purple-100 text-purple-700"),
            EventKind::Entertainment => ("Entretenimento", "bg-green-100 text-green-700"),
            EventKind::Unknown => {
                return Badge {
                    label: Cow::Borrowed(tipo),
                    class: NEUTRAL,
                }
            }
        };
        Badge {
            label: Cow::Borrowed(label),
            class,
        }
    }
}

/// Recipe difficulty (`dificuldade`). The label is always the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn parse(dificuldade: &str) -> Self {
        match dificuldade {
            "Fácil" => Difficulty::Easy,
            "Média" => Difficulty::Medium,
            "Difícil" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn badge(dificuldade: &str) -> Badge<'_> {
        let class = match Difficulty::parse(dificuldade) {
            Difficulty::Easy => "bg-green-100 text-green-700",
            Difficulty::Medium => "bg-yellow-100 text-yellow-700",
            Difficulty::Hard => "bg-red-100 text-red-700",
            Difficulty::Unknown => NEUTRAL,
        };
        Badge {
            label: Cow::Borrowed(dificuldade),
            class,
        }
    }
}

/// Severity of a schedule notice (`tipo`). Unknown severities render as info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn parse(tipo: &str) -> Self {
        match tipo {
            "warning" => NoticeLevel::Warning,
            "error" => NoticeLevel::Error,
            _ => NoticeLevel::Info,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "bg-blue-50 border-blue-300 text-blue-800",
            NoticeLevel::Warning => "bg-yellow-50 border-yellow-300 text-yellow-800",
            NoticeLevel::Error => "bg-red-50 border-red-300 text-red-800",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}
