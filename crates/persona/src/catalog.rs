//! The static personality catalog.
//!
//! Four fixed styles, read-only for the life of the process. Unknown
//! identifiers resolve to [`Style::Neutral`] rather than failing.

/// A personality style for response transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Neutral, professional assistant.
    #[default]
    Neutral,
    /// Patient, step-by-step guidance with reassurance.
    CalmMentor,
    /// Casual, humorous, and relatable.
    WittyFriend,
    /// Empathetic, reflective, and supportive.
    TherapistStyle,
}

/// A personality definition: display name, short description, and the
/// traits text fed verbatim into the transformation instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Traits fed into the transformation instructions.
    pub traits: &'static str,
}

impl Style {
    /// Every style in the catalog.
    pub const ALL: [Style; 4] = [
        Style::Neutral,
        Style::CalmMentor,
        Style::WittyFriend,
        Style::TherapistStyle,
    ];

    /// Resolve a personality identifier, falling back to `Neutral`
    /// for unknown ids.
    pub fn from_id(id: &str) -> Self {
        match id {
            "calm_mentor" => Style::CalmMentor,
            "witty_friend" => Style::WittyFriend,
            "therapist_style" => Style::TherapistStyle,
            _ => Style::Neutral,
        }
    }

    /// The catalog identifier for this style.
    pub fn id(&self) -> &'static str {
        match self {
            Style::Neutral => "neutral",
            Style::CalmMentor => "calm_mentor",
            Style::WittyFriend => "witty_friend",
            Style::TherapistStyle => "therapist_style",
        }
    }

    /// The static definition for this style.
    pub fn profile(&self) -> &'static Profile {
        match self {
            Style::Neutral => &NEUTRAL,
            Style::CalmMentor => &CALM_MENTOR,
            Style::WittyFriend => &WITTY_FRIEND,
            Style::TherapistStyle => &THERAPIST_STYLE,
        }
    }
}

const NEUTRAL: Profile = Profile {
    name: "Standard AI",
    description: "Neutral, professional assistant",
    traits: "neutral, professional, informative, straightforward",
};

const CALM_MENTOR: Profile = Profile {
    name: "Calm Mentor",
    description: "Patient, step-by-step guidance with reassurance",
    traits: "patient, methodical, reassuring, encouraging, breaks down complex topics into simple steps",
};

const WITTY_FRIEND: Profile = Profile {
    name: "Witty Friend",
    description: "Casual, humorous, and relatable",
    traits: "casual, humorous, uses slang and jokes, relatable, friendly banter, light-hearted",
};

const THERAPIST_STYLE: Profile = Profile {
    name: "Therapist-Style",
    description: "Empathetic, reflective, and supportive",
    traits: "empathetic, reflective, asks thoughtful questions, validates feelings, supportive, non-judgmental",
};
