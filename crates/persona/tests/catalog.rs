//! Tests for the personality catalog.

use companion_persona::Style;

#[test]
fn catalog_has_four_styles() {
    assert_eq!(Style::ALL.len(), 4);
}

#[test]
fn ids_round_trip() {
    for style in Style::ALL {
        assert_eq!(Style::from_id(style.id()), style);
    }
}

#[test]
fn unknown_id_falls_back_to_neutral() {
    assert_eq!(Style::from_id("pirate"), Style::Neutral);
    assert_eq!(Style::from_id(""), Style::Neutral);
    assert_eq!(Style::from_id("CALM_MENTOR"), Style::Neutral);
}

#[test]
fn profiles_carry_display_names() {
    assert_eq!(Style::Neutral.profile().name, "Standard AI");
    assert_eq!(Style::CalmMentor.profile().name, "Calm Mentor");
    assert_eq!(Style::WittyFriend.profile().name, "Witty Friend");
    assert_eq!(Style::TherapistStyle.profile().name, "Therapist-Style");
}

#[test]
fn traits_are_non_empty() {
    for style in Style::ALL {
        assert!(!style.profile().traits.is_empty());
        assert!(!style.profile().description.is_empty());
    }
}
