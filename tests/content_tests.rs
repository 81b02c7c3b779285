// Host-side tests for the persona content sets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/content.rs"]
mod content;
#[path = "../src/core/signal.rs"]
mod signal;

use content::*;

#[test]
fn variant_lookup_defaults_to_the_primary_persona() {
    assert_eq!(content_for_variant(None).persona, PRIMARY.persona);
    assert_eq!(content_for_variant(Some("nope")).persona, PRIMARY.persona);
    assert_eq!(content_for_variant(Some("adam")).persona, ALT.persona);
}

#[test]
fn both_personas_are_structurally_complete() {
    for set in [&PRIMARY, &ALT] {
        assert_eq!(set.skills.len(), 16, "{}: sphere expects 16 labels", set.persona);
        assert!(set.projects.len() >= 2, "{}: carousel needs at least two", set.persona);
        assert!(!set.intents.is_empty());
        assert!(!set.persona.is_empty());
        assert!(signal::email_looks_valid(set.email), "{}: bad email", set.persona);
    }
}

#[test]
fn skill_labels_are_unique_per_persona() {
    for set in [&PRIMARY, &ALT] {
        let mut labels: Vec<&str> = set.skills.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), set.skills.len(), "{}: duplicate skill", set.persona);
    }
}

#[test]
fn project_records_carry_usable_accents() {
    for set in [&PRIMARY, &ALT] {
        for project in set.projects {
            assert!(project.accent.starts_with('#') && project.accent.len() == 7);
            let parts: Vec<&str> = project.accent_rgb.split(',').collect();
            assert_eq!(parts.len(), 3, "{}: rgb triplet", project.title);
            for part in parts {
                part.parse::<u8>()
                    .unwrap_or_else(|_| panic!("{}: bad rgb component {part}", project.title));
            }
            assert!(!project.title.is_empty());
            assert!(!project.subtitle.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tags.is_empty());
            assert!(!project.status.is_empty());
            assert!(!project.link.is_empty());
        }
    }
}

#[test]
fn accent_hex_matches_the_rgb_triplet() {
    for set in [&PRIMARY, &ALT] {
        for project in set.projects {
            let hex = &project.accent[1..];
            let r = u8::from_str_radix(&hex[0..2], 16).expect("accent r");
            let g = u8::from_str_radix(&hex[2..4], 16).expect("accent g");
            let b = u8::from_str_radix(&hex[4..6], 16).expect("accent b");
            let parts: Vec<u8> = project
                .accent_rgb
                .split(',')
                .map(|p| p.parse().expect("rgb component"))
                .collect();
            assert_eq!(vec![r, g, b], parts, "{}: accent mismatch", project.title);
        }
    }
}
