// tests/animal.rs
#![cfg(feature = "entity")]

use forager::{Animal, Area, Error};

fn cat() -> Animal {
    Animal::new(
        "Jimbo",
        "Cat",
        vec![
            "meat".into(),
            "cheese".into(),
            "grass".into(),
            "baked beans".into(),
            "doughnuts".into(),
        ],
    )
}

fn area_with(items: &[&str]) -> Area {
    Area {
        terrain: Some("grass".into()),
        safe: true,
        items: Some(items.iter().map(|s| s.to_string()).collect()),
    }
}

/* ──────────────────────────────────────────────────────────────────────────
1) Identity and preferences
────────────────────────────────────────────────────────────────────────── */

#[test]
fn identity_is_fixed_and_preferences_are_owner_mutable() {
    let mut jimbo = cat();
    assert_eq!(jimbo.name(), "Jimbo");
    assert_eq!(jimbo.kind(), "Cat");
    assert_eq!(jimbo.preferred_foods.len(), 5);

    jimbo.preferred_foods.push("tuna".into());
    assert!(jimbo.preferred_foods.contains(&"tuna".to_string()));
}

/* ──────────────────────────────────────────────────────────────────────────
2) find_food — filter by preference, order preserved, missing field raises
────────────────────────────────────────────────────────────────────────── */

#[test]
fn find_food_returns_preferred_items_in_area_order() {
    let jimbo = cat();
    assert_eq!(
        jimbo.find_food(&area_with(&["grass", "baked beans", "trees"])),
        Ok(vec!["grass".to_string(), "baked beans".to_string()])
    );
    assert_eq!(jimbo.find_food(&area_with(&["grass", "trees"])), Ok(vec!["grass".to_string()]));
}

#[test]
fn find_food_keeps_duplicates() {
    let jimbo = cat();
    assert_eq!(
        jimbo.find_food(&area_with(&["grass", "rocks", "grass"])),
        Ok(vec!["grass".to_string(), "grass".to_string()])
    );
}

#[test]
fn find_food_returns_empty_vec_when_nothing_matches() {
    let jimbo = cat();
    assert_eq!(jimbo.find_food(&area_with(&["trees", "rocks"])), Ok(vec![]));
    assert_eq!(jimbo.find_food(&area_with(&[])), Ok(vec![]));
}

#[test]
fn find_food_raises_on_area_without_items() {
    let jimbo = cat();
    let bare = Area {
        terrain: Some("grass".into()),
        safe: true,
        items: None,
    };
    assert_eq!(jimbo.find_food(&bare), Err(Error::MissingField("items")));
}

#[test]
fn area_deserialized_without_items_field_still_raises() {
    // The shape contract: external callers may hand over records with no
    // `items` at all.
    let bare: Area = serde_json::from_str(r#"{"terrain": "grass", "safe": true}"#)
        .expect("area without items is a valid record");
    assert!(bare.items.is_none());
    assert_eq!(cat().find_food(&bare), Err(Error::MissingField("items")));
}

/* ──────────────────────────────────────────────────────────────────────────
3) eat_food / plop — strict FIFO with a None sentinel
────────────────────────────────────────────────────────────────────────── */

#[test]
fn digestion_is_first_in_first_out() {
    let mut jimbo = cat();
    jimbo.eat_food("grass");
    jimbo.eat_food("tree");
    assert_eq!(jimbo.plop(), Some("grass".to_string()));
    assert_eq!(jimbo.plop(), Some("tree".to_string()));
    assert_eq!(jimbo.plop(), None);
}

#[test]
fn eat_food_accepts_non_preferred_items() {
    let mut jimbo = cat();
    jimbo.eat_food("rocks");
    assert_eq!(jimbo.plop(), Some("rocks".to_string()));
}

#[test]
fn plop_on_empty_stomach_is_idempotent() {
    let mut jimbo = cat();
    for _ in 0..3 {
        assert_eq!(jimbo.plop(), None, "empty stomach must keep returning None");
    }
}
