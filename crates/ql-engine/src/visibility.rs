//! Link visibility filtering.
//!
//! A link may carry up to two inventory guards. Both must pass for the
//! link to be shown; links a guard hides still exist in the graph and
//! reappear the moment the inventory changes.

use ql_core::{Link, Scene};

use crate::player::PlayerState;

/// Evaluate a link's guards against the player's inventory.
///
/// `visible = (requires_present unset OR held) AND (requires_absent unset
/// OR not held)`.
pub fn is_visible(link: &Link, state: &PlayerState) -> bool {
    let present_ok = link
        .requires_present
        .as_ref()
        .is_none_or(|item| state.has_item(item));
    let absent_ok = link
        .requires_absent
        .as_ref()
        .is_none_or(|item| !state.has_item(item));
    present_ok && absent_ok
}

/// The ordered sub-sequence of a scene's links that pass their guards.
///
/// Declaration order is preserved; it is the display order, and a link's
/// position in the returned sequence is its selection index.
pub fn visible_links<'a>(scene: &'a Scene, state: &PlayerState) -> Vec<&'a Link> {
    scene
        .links
        .iter()
        .filter(|link| is_visible(link, state))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::player::STARTING_HEALTH;

    #[test]
    fn unguarded_link_is_always_visible() {
        let link = Link::new("East").with_target("road");
        let state = PlayerState::new("start", STARTING_HEALTH);
        assert!(is_visible(&link, &state));
    }

    #[test]
    fn requires_present_hides_until_held() {
        let link = Link::new("Chop snake").requires_present("sword");
        let mut state = PlayerState::new("road", STARTING_HEALTH);

        assert!(!is_visible(&link, &state));
        state.add_item("sword");
        assert!(is_visible(&link, &state));
    }

    #[test]
    fn requires_absent_hides_once_held() {
        let link = Link::new("Pick up sword").requires_absent("sword");
        let mut state = PlayerState::new("start", STARTING_HEALTH);

        assert!(is_visible(&link, &state));
        state.add_item("sword");
        assert!(!is_visible(&link, &state));
    }

    #[test]
    fn both_guards_must_pass() {
        let link = Link::new("Trade")
            .requires_present("ore")
            .requires_absent("sword");
        let mut state = PlayerState::new("start", STARTING_HEALTH);

        // Neither held: the present-guard fails.
        assert!(!is_visible(&link, &state));

        state.add_item("ore");
        assert!(is_visible(&link, &state));

        state.add_item("sword");
        assert!(!is_visible(&link, &state));
    }

    #[test]
    fn visible_links_preserve_declaration_order() {
        let scene = Scene::new("The beginning", "")
            .with_link(Link::new("West").with_target("deadend"))
            .with_link(Link::new("East").with_target("road"))
            .with_link(Link::new("Pick up sword").requires_absent("sword"));

        let mut state = PlayerState::new("start", STARTING_HEALTH);
        let visible: Vec<&str> = visible_links(&scene, &state)
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(visible, vec!["West", "East", "Pick up sword"]);

        state.add_item("sword");
        let visible: Vec<&str> = visible_links(&scene, &state)
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(visible, vec!["West", "East"]);
    }

    proptest! {
        /// `is_visible` matches the guard formula for every combination of
        /// guards and inventory.
        #[test]
        fn matches_the_guard_formula(
            held in proptest::collection::btree_set("[a-c]", 0..3),
            present in proptest::option::of("[a-c]"),
            absent in proptest::option::of("[a-c]"),
        ) {
            let mut link = Link::new("guarded");
            link.requires_present = present.clone();
            link.requires_absent = absent.clone();

            let mut state = PlayerState::new("start", STARTING_HEALTH);
            state.inventory = held.clone();

            let expected = present.as_ref().is_none_or(|i| held.contains(i))
                && absent.as_ref().is_none_or(|i| !held.contains(i));
            prop_assert_eq!(is_visible(&link, &state), expected);
        }
    }
}
