//! The transition resolution algorithm.
//!
//! [`resolve`] is the only place player state changes during play. It is
//! pure: it takes the current state and the selected link and returns the
//! next state, leaving the inputs untouched. The step order is load-bearing:
//! it fixes the precedence between effects declared on the same link.

use ql_core::{Link, SceneGraph};

use crate::player::PlayerState;

/// Compute the next player state for a selected link.
///
/// `link` must belong to the scene `state.scene_id` names. The caller is
/// responsible for that contract; it is asserted in debug builds only.
///
/// Steps, in order:
/// 1. the tentative next scene is `link.target`, or "stay" when unset;
/// 2. `gain` adds its item to the inventory (no-op when already held);
/// 3. `lose` removes its item (no-op when not held);
/// 4. `damage` is subtracted from health, clamped below at 0. Negative
///    damage heals with no upper clamp;
/// 5. if health is now below 1 the next scene becomes the graph's death
///    scene, discarding whatever `target` said;
/// 6. the next scene id, if any was determined, is committed.
pub fn resolve(graph: &SceneGraph, state: &PlayerState, link: &Link) -> PlayerState {
    debug_assert!(
        graph
            .scene(&state.scene_id)
            .is_some_and(|scene| scene.links.iter().any(|l| l == link)),
        "link \"{}\" does not belong to scene \"{}\"",
        link.text,
        state.scene_id,
    );

    let mut next = state.clone();
    let mut next_scene = link.target.clone();

    if let Some(item) = &link.gain {
        next.add_item(item.clone());
    }
    if let Some(item) = &link.lose {
        next.remove_item(item);
    }
    if let Some(damage) = link.damage {
        next.health = (next.health - damage).max(0);
    }
    if next.health < 1 {
        next_scene = Some(graph.death().clone());
    }
    if let Some(id) = next_scene {
        next.scene_id = id;
    }

    next
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ql_core::{GraphConfig, Scene, SceneId};
    use proptest::prelude::*;

    use super::*;
    use crate::player::STARTING_HEALTH;

    /// The five-scene adventure the engine was written against.
    fn adventure() -> SceneGraph {
        let mut scenes = BTreeMap::new();
        scenes.insert(
            SceneId::new("graveyard"),
            Scene::new("FAIL!!", "You died horribly."),
        );
        scenes.insert(
            SceneId::new("start"),
            Scene::new("The beginning", "Where do you want to go?")
                .with_link(Link::new("West").with_target("deadend"))
                .with_link(Link::new("East").with_target("road"))
                .with_link(
                    Link::new("Pick up sword")
                        .with_gain("sword")
                        .requires_absent("sword"),
                ),
        );
        scenes.insert(
            SceneId::new("deadend"),
            Scene::new("End of the road", "Nothing here.")
                .with_link(Link::new("Go back").with_target("start")),
        );
        scenes.insert(
            SceneId::new("road"),
            Scene::new("Trudging on", "There is a snake by the road.")
                .with_link(Link::new("Pet snake").with_damage(3))
                .with_link(
                    Link::new("Chop snake")
                        .requires_present("sword")
                        .with_target("roaddeadsnake"),
                ),
        );
        scenes.insert(
            SceneId::new("roaddeadsnake"),
            Scene::new("Trudging on a dead snake", "A dead snake lies here."),
        );

        SceneGraph::new(GraphConfig {
            start: SceneId::new("start"),
            death: SceneId::new("graveyard"),
            scenes,
        })
        .unwrap()
    }

    fn link<'a>(graph: &'a SceneGraph, scene: &str, text: &str) -> &'a Link {
        graph
            .scene(&SceneId::new(scene))
            .unwrap()
            .links
            .iter()
            .find(|l| l.text == text)
            .unwrap()
    }

    #[test]
    fn picking_up_the_sword_stays_on_scene() {
        let graph = adventure();
        let state = PlayerState::new("start", STARTING_HEALTH);

        let next = resolve(&graph, &state, link(&graph, "start", "Pick up sword"));

        assert_eq!(next.scene_id, SceneId::new("start"));
        assert_eq!(next.health, STARTING_HEALTH);
        assert!(next.has_item("sword"));
        assert_eq!(next.inventory.len(), 1);
    }

    #[test]
    fn moving_east_changes_only_the_scene() {
        let graph = adventure();
        let state = PlayerState::new("start", STARTING_HEALTH);

        let next = resolve(&graph, &state, link(&graph, "start", "East"));

        assert_eq!(next.scene_id, SceneId::new("road"));
        assert_eq!(next.health, STARTING_HEALTH);
        assert!(next.inventory.is_empty());
    }

    #[test]
    fn repeated_damage_clamps_and_forces_death() {
        let graph = adventure();
        let pet = link(&graph, "road", "Pet snake");
        let mut state = PlayerState::new("road", STARTING_HEALTH);

        // Health walks 7, 4, 1 while staying on the road.
        for expected in [7, 4, 1] {
            state = resolve(&graph, &state, pet);
            assert_eq!(state.health, expected);
            assert_eq!(state.scene_id, SceneId::new("road"));
        }

        // Fourth pet: 1 - 3 clamps to 0, and the targetless link is
        // overridden to the death scene.
        state = resolve(&graph, &state, pet);
        assert_eq!(state.health, 0);
        assert_eq!(state.scene_id, SceneId::new("graveyard"));
    }

    #[test]
    fn death_overrides_an_explicit_target() {
        // A lethal link that claims to lead somewhere else.
        let lethal = Link::new("Leap").with_target("deadend").with_damage(100);

        let mut scenes = BTreeMap::new();
        scenes.insert(
            SceneId::new("start"),
            Scene::new("Cliff", "A long way down.").with_link(lethal.clone()),
        );
        scenes.insert(SceneId::new("deadend"), Scene::new("Ledge", ""));
        scenes.insert(SceneId::new("graveyard"), Scene::new("FAIL!!", ""));
        let graph = SceneGraph::new(GraphConfig {
            start: SceneId::new("start"),
            death: SceneId::new("graveyard"),
            scenes,
        })
        .unwrap();

        let state = PlayerState::new("start", STARTING_HEALTH);
        let next = resolve(&graph, &state, &lethal);
        assert_eq!(next.scene_id, SceneId::new("graveyard"));
        assert_eq!(next.health, 0);
    }

    #[test]
    fn chopping_the_snake_reaches_the_terminal_scene() {
        let graph = adventure();
        let mut state = PlayerState::new("road", STARTING_HEALTH);
        state.add_item("sword");

        let next = resolve(&graph, &state, link(&graph, "road", "Chop snake"));

        assert_eq!(next.scene_id, SceneId::new("roaddeadsnake"));
        assert!(graph.scene(&next.scene_id).unwrap().is_terminal());
    }

    #[test]
    fn negative_damage_heals_without_upper_clamp() {
        let mut scenes = BTreeMap::new();
        scenes.insert(
            SceneId::new("start"),
            Scene::new("Shrine", "A healing spring.")
                .with_link(Link::new("Drink").with_damage(-5)),
        );
        scenes.insert(SceneId::new("graveyard"), Scene::new("FAIL!!", ""));
        let graph = SceneGraph::new(GraphConfig {
            start: SceneId::new("start"),
            death: SceneId::new("graveyard"),
            scenes,
        })
        .unwrap();

        let state = PlayerState::new("start", STARTING_HEALTH);
        let drink = &graph.scene(&SceneId::new("start")).unwrap().links[0];

        let next = resolve(&graph, &state, drink);
        assert_eq!(next.health, 15);
        assert_eq!(next.scene_id, SceneId::new("start"));
    }

    #[test]
    fn gain_and_lose_on_one_link_apply_in_order() {
        let mut scenes = BTreeMap::new();
        scenes.insert(
            SceneId::new("start"),
            Scene::new("Forge", "Trade your ore.").with_link(
                Link::new("Trade").with_gain("sword").with_lose("ore"),
            ),
        );
        scenes.insert(SceneId::new("graveyard"), Scene::new("FAIL!!", ""));
        let graph = SceneGraph::new(GraphConfig {
            start: SceneId::new("start"),
            death: SceneId::new("graveyard"),
            scenes,
        })
        .unwrap();

        let mut state = PlayerState::new("start", STARTING_HEALTH);
        state.add_item("ore");

        let trade = &graph.scene(&SceneId::new("start")).unwrap().links[0];
        let next = resolve(&graph, &state, trade);
        assert!(next.has_item("sword"));
        assert!(!next.has_item("ore"));
    }

    #[test]
    fn resolver_does_not_mutate_its_input() {
        let graph = adventure();
        let state = PlayerState::new("start", STARTING_HEALTH);
        let before = state.clone();

        let _ = resolve(&graph, &state, link(&graph, "start", "East"));
        assert_eq!(state, before);
    }

    proptest! {
        /// Health never drops below zero, whatever damage sequence the
        /// links apply.
        #[test]
        fn health_floor_holds(damages in proptest::collection::vec(-20i64..40, 1..30)) {
            let mut scenes = BTreeMap::new();
            let mut scene = Scene::new("Pit", "Ouch.");
            for d in &damages {
                scene = scene.with_link(Link::new(format!("hit {d}")).with_damage(*d));
            }
            scenes.insert(SceneId::new("start"), scene);
            scenes.insert(SceneId::new("graveyard"), Scene::new("FAIL!!", ""));
            let graph = SceneGraph::new(GraphConfig {
                start: SceneId::new("start"),
                death: SceneId::new("graveyard"),
                scenes,
            }).unwrap();

            let mut state = PlayerState::new("start", STARTING_HEALTH);
            for (i, _) in damages.iter().enumerate() {
                let scene_links = &graph.scene(&SceneId::new("start")).unwrap().links;
                // Once dead the player sits on the terminal death scene;
                // stop applying that scene's links.
                if state.scene_id != SceneId::new("start") {
                    break;
                }
                state = resolve(&graph, &state, &scene_links[i]);
                prop_assert!(state.health >= 0);
            }
        }

        /// Any transition that lands on health < 1 ends on the death
        /// scene, regardless of the link's declared target.
        #[test]
        fn forced_death_overrides_target(
            start_health in 1i64..20,
            damage in 1i64..40,
            has_target in proptest::bool::ANY,
        ) {
            let mut link = Link::new("strike").with_damage(damage);
            if has_target {
                link = link.with_target("elsewhere");
            }

            let mut scenes = BTreeMap::new();
            scenes.insert(SceneId::new("start"), Scene::new("Arena", "").with_link(link.clone()));
            scenes.insert(SceneId::new("elsewhere"), Scene::new("Out", ""));
            scenes.insert(SceneId::new("graveyard"), Scene::new("FAIL!!", ""));
            let graph = SceneGraph::new(GraphConfig {
                start: SceneId::new("start"),
                death: SceneId::new("graveyard"),
                scenes,
            }).unwrap();

            let state = PlayerState::new("start", start_health);
            let next = resolve(&graph, &state, &link);

            if start_health - damage < 1 {
                prop_assert_eq!(&next.scene_id, graph.death());
            } else if has_target {
                prop_assert_eq!(next.scene_id, SceneId::new("elsewhere"));
            } else {
                prop_assert_eq!(next.scene_id, SceneId::new("start"));
            }
        }

        /// Gaining a held item or losing an unheld one leaves the
        /// inventory exactly as it was.
        #[test]
        fn inventory_edits_are_idempotent(
            held in proptest::collection::btree_set("[a-z]{1,8}", 0..6),
            item in "[a-z]{1,8}",
        ) {
            let gain = Link::new("gain").with_gain(item.clone());
            let lose = Link::new("lose").with_lose(item.clone());
            let mut scenes = BTreeMap::new();
            scenes.insert(
                SceneId::new("start"),
                Scene::new("Camp", "").with_link(gain.clone()).with_link(lose.clone()),
            );
            scenes.insert(SceneId::new("graveyard"), Scene::new("FAIL!!", ""));
            let graph = SceneGraph::new(GraphConfig {
                start: SceneId::new("start"),
                death: SceneId::new("graveyard"),
                scenes,
            }).unwrap();

            let mut state = PlayerState::new("start", STARTING_HEALTH);
            state.inventory = held.clone();

            let gained = resolve(&graph, &state, &gain);
            let gained_twice = resolve(&graph, &gained, &gain);
            prop_assert_eq!(&gained.inventory, &gained_twice.inventory);
            prop_assert!(gained.has_item(&item));

            let lost = resolve(&graph, &state, &lose);
            let lost_twice = resolve(&graph, &lost, &lose);
            prop_assert_eq!(&lost.inventory, &lost_twice.inventory);
            prop_assert!(!lost.has_item(&item));
        }
    }
}
