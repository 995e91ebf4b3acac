//! Move Resolver
//!
//! The single consumer of drag lifecycle signals and the single mutator of
//! the section store. Every operation is a pure function of the signal and
//! the current sections: it returns `Some(next)` with a full replacement
//! snapshot, or `None` when nothing changes. Malformed input (unresolvable
//! over target, an active id found in no section) is a defensive no-op —
//! an invalid gesture is ignored, never an error.

use crate::models::{Card, CardSource, Section};
use leptos_dragdrop::ActiveDrag;

/// Over ids with this prefix name a whole section's drop zone; anything
/// else is a card id and resolves to its containing section.
pub const SECTION_ZONE_PREFIX: &str = "section-";

/// Build the drop-zone id for a section
pub fn section_zone_id(section_id: &str) -> String {
    format!("{SECTION_ZONE_PREFIX}{section_id}")
}

/// A parsed over target
enum DropRef<'a> {
    Zone(&'a str),
    Card(&'a str),
}

fn parse_drop_ref(over_id: &str) -> DropRef<'_> {
    match over_id.strip_prefix(SECTION_ZONE_PREFIX) {
        Some(section_id) => DropRef::Zone(section_id),
        None => DropRef::Card(over_id),
    }
}

/// First section whose card list contains `card_id`. Callers keep the
/// invariant that an id lives in at most one section.
pub fn find_container<'a>(sections: &'a [Section], card_id: &str) -> Option<&'a Section> {
    sections
        .iter()
        .find(|s| s.cards.iter().any(|c| c.id == card_id))
}

fn target_section_index(sections: &[Section], over_id: &str) -> Option<usize> {
    match parse_drop_ref(over_id) {
        DropRef::Zone(section_id) => sections.iter().position(|s| s.id == section_id),
        DropRef::Card(card_id) => sections
            .iter()
            .position(|s| s.cards.iter().any(|c| c.id == card_id)),
    }
}

/// Insertion index within `section`: the hovered card's position, or
/// end-of-list for a zone hover or an id not found in the list.
fn insertion_index(section: &Section, over_id: &str) -> usize {
    match parse_drop_ref(over_id) {
        DropRef::Zone(_) => section.cards.len(),
        DropRef::Card(card_id) => section
            .cards
            .iter()
            .position(|c| c.id == card_id)
            .unwrap_or(section.cards.len()),
    }
}

/// Drop every preview entry belonging to this drag id, in every section
fn purge_previews(sections: &mut [Section], drag_id: &str) {
    for section in sections.iter_mut() {
        section.cards.retain(|c| !(c.preview && c.id == drag_id));
    }
}

/// Content to show in the floating overlay for the drag that just started
pub fn preview_content(sections: &[Section], active: &ActiveDrag<CardSource>) -> Option<String> {
    match &active.data {
        CardSource::Supply { content, .. } => Some(content.clone()),
        CardSource::Placed => sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .find(|c| c.id == active.id)
            .map(|c| c.content.clone()),
    }
}

/// Apply a drag-over signal.
///
/// Supply drags maintain exactly one preview entry for the drag id; placed
/// drags move between sections eagerly so the source list reflows under the
/// pointer. Same-section hovers never mutate — intra-section order commits
/// on drag end only.
pub fn on_drag_over(
    sections: &[Section],
    active: &ActiveDrag<CardSource>,
    over_id: &str,
) -> Option<Vec<Section>> {
    let target = target_section_index(sections, over_id)?;

    match &active.data {
        CardSource::Supply { content, .. } => {
            let mut next = sections.to_vec();
            // Hovering our own preview: re-insert where it already sits
            let prior = next[target]
                .cards
                .iter()
                .position(|c| c.preview && c.id == active.id);
            purge_previews(&mut next, &active.id);
            let index = if over_id == active.id {
                prior.unwrap_or(next[target].cards.len())
            } else {
                insertion_index(&next[target], over_id)
            };
            let index = index.min(next[target].cards.len());
            next[target].cards.insert(
                index,
                Card {
                    id: active.id.clone(),
                    content: content.clone(),
                    preview: true,
                },
            );
            (next != sections).then_some(next)
        }
        CardSource::Placed => {
            let source = sections
                .iter()
                .position(|s| s.cards.iter().any(|c| c.id == active.id))?;
            if source == target {
                return None;
            }
            let mut next = sections.to_vec();
            let from = next[source].cards.iter().position(|c| c.id == active.id)?;
            let card = next[source].cards.remove(from);
            let index = insertion_index(&next[target], over_id).min(next[target].cards.len());
            next[target].cards.insert(index, card);
            Some(next)
        }
    }
}

/// Apply a drag-end signal. `fresh_id` supplies the id for a card
/// finalized out of the supply pool; it is not invoked otherwise.
pub fn on_drag_end(
    sections: &[Section],
    active: &ActiveDrag<CardSource>,
    over_id: Option<&str>,
    fresh_id: impl FnOnce() -> String,
) -> Option<Vec<Section>> {
    match &active.data {
        CardSource::Supply { content, .. } => {
            let target = over_id.and_then(|over| target_section_index(sections, over));
            let mut next = sections.to_vec();
            let prior = target.and_then(|t| {
                next[t]
                    .cards
                    .iter()
                    .position(|c| c.preview && c.id == active.id)
            });
            purge_previews(&mut next, &active.id);

            let (Some(target), Some(over)) = (target, over_id) else {
                // Dropped outside every zone: previews are transient, so
                // clearing them is the only change we commit.
                return (next != sections).then_some(next);
            };

            let index = if over == active.id {
                prior.unwrap_or(next[target].cards.len())
            } else {
                insertion_index(&next[target], over)
            };
            let index = index.min(next[target].cards.len());
            next[target]
                .cards
                .insert(index, Card::new(fresh_id(), content.clone()));
            Some(next)
        }
        CardSource::Placed => {
            let over = over_id?;
            let target = target_section_index(sections, over)?;
            let source = sections
                .iter()
                .position(|s| s.cards.iter().any(|c| c.id == active.id))?;
            let mut next = sections.to_vec();
            let from = next[source].cards.iter().position(|c| c.id == active.id)?;
            // Destination index is computed before removal, so a
            // same-section move matches the classic splice semantics.
            let index = insertion_index(&next[target], over);
            let card = next[source].cards.remove(from);
            let index = index.min(next[target].cards.len());
            next[target].cards.insert(index, card);
            (next != sections).then_some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, content: &str) -> Card {
        Card::new(id, content)
    }

    fn section(id: &str, title: &str, cards: Vec<Card>) -> Section {
        Section {
            id: id.into(),
            title: title.into(),
            cards,
        }
    }

    fn board() -> Vec<Section> {
        vec![
            section("a", "Section A", vec![]),
            section("b", "Section B", vec![]),
            section("c", "Section C", vec![]),
        ]
    }

    fn supply_drag(drag_id: &str, content: &str) -> ActiveDrag<CardSource> {
        ActiveDrag {
            id: drag_id.into(),
            data: CardSource::Supply {
                stable_id: "1".into(),
                content: content.into(),
            },
        }
    }

    fn placed_drag(card_id: &str) -> ActiveDrag<CardSource> {
        ActiveDrag {
            id: card_id.into(),
            data: CardSource::Placed,
        }
    }

    /// Every card id occurs exactly once across the whole board
    fn assert_no_duplicates(sections: &[Section]) {
        let ids: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .map(|c| c.id.as_str())
            .collect();
        for id in &ids {
            assert_eq!(
                ids.iter().filter(|other| *other == id).count(),
                1,
                "card id {id} appears more than once"
            );
        }
    }

    #[test]
    fn find_container_locates_the_owning_section() {
        let mut sections = board();
        sections[1].cards.push(card("x", "X"));
        assert_eq!(find_container(&sections, "x").map(|s| s.id.as_str()), Some("b"));
        assert!(find_container(&sections, "missing").is_none());
    }

    #[test]
    fn supply_hover_over_empty_section_zone_inserts_one_preview() {
        let sections = board();
        let active = supply_drag("supply-1-0", "Item 1");
        let next = on_drag_over(&sections, &active, "section-a").expect("should insert preview");
        assert_eq!(next[0].cards.len(), 1);
        assert!(next[0].cards[0].preview);
        assert_eq!(next[0].cards[0].id, "supply-1-0");
        assert_eq!(next[0].cards[0].content, "Item 1");
        assert_eq!(next[1], sections[1]);
        assert_eq!(next[2], sections[2]);
    }

    #[test]
    fn repeated_identical_supply_hover_is_idempotent() {
        let sections = board();
        let active = supply_drag("supply-1-0", "Item 1");
        let next = on_drag_over(&sections, &active, "section-a").expect("first hover inserts");
        // A second identical signal produces no change at all
        assert!(on_drag_over(&next, &active, "section-a").is_none());
        assert_eq!(next[0].cards.len(), 1);
    }

    #[test]
    fn supply_hover_over_a_card_inserts_preview_at_its_index() {
        let mut sections = board();
        sections[1].cards = vec![card("p", "P"), card("q", "Q"), card("r", "R")];
        let active = supply_drag("supply-1-0", "Item 1");
        let next = on_drag_over(&sections, &active, "q").expect("should insert preview");
        let ids: Vec<&str> = next[1].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["p", "supply-1-0", "q", "r"]);
    }

    #[test]
    fn supply_hover_over_own_preview_keeps_its_position() {
        let mut sections = board();
        sections[1].cards = vec![card("p", "P"), card("q", "Q")];
        let active = supply_drag("supply-1-0", "Item 1");
        let next = on_drag_over(&sections, &active, "q").expect("insert at index 1");
        // Pointer now rests on the preview itself; nothing should move
        assert!(on_drag_over(&next, &active, "supply-1-0").is_none());
    }

    #[test]
    fn supply_preview_follows_the_pointer_across_sections() {
        let sections = board();
        let active = supply_drag("supply-1-0", "Item 1");
        let in_a = on_drag_over(&sections, &active, "section-a").expect("preview in a");
        let in_b = on_drag_over(&in_a, &active, "section-b").expect("preview moves to b");
        assert!(in_b[0].cards.is_empty());
        assert_eq!(in_b[1].cards.len(), 1);
        assert_no_duplicates(&in_b);
    }

    #[test]
    fn placed_hover_moves_card_between_sections() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X"), card("y", "Y")];
        sections[1].cards = vec![card("p", "P"), card("q", "Q")];
        let active = placed_drag("x");
        let next = on_drag_over(&sections, &active, "q").expect("cross-section move");
        let a_ids: Vec<&str> = next[0].cards.iter().map(|c| c.id.as_str()).collect();
        let b_ids: Vec<&str> = next[1].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(a_ids, ["y"]);
        assert_eq!(b_ids, ["p", "x", "q"]);
        assert_no_duplicates(&next);
    }

    #[test]
    fn placed_hover_within_its_own_section_is_a_no_op() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X"), card("y", "Y")];
        assert!(on_drag_over(&sections, &placed_drag("x"), "y").is_none());
    }

    #[test]
    fn hover_with_unresolvable_target_is_a_no_op() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X")];
        assert!(on_drag_over(&sections, &placed_drag("x"), "nowhere").is_none());
        assert!(on_drag_over(&sections, &supply_drag("supply-1-0", "Item 1"), "nowhere").is_none());
        // A dragged id that lives in no section resolves nothing either
        assert!(on_drag_over(&sections, &placed_drag("ghost"), "x").is_none());
    }

    #[test]
    fn supply_drop_on_empty_section_finalizes_one_card_with_a_fresh_id() {
        let sections = board();
        let active = supply_drag("supply-1-0", "Item 1");
        let hovered = on_drag_over(&sections, &active, "section-a").expect("preview");
        let next = on_drag_end(&hovered, &active, Some("section-a"), || "card-1".into())
            .expect("finalize");
        assert_eq!(next[0].cards.len(), 1);
        let placed = &next[0].cards[0];
        assert!(!placed.preview);
        assert_eq!(placed.id, "card-1");
        assert_ne!(placed.id, active.id);
        assert_eq!(placed.content, "Item 1");
    }

    #[test]
    fn supply_drop_over_a_card_inserts_rather_than_replaces() {
        let mut sections = board();
        sections[1].cards = vec![card("p", "P"), card("q", "Q"), card("r", "R")];
        let active = supply_drag("supply-1-0", "Item 1");
        let next = on_drag_end(&sections, &active, Some("q"), || "card-1".into())
            .expect("finalize at index 1");
        let ids: Vec<&str> = next[1].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["p", "card-1", "q", "r"]);
    }

    #[test]
    fn supply_drop_over_own_preview_lands_at_the_preview_slot() {
        let mut sections = board();
        sections[1].cards = vec![card("p", "P"), card("q", "Q")];
        let active = supply_drag("supply-1-0", "Item 1");
        let hovered = on_drag_over(&sections, &active, "q").expect("preview at 1");
        let next = on_drag_end(&hovered, &active, Some("supply-1-0"), || "card-1".into())
            .expect("finalize");
        let ids: Vec<&str> = next[1].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["p", "card-1", "q"]);
        assert_no_duplicates(&next);
    }

    #[test]
    fn supply_drop_outside_every_zone_only_clears_previews() {
        let sections = board();
        let active = supply_drag("supply-1-0", "Item 1");
        // No preview present: a clean no-op
        assert!(on_drag_end(&sections, &active, None, || "card-1".into()).is_none());
        // Stale preview present: it is purged, nothing else changes
        let hovered = on_drag_over(&sections, &active, "section-b").expect("preview");
        let next = on_drag_end(&hovered, &active, None, || "card-1".into()).expect("purge");
        assert_eq!(next, sections);
    }

    #[test]
    fn placed_drop_moves_between_sections_at_the_hovered_index() {
        let mut sections = board();
        sections[0].cards = vec![card("w", "W"), card("x", "X"), card("i", "I"), card("y", "Y")];
        sections[1].cards = vec![card("p", "P"), card("q", "Q"), card("r", "R")];
        let active = placed_drag("i");
        let next = on_drag_end(&sections, &active, Some("q"), || unreachable!())
            .expect("cross-section move");
        let a_ids: Vec<&str> = next[0].cards.iter().map(|c| c.id.as_str()).collect();
        let b_ids: Vec<&str> = next[1].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(a_ids, ["w", "x", "y"]);
        assert_eq!(b_ids, ["p", "i", "q", "r"]);
        assert_no_duplicates(&next);
    }

    #[test]
    fn placed_drop_reorders_within_a_single_section() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X"), card("y", "Y"), card("z", "Z")];
        let active = placed_drag("x");
        let next =
            on_drag_end(&sections, &active, Some("z"), || unreachable!()).expect("reorder");
        let ids: Vec<&str> = next[0].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["y", "z", "x"]);
        // Untouched sections compare equal
        assert_eq!(next[1], sections[1]);
        assert_eq!(next[2], sections[2]);
    }

    #[test]
    fn placed_drop_on_a_zone_appends_to_that_section() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X")];
        sections[2].cards = vec![card("m", "M")];
        let active = placed_drag("x");
        let next =
            on_drag_end(&sections, &active, Some("section-c"), || unreachable!()).expect("move");
        assert!(next[0].cards.is_empty());
        let c_ids: Vec<&str> = next[2].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(c_ids, ["m", "x"]);
    }

    #[test]
    fn placed_drop_with_unresolvable_target_is_a_no_op() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X")];
        assert!(on_drag_end(&sections, &placed_drag("x"), None, || unreachable!()).is_none());
        assert!(
            on_drag_end(&sections, &placed_drag("x"), Some("nowhere"), || unreachable!())
                .is_none()
        );
        assert!(
            on_drag_end(&sections, &placed_drag("ghost"), Some("x"), || unreachable!()).is_none()
        );
    }

    #[test]
    fn preview_content_resolves_for_both_drag_kinds() {
        let mut sections = board();
        sections[1].cards = vec![card("x", "Placed content")];
        assert_eq!(
            preview_content(&sections, &supply_drag("supply-1-0", "Pool content")),
            Some("Pool content".into())
        );
        assert_eq!(
            preview_content(&sections, &placed_drag("x")),
            Some("Placed content".into())
        );
        assert_eq!(preview_content(&sections, &placed_drag("ghost")), None);
    }

    #[test]
    fn full_gesture_sequence_never_duplicates_an_id() {
        let mut sections = board();
        sections[0].cards = vec![card("x", "X")];
        let supply = supply_drag("supply-1-0", "Item 1");
        let mut current = sections;
        for over in ["section-a", "x", "section-b", "supply-1-0", "section-b"] {
            if let Some(next) = on_drag_over(&current, &supply, over) {
                assert_no_duplicates(&next);
                current = next;
            }
        }
        let done = on_drag_end(&current, &supply, Some("section-b"), || "card-9".into())
            .expect("finalize");
        assert_no_duplicates(&done);
        assert!(done.iter().flat_map(|s| s.cards.iter()).all(|c| !c.preview));
    }
}
