//! Property-based invariant tests for the showcase modal.
//!
//! Verifies:
//! 1. Opening a known game always lands on index 0 showing the first item
//! 2. next-then-prev and prev-then-next return to the starting index
//! 3. next on the last index wraps to 0, prev on 0 wraps to the last
//! 4. The index stays valid under any sequence of actions
//! 5. Opening an unknown id never changes the state
//! 6. Excerpts keep at most the configured characters plus the marker

use portfolio_fx::showcase::grid::excerpt;
use portfolio_fx::showcase::{
    Catalog, GameRecord, MediaItem, ModalChange, ModalState, Showcase, ShowcaseEvent,
};
use proptest::prelude::*;

fn media(len: usize) -> Vec<MediaItem> {
    (0..len)
        .map(|i| {
            if i % 3 == 1 {
                MediaItem::Video {
                    poster: format!("poster{i}.png"),
                    video_url: format!("https://example.com/embed/{i}"),
                }
            } else {
                MediaItem::Image {
                    src: format!("img{i}.png"),
                }
            }
        })
        .collect()
}

fn catalog(lens: &[usize]) -> Catalog {
    Catalog::from_records(
        lens.iter()
            .enumerate()
            .map(|(i, &len)| GameRecord {
                id: format!("g{i}"),
                title: format!("Game {i}"),
                description: String::new(),
                tags: Vec::new(),
                media: media(len),
                source_url: None,
                play_url: None,
            })
            .collect(),
    )
}

#[derive(Debug, Clone)]
enum Action {
    Open(usize),
    OpenUnknown,
    Select(usize),
    Next,
    Prev,
    Close,
    Backdrop,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..4).prop_map(Action::Open),
        Just(Action::OpenUnknown),
        (0usize..12).prop_map(Action::Select),
        Just(Action::Next),
        Just(Action::Prev),
        Just(Action::Close),
        Just(Action::Backdrop),
    ]
}

proptest! {
    #[test]
    fn open_starts_at_zero(len in 1usize..10, steps in 0usize..20) {
        let catalog = catalog(&[len]);
        let mut modal = ModalState::default();
        modal.open(&catalog, "g0");
        for _ in 0..steps {
            modal.next();
        }
        prop_assert_eq!(modal.open(&catalog, "g0"), ModalChange::Opened);
        let gallery = modal.gallery().unwrap();
        prop_assert_eq!(gallery.index(), 0);
        prop_assert_eq!(gallery.current(), gallery.media().first());
    }

    #[test]
    fn next_prev_round_trip(len in 1usize..10, start in 0usize..10) {
        let catalog = catalog(&[len]);
        let mut modal = ModalState::default();
        modal.open(&catalog, "g0");
        let start = start % len;
        modal.select(start);

        modal.next();
        modal.prev();
        prop_assert_eq!(modal.gallery().unwrap().index(), start);

        modal.prev();
        modal.next();
        prop_assert_eq!(modal.gallery().unwrap().index(), start);
    }

    #[test]
    fn wrap_around(len in 1usize..10) {
        let catalog = catalog(&[len]);
        let mut modal = ModalState::default();
        modal.open(&catalog, "g0");

        modal.prev();
        prop_assert_eq!(modal.gallery().unwrap().index(), len - 1);
        modal.next();
        prop_assert_eq!(modal.gallery().unwrap().index(), 0);
    }

    #[test]
    fn index_always_valid(actions in prop::collection::vec(arb_action(), 0..60)) {
        let mut showcase = Showcase::new(catalog(&[3, 0, 1, 7]));
        for action in actions {
            let before = showcase.modal().clone();
            let change = match action {
                Action::Open(i) => showcase.dispatch(ShowcaseEvent::OpenGame(&format!("g{i}"))),
                Action::OpenUnknown => showcase.dispatch(ShowcaseEvent::OpenGame("missing")),
                Action::Select(i) => showcase.dispatch(ShowcaseEvent::SelectMedia(i)),
                Action::Next => showcase.dispatch(ShowcaseEvent::NextMedia),
                Action::Prev => showcase.dispatch(ShowcaseEvent::PrevMedia),
                Action::Close => showcase.dispatch(ShowcaseEvent::Close),
                Action::Backdrop => showcase.dispatch(ShowcaseEvent::Backdrop),
            };

            if change == ModalChange::Unchanged {
                prop_assert_eq!(showcase.modal(), &before);
            }
            if let Some(gallery) = showcase.modal().gallery() {
                if gallery.media().is_empty() {
                    prop_assert_eq!(gallery.index(), 0);
                } else {
                    prop_assert!(gallery.index() < gallery.media().len());
                }
            }
            prop_assert_eq!(showcase.modal().scroll_locked(), showcase.modal().is_open());
        }
    }

    #[test]
    fn unknown_id_is_noop(id in "[a-z]{1,8}", open_first in any::<bool>()) {
        prop_assume!(!id.starts_with('g'));
        let catalog = catalog(&[2]);
        let mut modal = ModalState::default();
        if open_first {
            modal.open(&catalog, "g0");
            modal.next();
        }
        let before = modal.clone();
        prop_assert_eq!(modal.open(&catalog, &id), ModalChange::Unchanged);
        prop_assert_eq!(modal, before);
    }

    #[test]
    fn excerpt_length(text in "\\PC{0,300}", max in 0usize..150) {
        let out = excerpt(&text, max);
        let kept = text.chars().count().min(max);
        prop_assert_eq!(out.chars().count(), kept + 3);
        prop_assert!(out.ends_with("..."));
        prop_assert!(text.starts_with(&out[..out.len() - 3]));
    }
}
