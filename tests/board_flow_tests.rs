//! Scenario tests driving the board reducer end to end, the way a host does.

use pictocomm::board::{reduce, BoardEvent, BoardState, Effect, Filter};
use pictocomm::models::Category;

mod fixtures;
use fixtures::{pict, test_catalog};

fn board() -> BoardState {
    BoardState::new(test_catalog(), 20)
}

fn tap(state: BoardState, id: &str) -> (BoardState, Option<Effect>) {
    let pictogram = state
        .catalog
        .get(id)
        .cloned()
        .expect("tapped pictogram must exist in the catalog");
    reduce(state, BoardEvent::TileTapped(pictogram))
}

#[test]
fn test_compose_save_and_start_over() {
    let state = board();

    let (state, _) = tap(state, "1"); // Yo
    let (state, _) = tap(state, "9"); // Quiero
    let (state, _) = tap(state, "21"); // Helado
    assert_eq!(state.sentence.display_text(), "Yo Quiero Helado");
    assert_eq!(state.filter, Filter::Category(Category::Time));

    let (state, effect) = reduce(state, BoardEvent::SaveRequested);
    assert_eq!(
        effect,
        Some(Effect::SentenceSaved {
            pictogram_ids: vec!["1".into(), "9".into(), "21".into()],
            text: "Yo Quiero Helado".into(),
        })
    );

    // The board is ready for the next sentence.
    assert!(state.sentence.is_empty());
    assert_eq!(state.filter, Filter::MostUsed);
    assert_eq!(state.available.len(), test_catalog().len());
}

#[test]
fn test_emotion_sentence_leaves_view_in_place() {
    let state = board();
    let (state, _) = tap(state, "1"); // Yo -> suggests ACTION
    assert_eq!(state.filter, Filter::Category(Category::Action));

    // The user overrides the suggestion and picks a quality instead.
    let (state, _) = reduce(state, BoardEvent::CategoryChosen(Some(Category::Quality)));
    let (state, _) = tap(state, "34"); // Feliz -> explicit no-op
    assert_eq!(state.filter, Filter::Category(Category::Quality));
    assert_eq!(state.sentence.display_text(), "Yo Feliz");
}

#[test]
fn test_edit_mid_sentence_then_continue() {
    let state = board();
    let (state, _) = tap(state, "1"); // Yo
    let (state, _) = tap(state, "14"); // Comer -> lexicon suggests THING
    assert_eq!(state.filter, Filter::Category(Category::Thing));

    // Removing the first token keeps both the filter and the remaining token.
    let (state, _) = reduce(state, BoardEvent::RemoveTapped { index: 0 });
    assert_eq!(state.sentence.display_text(), "Comer");
    assert_eq!(state.filter, Filter::Category(Category::Thing));

    let (state, _) = tap(state, "22"); // Agua
    assert_eq!(state.sentence.display_text(), "Comer Agua");
    assert_eq!(state.filter, Filter::Category(Category::Time));
}

#[test]
fn test_favorite_toggle_survives_catalog_replacement() {
    let state = board();
    let (state, effect) = reduce(state, BoardEvent::TileLongPressed { id: "40".into() });
    assert_eq!(
        effect,
        Some(Effect::FavoriteChanged {
            id: "40".into(),
            favorite: true
        })
    );

    // Simulate the store echoing the persisted catalog back.
    let mut fresh = test_catalog();
    for p in &mut fresh {
        if p.id == "40" {
            p.favorite = true;
        }
    }
    let (state, _) = reduce(state, BoardEvent::CatalogReplaced(fresh));

    let (state, _) = reduce(state, BoardEvent::FavoritesChosen);
    let texts: Vec<_> = state.available.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["Casa"]);
}

#[test]
fn test_default_view_pages_but_category_views_do_not() {
    let mut entries = test_catalog();
    for i in 0..30 {
        entries.push(pict(&format!("x{i}"), &format!("Cosa{i}"), Category::Thing));
    }
    let state = BoardState::new(entries, 20);
    assert_eq!(state.available.len(), 20);

    let (state, _) = reduce(state, BoardEvent::CategoryChosen(Some(Category::Thing)));
    assert_eq!(state.available.len(), 32);
}

#[test]
fn test_rejected_save_keeps_the_sentence() {
    let state = board();
    let (state, _) = tap(state, "1");
    let (state, effect) = reduce(state, BoardEvent::SaveRequested);
    assert_eq!(effect, Some(Effect::SaveRejected));
    assert_eq!(state.sentence.display_text(), "Yo");
    // The view the user was working in is untouched.
    assert_eq!(state.filter, Filter::Category(Category::Action));
}
