use wikicount_core::{update, Msg, RunState};

#[test]
fn update_is_noop() {
    let state = RunState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn article_messages_before_start_are_ignored() {
    let state = RunState::new();
    let (next, effects) = update(state.clone(), Msg::ArticleCounted { index: 0, words: 10 });
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(next, Msg::RunFinished);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
