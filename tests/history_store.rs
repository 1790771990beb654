use rag_core::history::{History, Role, Turn};

fn history_of(pairs: usize) -> History {
    let mut history = History::new();
    for i in 0..pairs {
        history.append(Turn::new(Role::Human, format!("q{i}")));
        history.append(Turn::new(Role::Assistant, format!("a{i}")));
    }
    history
}

#[test]
fn invariant_window_is_most_recent_suffix_of_expected_size() {
    for pairs in 0..6 {
        let history = history_of(pairs);
        for max_turns in 0..6 {
            let window = history.recent_window(max_turns);

            let expected = (2 * max_turns).min(history.len());
            assert_eq!(window.len(), expected, "pairs={pairs} max_turns={max_turns}");
            assert_eq!(
                window,
                &history.turns()[history.len() - expected..],
                "window must be the most recent suffix"
            );
        }
    }
}

#[test]
fn test_window_preserves_chronological_order() {
    let history = history_of(4);
    let window = history.recent_window(2);

    assert_eq!(window.len(), 4);
    assert_eq!(window[0].content, "q2");
    assert_eq!(window[1].content, "a2");
    assert_eq!(window[2].content, "q3");
    assert_eq!(window[3].content, "a3");
}

#[test]
fn test_window_larger_than_history_returns_everything() {
    let history = history_of(1);
    let window = history.recent_window(10);

    assert_eq!(window.len(), 2);
    assert_eq!(window[0].role, Role::Human);
    assert_eq!(window[1].role, Role::Assistant);
}

#[test]
fn test_zero_max_turns_returns_empty_window() {
    let history = history_of(3);
    assert!(history.recent_window(0).is_empty());
}

#[test]
fn test_window_does_not_mutate_history() {
    let history = history_of(2);
    let before: Vec<String> = history.turns().iter().map(|t| t.content.clone()).collect();

    let _ = history.recent_window(1);
    let _ = history.recent_window(0);

    let after: Vec<String> = history.turns().iter().map(|t| t.content.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_append_preserves_insertion_order_without_dedup() {
    let mut history = History::new();
    history.append(Turn::new(Role::Human, "same"));
    history.append(Turn::new(Role::Human, "same"));

    assert_eq!(history.len(), 2);
    assert_eq!(history.turns()[0].content, "same");
    assert_eq!(history.turns()[1].content, "same");
}

#[test]
fn test_clear_empties_history_for_subsequent_reads() {
    // A cleared history serves an empty window no matter what came before.
    let mut history = history_of(5);
    assert!(!history.is_empty());

    history.clear();

    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert!(history.recent_window(3).is_empty());
}

#[test]
fn test_role_display_names() {
    assert_eq!(Role::Human.display_name(), "User");
    assert_eq!(Role::Assistant.display_name(), "Assistant");
}
