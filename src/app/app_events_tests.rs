//! Tests for app event handling

use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::test_utils::test_helpers::{
    TEST_HEIGHT, TEST_WIDTH, key, key_with_mods, left_click, render_app, test_app,
};

#[test]
fn test_clicking_second_example_picks_it_and_quits() {
    let mut app = test_app();
    render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);
    let entry = app.layout_regions.example_entries[1].area;

    app.handle_event(left_click(entry.x + 3, entry.y));

    assert_eq!(app.picked(), Some("What are the coordinates of wellbore 1014?"));
    assert!(app.should_quit());
}

#[test]
fn test_number_key_picks_example() {
    let mut app = test_app();

    app.handle_event(Event::Key(key(KeyCode::Char('1'))));

    assert_eq!(app.picked(), Some("Tell me about wellbore 1007?"));
    assert!(app.should_quit());
}

#[test]
fn test_navigate_then_enter_picks_selected() {
    let mut app = test_app();

    app.handle_event(Event::Key(key(KeyCode::Up)));
    assert!(!app.should_quit());
    app.handle_event(Event::Key(key(KeyCode::Enter)));

    assert_eq!(app.picked(), Some("What is the spud date of wellbore 1014?"));
}

#[test]
fn test_q_quits_without_pick() {
    let mut app = test_app();

    app.handle_event(Event::Key(key(KeyCode::Char('q'))));

    assert!(app.should_quit());
    assert!(app.picked().is_none());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();

    app.handle_event(Event::Key(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)));

    assert!(app.should_quit());
    assert!(app.picked().is_none());
}

#[test]
fn test_esc_clears_selection_before_quitting() {
    let mut app = test_app();
    app.handle_event(Event::Key(key(KeyCode::Down)));

    app.handle_event(Event::Key(key(KeyCode::Esc)));
    assert!(!app.should_quit());
    assert!(app.selection.get_selected().is_none());

    app.handle_event(Event::Key(key(KeyCode::Esc)));
    assert!(app.should_quit());
}

#[test]
fn test_key_release_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('1'));
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));

    assert!(app.picked().is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_click_outside_list_does_nothing() {
    let mut app = test_app();
    render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    app.handle_event(left_click(5, 0));
    app.handle_event(left_click(5, 8));

    assert!(app.picked().is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_take_picked_empties_slot() {
    let mut app = test_app();
    app.handle_event(Event::Key(key(KeyCode::Char('2'))));

    assert_eq!(
        app.take_picked().as_deref(),
        Some("What are the coordinates of wellbore 1014?")
    );
    assert!(app.picked().is_none());
}

#[test]
fn test_resize_event_ignored() {
    let mut app = test_app();

    app.handle_event(Event::Resize(80, 24));

    assert!(!app.should_quit());
}
