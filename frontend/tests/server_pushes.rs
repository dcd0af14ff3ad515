use common::events::{InboundEvent, OutboundEvent};
use frontend::config::DashboardConfig;
use frontend::dashboard::book_list::{ADDING_LABEL, ADD_LABEL};
use frontend::dashboard::checklist::{FETCHING_TEXT, RETRIEVED_TEXT};
use frontend::dashboard::preferences::ThemePreference;
use frontend::dashboard::{Connection, Dashboard, Effect, Intent, CONNECTION_LOST, RECONNECT_HINT};
use serde_json::{json, Value};

fn connected() -> Dashboard {
    let mut dashboard = Dashboard::new(&DashboardConfig::default(), ThemePreference::default());
    dashboard.on_connected();
    dashboard
}

fn push(dashboard: &mut Dashboard, name: &str, payload: Value, now_ms: f64) -> Vec<Effect> {
    let event = InboundEvent::decode(name, vec![payload]).unwrap();
    dashboard.apply(event, now_ms)
}

fn book(name: &str, status: &str) -> Value {
    json!({
        "Name": name,
        "Author": "Ursula K. Le Guin",
        "Overview": "An envoy on a winter world.",
        "Image_Link": "",
        "Votes": "Votes: 1.2k",
        "Rating": "Rating: 4.1",
        "Published_Date": "1969",
        "Page_Count": 304,
        "Base_Book": "The Dispossessed",
        "Status": status
    })
}

#[test]
fn more_books_appends_once_per_identity() {
    let mut dashboard = connected();
    push(
        &mut dashboard,
        "more_books_loaded",
        json!([book("The Left Hand of Darkness", ""), book("The Lathe of Heaven", "")]),
        0.0,
    );
    push(
        &mut dashboard,
        "more_books_loaded",
        json!([
            book("The Left Hand of Darkness (1969)", ""),
            book("the lathe of heaven", ""),
            book("Always Coming Home", "")
        ]),
        10.0,
    );

    let names: Vec<&str> = dashboard
        .books()
        .cards()
        .iter()
        .map(|card| card.book().name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["The Left Hand of Darkness", "The Lathe of Heaven", "Always Coming Home"]
    );
    let card = dashboard.books().card(0).unwrap();
    assert!(card.book().image_link.is_none());
    assert_eq!(card.book().page_count, "304");
}

#[test]
fn refresh_book_settles_an_add_in_flight() {
    let mut dashboard = connected();
    push(
        &mut dashboard,
        "more_books_loaded",
        json!([book("The Word for World Is Forest", "")]),
        0.0,
    );

    let effects = dashboard.handle(Intent::AddBook(0), 5.0);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Emit(OutboundEvent::AddBook(sent))] if sent.name == "The Word for World Is Forest"
    ));
    assert_eq!(dashboard.books().card(0).unwrap().action_label(), ADDING_LABEL);

    // second click while adding sends nothing
    assert!(dashboard.handle(Intent::AddBook(0), 6.0).is_empty());

    push(
        &mut dashboard,
        "refresh_book",
        book("The Word for World Is Forest", "Failed to Add"),
        50.0,
    );
    let card = dashboard.books().card(0).unwrap();
    assert_eq!(card.action_label(), "Failed to Add");
    assert!(!card.action_enabled());
    assert_eq!(card.tone().body_class(), "status-red");
    assert_eq!(card.tone().button_class(), "btn-danger");
}

#[test]
fn invalid_book_id_is_a_failure_on_both_paths() {
    let mut dashboard = connected();
    push(&mut dashboard, "more_books_loaded", json!([book("Tehanu", "Invalid Book ID")]), 0.0);
    assert_eq!(dashboard.books().card(0).unwrap().tone().body_class(), "status-red");

    push(&mut dashboard, "more_books_loaded", json!([book("Tales from Earthsea", "")]), 0.0);
    assert_eq!(dashboard.books().card(1).unwrap().action_label(), ADD_LABEL);
    push(&mut dashboard, "refresh_book", book("Tales from Earthsea", "Invalid Book ID"), 1.0);
    assert_eq!(dashboard.books().card(1).unwrap().tone().body_class(), "status-red");
}

#[test]
fn success_statuses_share_the_green_presentation() {
    let mut dashboard = connected();
    push(
        &mut dashboard,
        "more_books_loaded",
        json!([
            book("A Wizard of Earthsea", "Added"),
            book("The Farthest Shore", "Already in Readarr"),
        ]),
        0.0,
    );
    for card in dashboard.books().cards() {
        assert_eq!(card.tone().body_class(), "status-green");
        assert_eq!(card.tone().button_class(), "btn-secondary");
        assert!(!card.action_enabled());
    }
}

#[test]
fn refresh_for_unknown_book_is_ignored() {
    let mut dashboard = connected();
    push(&mut dashboard, "more_books_loaded", json!([book("Lavinia", "")]), 0.0);
    let before = dashboard.clone();

    let effects = push(&mut dashboard, "refresh_book", book("Voices", "Added"), 1.0);
    assert!(effects.is_empty());
    assert_eq!(dashboard, before);
}

#[test]
fn clear_empties_the_grid() {
    let mut dashboard = connected();
    push(&mut dashboard, "more_books_loaded", json!([book("Gifts", ""), book("Powers", "")]), 0.0);
    dashboard.apply(InboundEvent::ClearList, 1.0);
    assert!(dashboard.books().is_empty());
}

#[test]
fn sidebar_update_replaces_the_checklist() {
    let mut dashboard = connected();
    dashboard.handle(Intent::RequestBookList, 0.0);
    assert!(dashboard.checklist().is_fetching());
    assert_eq!(dashboard.checklist().status_text(), FETCHING_TEXT);
    assert!(!dashboard.refresh_enabled());

    push(
        &mut dashboard,
        "readarr_sidebar_update",
        json!({
            "Status": "Success",
            "Code": null,
            "Data": [
                {"name": "Ursula K. Le Guin - The Dispossessed", "checked": true},
                {"name": "Ann Leckie - Ancillary Justice", "checked": true}
            ],
            "Running": false
        }),
        20.0,
    );
    let checklist = dashboard.checklist();
    assert!(!checklist.is_fetching());
    assert_eq!(checklist.status_text(), RETRIEVED_TEXT);
    assert_eq!(checklist.entries().len(), 2);
    assert!(checklist.select_all());
    assert!(checklist.select_all_visible());
    assert!(dashboard.refresh_enabled());

    dashboard.handle(Intent::ToggleEntry { index: 1, checked: false }, 30.0);
    assert!(!dashboard.checklist().select_all());
}

#[test]
fn failed_sidebar_update_shows_the_code() {
    let mut dashboard = connected();
    dashboard.handle(Intent::RequestBookList, 0.0);
    push(
        &mut dashboard,
        "readarr_sidebar_update",
        json!({"Status": "Error", "Code": 401, "Data": [], "Running": false}),
        5.0,
    );
    assert_eq!(dashboard.checklist().status_text(), "401");
    assert!(!dashboard.checklist().is_fetching());
}

#[test]
fn server_toast_expires_after_the_configured_duration() {
    let mut dashboard = connected();
    let effects = push(
        &mut dashboard,
        "new_toast_msg",
        json!({"title": "Recommendations", "message": "Finished searching"}),
        100.0,
    );

    let toast = &dashboard.toasts().toasts()[0];
    assert_eq!(toast.title, "Recommendations");
    assert!(!toast.sticky);
    assert_eq!(effects, vec![Effect::ExpireToastAfter { id: toast.id, delay_ms: 5000 }]);

    let id = toast.id;
    dashboard.handle(Intent::ExpireToast(id), 5100.0);
    assert!(dashboard.toasts().toasts().is_empty());
}

#[test]
fn disconnect_posts_one_sticky_toast() {
    let mut dashboard = connected();
    assert!(dashboard.apply(InboundEvent::Disconnected, 0.0).is_empty());
    assert!(dashboard.apply(InboundEvent::Disconnected, 10.0).is_empty());

    assert_eq!(dashboard.connection(), Connection::Lost);
    let toasts = dashboard.toasts().toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, CONNECTION_LOST);
    assert_eq!(toasts[0].message, RECONNECT_HINT);
    assert!(toasts[0].sticky);
}

#[test]
fn overview_opens_the_modal_and_locks_scrolling() {
    let mut dashboard = connected();
    let effects = push(&mut dashboard, "overview", book("The Telling", ""), 0.0);
    assert_eq!(effects, vec![Effect::LockScroll]);
    assert_eq!(dashboard.overview().title(), "Ursula K. Le Guin - The Telling");
    assert_eq!(
        dashboard.overview().lines(),
        vec![
            "An envoy on a winter world.".to_string(),
            "Published Date: 1969".to_string(),
            "Page Count: 304".to_string(),
            "Recommendation from: The Dispossessed".to_string(),
        ]
    );

    // replacing the content of an open modal does not lock twice
    assert!(push(&mut dashboard, "overview", book("Gifts", ""), 1.0).is_empty());

    assert_eq!(dashboard.handle(Intent::CloseOverview, 2.0), vec![Effect::UnlockScroll]);
    assert!(dashboard.handle(Intent::CloseOverview, 3.0).is_empty());
}
