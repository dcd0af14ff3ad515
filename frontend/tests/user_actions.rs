use common::events::{InboundEvent, OutboundEvent};
use common::model::checklist::{ChecklistEntry, SidebarData, SidebarUpdate};
use common::model::settings::Settings;
use frontend::config::DashboardConfig;
use frontend::dashboard::book_list::ADD_LABEL;
use frontend::dashboard::gate::{GateState, RequestKind};
use frontend::dashboard::preferences::{Theme, ThemePreference};
use frontend::dashboard::settings::SettingsField;
use frontend::dashboard::{Dashboard, Effect, Intent, CONNECTION_LOST, RELOAD_HINT};
use frontend::storage::{MemoryStore, PreferenceStore};
use serde_json::json;

fn offline() -> Dashboard {
    Dashboard::new(&DashboardConfig::default(), ThemePreference::default())
}

fn connected() -> Dashboard {
    let mut dashboard = offline();
    dashboard.on_connected();
    dashboard
}

fn emitted(effects: &[Effect]) -> Vec<&OutboundEvent> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Emit(event) => Some(event),
            _ => None,
        })
        .collect()
}

fn sidebar_update(running: bool, entries: Vec<ChecklistEntry>) -> InboundEvent {
    InboundEvent::SidebarUpdate(SidebarUpdate {
        status: "Success".to_string(),
        code: None,
        data: Some(SidebarData::Entries(entries)),
        running,
    })
}

fn with_one_book() -> Dashboard {
    let mut dashboard = connected();
    let books = InboundEvent::decode(
        "more_books_loaded",
        vec![json!([{"Name": "Piranesi", "Author": "Susanna Clarke"}])],
    )
    .unwrap();
    dashboard.apply(books, 0.0);
    dashboard
}

#[test]
fn load_more_is_gated_for_one_second() {
    let mut dashboard = connected();

    let effects = dashboard.handle(Intent::LoadMore, 0.0);
    assert_eq!(
        effects,
        vec![
            Effect::Emit(OutboundEvent::LoadMoreBooks),
            Effect::ReleaseGateAfter {
                kind: RequestKind::LoadMore,
                until_ms: 1000.0,
                delay_ms: 1000,
            },
        ]
    );

    assert!(dashboard.handle(Intent::LoadMore, 500.0).is_empty());
    assert!(dashboard.handle(Intent::LoadMore, 999.0).is_empty());

    dashboard.handle(
        Intent::ReleaseGate {
            kind: RequestKind::LoadMore,
            until_ms: 1000.0,
        },
        1000.0,
    );
    let effects = dashboard.handle(Intent::LoadMore, 1000.0);
    assert_eq!(emitted(&effects), vec![&OutboundEvent::LoadMoreBooks]);
}

#[test]
fn stale_release_does_not_reopen_a_newer_window() {
    let mut dashboard = connected();
    dashboard.handle(Intent::LoadMore, 0.0);
    // deadline passed without the release timer firing yet
    dashboard.handle(Intent::LoadMore, 1500.0);

    dashboard.handle(
        Intent::ReleaseGate {
            kind: RequestKind::LoadMore,
            until_ms: 1000.0,
        },
        1600.0,
    );
    assert!(!dashboard.gates().get(RequestKind::LoadMore).is_idle(1600.0));
    assert!(dashboard.handle(Intent::LoadMore, 1700.0).is_empty());
}

#[test]
fn load_more_offline_is_silent() {
    let mut dashboard = offline();
    assert!(dashboard.handle(Intent::LoadMore, 0.0).is_empty());
    assert!(dashboard.toasts().toasts().is_empty());
}

#[test]
fn overview_request_busies_buttons_until_release() {
    let mut dashboard = with_one_book();

    let effects = dashboard.handle(Intent::RequestOverview(0), 100.0);
    assert!(matches!(
        emitted(&effects).as_slice(),
        [OutboundEvent::FetchOverview(book)] if book.name == "Piranesi"
    ));
    assert!(effects.contains(&Effect::ReleaseGateAfter {
        kind: RequestKind::Overview,
        until_ms: 2100.0,
        delay_ms: 2000,
    }));
    assert!(!dashboard.books().card(0).unwrap().overview_enabled());
    assert!(dashboard.handle(Intent::RequestOverview(0), 200.0).is_empty());

    dashboard.handle(
        Intent::ReleaseGate {
            kind: RequestKind::Overview,
            until_ms: 2100.0,
        },
        2100.0,
    );
    assert!(dashboard.books().card(0).unwrap().overview_enabled());
}

#[test]
fn overview_and_load_more_gates_are_independent() {
    let mut dashboard = with_one_book();
    dashboard.handle(Intent::RequestOverview(0), 0.0);
    let effects = dashboard.handle(Intent::LoadMore, 10.0);
    assert_eq!(emitted(&effects), vec![&OutboundEvent::LoadMoreBooks]);
}

#[test]
fn start_sends_selected_names_then_asks_for_confirmation() {
    let mut dashboard = connected();
    dashboard.apply(
        sidebar_update(
            false,
            vec![
                ChecklistEntry::new("Susanna Clarke - Piranesi", true),
                ChecklistEntry::new("Hilary Mantel - Wolf Hall", false),
            ],
        ),
        0.0,
    );

    let effects = dashboard.handle(Intent::ToggleRun, 10.0);
    assert_eq!(
        emitted(&effects),
        vec![
            &OutboundEvent::StartRun(vec!["Susanna Clarke - Piranesi".to_string()]),
            &OutboundEvent::SidebarOpened,
        ]
    );

    // nothing is confirmed yet: the run is not considered started
    assert!(!dashboard.run().is_running());
    assert_eq!(dashboard.run().button_label(), "Starting...");
    assert!(!dashboard.run_button_enabled());
    assert!(!dashboard.checklist_enabled());
    assert!(dashboard.handle(Intent::ToggleRun, 20.0).is_empty());

    dashboard.apply(sidebar_update(true, Vec::new()), 30.0);
    assert!(dashboard.run().is_running());
    assert_eq!(dashboard.run().button_label(), "Stop");
    assert_eq!(dashboard.run().button_class(), "btn-warning");
    assert!(dashboard.run_button_enabled());
    assert!(!dashboard.refresh_enabled());

    let effects = dashboard.handle(Intent::ToggleRun, 40.0);
    assert_eq!(
        emitted(&effects),
        vec![&OutboundEvent::StopRun, &OutboundEvent::SidebarOpened]
    );
    dashboard.apply(sidebar_update(false, Vec::new()), 50.0);
    assert_eq!(dashboard.run().button_label(), "Start");
    assert_eq!(dashboard.run().button_class(), "btn-success");
    assert!(dashboard.refresh_enabled());
}

#[test]
fn early_reply_to_start_asks_again_instead_of_unlocking() {
    let mut dashboard = connected();
    dashboard.apply(
        sidebar_update(false, vec![ChecklistEntry::new("Susanna Clarke - Piranesi", true)]),
        0.0,
    );
    dashboard.handle(Intent::ToggleRun, 10.0);

    // answered before the server flipped its running flag
    let effects = dashboard.apply(sidebar_update(false, Vec::new()), 20.0);
    assert_eq!(emitted(&effects), vec![&OutboundEvent::SidebarOpened]);
    assert!(!dashboard.run().is_running());
    assert_eq!(dashboard.run().button_label(), "Starting...");
    assert!(!dashboard.run_button_enabled());
    assert!(!dashboard.checklist_enabled());

    let effects = dashboard.apply(sidebar_update(true, Vec::new()), 30.0);
    assert!(emitted(&effects).is_empty());
    assert!(dashboard.run().is_running());
    assert_eq!(dashboard.run().button_label(), "Stop");
}

#[test]
fn early_reply_to_stop_keeps_the_run_locked() {
    let mut dashboard = connected();
    dashboard.handle(Intent::ToggleRun, 0.0);
    dashboard.apply(sidebar_update(true, Vec::new()), 10.0);
    dashboard.handle(Intent::ToggleRun, 20.0);

    let effects = dashboard.apply(sidebar_update(true, Vec::new()), 30.0);
    assert_eq!(emitted(&effects), vec![&OutboundEvent::SidebarOpened]);
    assert_eq!(dashboard.run().button_label(), "Stopping...");

    dashboard.apply(sidebar_update(false, Vec::new()), 40.0);
    assert_eq!(dashboard.run().button_label(), "Start");
    assert!(dashboard.checklist_enabled());
}

#[test]
fn refused_start_leaves_the_run_stopped() {
    let mut dashboard = connected();
    dashboard.handle(Intent::ToggleRun, 0.0);
    let refusal = InboundEvent::decode(
        "readarr_sidebar_update",
        vec![json!({"Status": "Error", "Code": "No books selected", "Data": [], "Running": false})],
    )
    .unwrap();
    let effects = dashboard.apply(refusal, 10.0);
    assert!(emitted(&effects).is_empty());
    assert!(!dashboard.run().is_running());
    assert!(dashboard.run_button_enabled());
    assert_eq!(dashboard.checklist().status_text(), "No books selected");
}

#[test]
fn checklist_is_frozen_while_running() {
    let mut dashboard = connected();
    dashboard.apply(
        sidebar_update(true, vec![ChecklistEntry::new("Susanna Clarke - Piranesi", true)]),
        0.0,
    );
    dashboard.handle(Intent::ToggleEntry { index: 0, checked: false }, 1.0);
    dashboard.handle(Intent::SetAllEntries(false), 2.0);
    assert!(dashboard.checklist().entries()[0].checked);
    assert!(dashboard.handle(Intent::RequestBookList, 3.0).is_empty());
}

#[test]
fn select_all_broadcasts_to_every_entry() {
    let mut dashboard = connected();
    dashboard.apply(
        sidebar_update(
            false,
            vec![
                ChecklistEntry::new("Susanna Clarke - Piranesi", true),
                ChecklistEntry::new("Hilary Mantel - Wolf Hall", false),
            ],
        ),
        0.0,
    );
    dashboard.handle(Intent::SetAllEntries(true), 1.0);
    assert!(dashboard.checklist().entries().iter().all(|entry| entry.checked));
    dashboard.handle(Intent::SetAllEntries(false), 2.0);
    assert!(dashboard.checklist().selected_names().is_empty());
}

#[test]
fn every_emit_while_offline_becomes_a_reload_toast() {
    let intents = [
        Intent::RequestBookList,
        Intent::AddBook(0),
        Intent::RequestOverview(0),
        Intent::ToggleRun,
        Intent::OpenSidebar,
        Intent::OpenSettings,
        Intent::SaveSettings,
    ];
    for intent in intents {
        let mut dashboard = with_one_book();
        dashboard.apply(InboundEvent::Disconnected, 5.0);
        let effects = dashboard.handle(intent.clone(), 10.0);

        assert!(emitted(&effects).is_empty(), "{intent:?} emitted while offline");
        let toast = dashboard.toasts().toasts().last().unwrap();
        assert_eq!(toast.title, CONNECTION_LOST);
        assert_eq!(toast.message, RELOAD_HINT);
        assert!(!toast.sticky);

        let card = dashboard.books().card(0).unwrap();
        assert_eq!(card.action_label(), ADD_LABEL, "{intent:?} locked the add button");
        assert!(card.action_enabled());
        assert!(card.overview_enabled());
        assert!(dashboard.gates().get(RequestKind::Overview).is_idle(10.0));
        assert_eq!(dashboard.gates().get(RequestKind::Overview).state(), GateState::Idle);
    }
}

#[test]
fn open_sidebar_requests_a_status_push() {
    let mut dashboard = connected();
    let effects = dashboard.handle(Intent::OpenSidebar, 0.0);
    assert!(dashboard.sidebar_open());
    assert_eq!(emitted(&effects), vec![&OutboundEvent::SidebarOpened]);
    dashboard.handle(Intent::CloseSidebar, 1.0);
    assert!(!dashboard.sidebar_open());
}

#[test]
fn settings_fill_once_per_open() {
    let mut dashboard = connected();
    let first = Settings {
        readarr_address: "http://192.168.1.2:8787".to_string(),
        readarr_api_key: "abc".to_string(),
        root_folder_path: "/data/media/books".to_string(),
        google_books_api_key: String::new(),
    };
    let second = Settings {
        readarr_address: "http://elsewhere:8787".to_string(),
        ..first.clone()
    };

    let effects = dashboard.handle(Intent::OpenSettings, 0.0);
    assert_eq!(emitted(&effects), vec![&OutboundEvent::LoadSettings]);
    assert_eq!(dashboard.settings().listener_count(), 1);

    dashboard.apply(InboundEvent::SettingsLoaded(first.clone()), 10.0);
    dashboard.apply(InboundEvent::SettingsLoaded(second.clone()), 20.0);
    assert_eq!(dashboard.settings().form(), &first);
    assert_eq!(dashboard.settings().listener_count(), 0);

    // reopening without closing re-arms the one slot
    dashboard.handle(Intent::OpenSettings, 30.0);
    dashboard.handle(Intent::OpenSettings, 40.0);
    assert_eq!(dashboard.settings().listener_count(), 1);
    dashboard.apply(InboundEvent::SettingsLoaded(second.clone()), 50.0);
    assert_eq!(dashboard.settings().form(), &second);
}

#[test]
fn settings_after_close_are_dropped() {
    let mut dashboard = connected();
    dashboard.handle(Intent::OpenSettings, 0.0);
    dashboard.handle(Intent::CloseSettings, 1.0);
    dashboard.apply(
        InboundEvent::SettingsLoaded(Settings {
            readarr_api_key: "late".to_string(),
            ..Settings::default()
        }),
        2.0,
    );
    assert_eq!(dashboard.settings().form(), &Settings::default());
    assert!(!dashboard.settings().is_open());
}

#[test]
fn save_sends_the_form_and_flashes_a_message() {
    let mut dashboard = connected();
    dashboard.handle(Intent::OpenSettings, 0.0);
    dashboard.handle(
        Intent::EditSettings(SettingsField::RootFolderPath, "/books".to_string()),
        1.0,
    );

    let effects = dashboard.handle(Intent::SaveSettings, 2.0);
    let expected = Settings {
        root_folder_path: "/books".to_string(),
        ..Settings::default()
    };
    assert_eq!(
        effects,
        vec![
            Effect::Emit(OutboundEvent::SaveSettings(expected)),
            Effect::HideSavedAfter {
                generation: 1,
                delay_ms: 1000,
            },
        ]
    );
    assert!(dashboard.settings().saved_visible());
    assert!(dashboard.settings().is_open());

    // a second save restarts the timer; the first one no longer hides
    dashboard.handle(Intent::SaveSettings, 500.0);
    dashboard.handle(Intent::HideSavedMessage(1), 1002.0);
    assert!(dashboard.settings().saved_visible());
    dashboard.handle(Intent::HideSavedMessage(2), 1500.0);
    assert!(!dashboard.settings().saved_visible());
}

#[test]
fn theme_toggle_applies_and_round_trips_through_storage() {
    let store = MemoryStore::new();
    let mut dashboard = Dashboard::new(&DashboardConfig::default(), ThemePreference::load(&store));
    let original = dashboard.theme();

    let effects = dashboard.handle(Intent::ToggleTheme, 0.0);
    let [Effect::ApplyTheme(preference)] = effects.as_slice() else {
        panic!("unexpected effects {effects:?}");
    };
    assert_eq!(preference.theme, Theme::Dark);
    assert!(preference.switch_on);
    preference.save(&store).unwrap();
    assert_eq!(store.read("theme").as_deref(), Some("dark"));
    assert_eq!(store.read("switch-position").as_deref(), Some("true"));

    let effects = dashboard.handle(Intent::ToggleTheme, 1.0);
    let [Effect::ApplyTheme(preference)] = effects.as_slice() else {
        panic!("unexpected effects {effects:?}");
    };
    preference.save(&store).unwrap();
    assert_eq!(dashboard.theme(), original);
    assert_eq!(ThemePreference::load(&store), original);
}

#[test]
fn dismissing_a_sticky_toast_removes_it() {
    let mut dashboard = connected();
    dashboard.apply(InboundEvent::Disconnected, 0.0);
    let id = dashboard.toasts().toasts()[0].id;
    dashboard.handle(Intent::DismissToast(id), 1.0);
    assert!(dashboard.toasts().toasts().is_empty());
}
