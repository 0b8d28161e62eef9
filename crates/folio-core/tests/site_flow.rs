use folio_core::contact::{ContactForm, SubmitDecision};
use folio_core::draft::{Draft, InMemoryDraftStore};
use folio_core::nav::{FocusableElementFinder, MenuSurface, NavController, NavKey};
use folio_core::page::PageInfo;
use folio_core::validation::FormStatus;
use folio_core::SiteConfig;
use std::cell::Cell;

fn page(path: &str, config: &SiteConfig) -> PageInfo {
    PageInfo::from_pathname(path, &config.index_page)
}

#[test]
fn draft_survives_reload_field_for_field() {
    let config = SiteConfig::default();
    let store = InMemoryDraftStore::default();

    let mut first_visit = ContactForm::new(&store, config.draft_key.clone());
    assert_eq!(first_visit.restore(&page("/a-propos.html", &config), &config.confirmation_page), None);
    first_visit.on_change(&Draft::snapshot("Jo", "j@e.com", "Hi", "Hey"));

    let second_visit = ContactForm::new(&store, config.draft_key.clone());
    let restored = second_visit
        .restore(&page("/a-propos.html", &config), &config.confirmation_page)
        .expect("draft should be restored");
    assert_eq!(restored.nom, "Jo");
    assert_eq!(restored.email, "j@e.com");
    assert_eq!(restored.sujet, "Hi");
    assert_eq!(restored.message, "Hey");
}

#[test]
fn send_then_confirmation_clears_draft() {
    let config = SiteConfig::default();
    let store = InMemoryDraftStore::default();
    let draft = Draft::snapshot("Jo", "j@e.com", "Hi", "Hey");

    let mut form = ContactForm::new(&store, config.draft_key.clone());
    form.refresh(&Draft::default());
    assert_eq!(form.status(), FormStatus::Incomplete);
    form.on_change(&draft);
    assert_eq!(form.on_submit(&draft), SubmitDecision::Proceed);
    assert!(store.get(&config.draft_key).is_some());

    let landing = ContactForm::new(&store, config.draft_key.clone());
    assert_eq!(landing.restore(&page("/contact.html", &config), &config.confirmation_page), None);
    assert_eq!(store.get(&config.draft_key), None);
}

#[test]
fn each_valid_submit_proceeds_on_its_own() {
    let config = SiteConfig::default();
    let mut form = ContactForm::new(InMemoryDraftStore::default(), config.draft_key);
    let draft = Draft::snapshot("Jo", "j@e.com", "Hi", "Hey");

    for attempt in 1..=2 {
        assert_eq!(form.on_submit(&draft), SubmitDecision::Proceed, "attempt {attempt}");
        assert_eq!(form.status(), FormStatus::Sending, "attempt {attempt}");
    }
}

#[test]
fn every_submit_with_an_empty_field_is_blocked() {
    let config = SiteConfig::default();
    let mut form = ContactForm::new(InMemoryDraftStore::default(), config.draft_key);
    let full = ["Jo", "j@e.com", "Hi", "Hey"];

    for empty in 0..full.len() {
        let mut fields = full;
        fields[empty] = "   ";
        let draft = Draft::snapshot(fields[0], fields[1], fields[2], fields[3]);
        assert_eq!(
            form.on_submit(&draft),
            SubmitDecision::Block(FormStatus::Incomplete),
            "field {empty} left empty"
        );
    }
}

/// Menu surface that records rendered state next to the controller.
struct RecordingMenu {
    expanded: Cell<bool>,
    scroll_locked: Cell<bool>,
    active: Cell<Option<u8>>,
}

impl FocusableElementFinder for RecordingMenu {
    type Element = u8;

    fn focusable_in_menu(&self) -> Vec<u8> {
        vec![1, 2, 3]
    }

    fn active_element(&self) -> Option<u8> {
        self.active.get()
    }
}

impl MenuSurface for RecordingMenu {
    fn render(&self, open: bool) {
        self.expanded.set(open);
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.scroll_locked.set(locked);
    }

    fn focus(&self, element: &u8) -> bool {
        self.active.set(Some(*element));
        true
    }

    fn focus_toggle(&self) {
        self.active.set(Some(0));
    }

    fn focus_first_link_next_frame(&self) {
        self.active.set(Some(1));
    }
}

#[derive(Clone, Copy, Debug)]
enum Trigger {
    Toggle,
    OutsideClick,
    Escape,
    Resize(f64),
    HashChange,
    LinkClick,
}

#[test]
fn rendered_state_tracks_flag_for_any_trigger_sequence() {
    let triggers = [
        Trigger::Toggle,
        Trigger::OutsideClick,
        Trigger::Escape,
        Trigger::Resize(1024.0),
        Trigger::Resize(480.0),
        Trigger::HashChange,
        Trigger::LinkClick,
    ];

    // All sequences of length 3 over the trigger set.
    for a in triggers {
        for b in triggers {
            for c in triggers {
                let surface = RecordingMenu {
                    expanded: Cell::new(true),
                    scroll_locked: Cell::new(false),
                    active: Cell::new(Some(42)),
                };
                let mut nav = NavController::new(surface, 720.0);

                for trigger in [a, b, c] {
                    let was_open = nav.is_open();
                    match trigger {
                        Trigger::Toggle => nav.toggle(),
                        Trigger::OutsideClick => nav.on_document_click(false),
                        Trigger::Escape => {
                            nav.on_key(NavKey::Escape);
                        }
                        Trigger::Resize(width) => nav.on_resize(width),
                        Trigger::HashChange => nav.on_hash_change(),
                        Trigger::LinkClick => nav.on_menu_click(true),
                    }

                    let surface = nav.surface();
                    assert_eq!(surface.expanded.get(), nav.is_open(), "{a:?} {b:?} {c:?}");
                    assert_eq!(surface.scroll_locked.get(), nav.is_open());
                    if was_open && !nav.is_open() {
                        assert_eq!(surface.active.get(), Some(42), "focus restored after {trigger:?}");
                    }
                }
            }
        }
    }
}
