use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use lumos_core::{DesignConfiguration, Field, FieldValue, FontFamily};
use lumos_session::{ConfigStore, FontHandle, FontLoader, LinkRegistry, SessionError};

fn store() -> (ConfigStore, Arc<LinkRegistry>) {
    let links = Arc::new(LinkRegistry::default());
    let store = ConfigStore::new(links.clone()).expect("session starts");
    (store, links)
}

#[test]
fn starting_a_session_loads_the_default_font() {
    let (store, links) = store();
    assert_eq!(store.config(), &DesignConfiguration::default());
    assert_eq!(links.held(), 1);
    assert_eq!(links.links(), vec!["https://fonts.googleapis.com/css?family=Arial"]);
    assert_eq!(store.font().map(|f| f.family()), Some(FontFamily::Arial));
}

#[test]
fn set_replaces_one_field_and_returns_the_previous_value() {
    let (mut store, _links) = store();
    let previous = store.set(FieldValue::H1Size(6.25)).unwrap();
    assert_eq!(previous, FieldValue::H1Size(5.0));
    assert_eq!(store.get(Field::H1Size), FieldValue::H1Size(6.25));

    let mut expected = DesignConfiguration::default();
    expected.h1_size = 6.25;
    assert_eq!(store.config(), &expected);
}

#[test]
fn set_raw_parses_by_key() {
    let (mut store, _links) = store();
    store.set_raw("letter-spacing", "0.05").unwrap();
    store.set_raw("brandColor", "#000000").unwrap();
    store.set_raw("show-grid-overlay", "on").unwrap();
    assert_eq!(store.config().letter_spacing, 0.05);
    assert_eq!(store.config().brand_color, "#000000");
    assert!(store.config().show_grid_overlay);

    assert!(matches!(
        store.set_raw("h9-size", "1"),
        Err(SessionError::Core(_))
    ));
    assert!(store.set_raw("h1-size", "huge").is_err());
    assert_eq!(store.config().h1_size, 5.0);
}

#[test]
fn out_of_range_values_are_stored() {
    let (mut store, _links) = store();
    store.set(FieldValue::Margin(12.0)).unwrap();
    assert_eq!(store.config().margin, 12.0);
}

#[test]
fn subscribers_see_every_change() {
    let (mut store, _links) = store();
    let seen: Rc<RefCell<Vec<(Field, f64)>>> = Rc::default();

    let sink = Rc::clone(&seen);
    store.subscribe(move |config, field| {
        sink.borrow_mut().push((field, config.h2_size));
    });

    store.set(FieldValue::H2Size(3.0)).unwrap();
    store.set(FieldValue::IsDarkMode(true)).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![(Field::H2Size, 3.0), (Field::IsDarkMode, 3.0)]
    );
}

#[test]
fn changing_font_releases_once_and_acquires_once() {
    let (mut store, links) = store();
    assert_eq!((links.acquired(), links.released()), (1, 0));

    let previous = store.set_font_family(FontFamily::Georgia).unwrap();
    assert_eq!(previous, FontFamily::Arial);
    assert_eq!((links.acquired(), links.released()), (2, 1));
    assert_eq!(links.held(), 1);
    assert_eq!(links.links(), vec!["https://fonts.googleapis.com/css?family=Georgia"]);
}

#[test]
fn setting_the_same_font_does_not_reload() {
    let (mut store, links) = store();
    for _ in 0..5 {
        store.set_font_family(FontFamily::Arial).unwrap();
        assert_eq!(links.held(), 1);
    }
    assert_eq!((links.acquired(), links.released()), (1, 0));

    store.set_font_family(FontFamily::TimesNewRoman).unwrap();
    store.set_font_family(FontFamily::TimesNewRoman).unwrap();
    assert_eq!(links.held(), 1);
    assert_eq!((links.acquired(), links.released()), (2, 1));
    assert_eq!(
        links.links(),
        vec!["https://fonts.googleapis.com/css?family=Times+New+Roman"]
    );
}

#[test]
fn dropping_the_store_releases_the_font() {
    let (mut store, links) = store();
    store.set_font_family(FontFamily::Impact).unwrap();
    drop(store);
    assert_eq!(links.held(), 0);
    assert_eq!(links.acquired(), links.released());
}

#[test]
fn releasing_twice_is_harmless() {
    let links = LinkRegistry::default();
    let handle = links.acquire(FontFamily::Verdana).unwrap();
    links.release(handle);
    links.release(handle);
    links.release(FontHandle(999));
    assert_eq!(links.held(), 0);
    assert_eq!(links.released(), 1);
}

/// Fails every acquisition after the first `allow` succeed.
struct FlakyLoader {
    allow: AtomicU64,
    calls: AtomicU64,
    held: Mutex<Vec<FontHandle>>,
}

impl FlakyLoader {
    fn allowing(allow: u64) -> Arc<Self> {
        Arc::new(Self {
            allow: AtomicU64::new(allow),
            calls: AtomicU64::new(0),
            held: Mutex::new(Vec::new()),
        })
    }
}

impl FontLoader for FlakyLoader {
    fn acquire(&self, family: FontFamily) -> Result<FontHandle, SessionError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n > self.allow.load(Ordering::SeqCst) {
            return Err(SessionError::FontLoad {
                family: family.to_string(),
                reason: "offline".to_string(),
            });
        }
        let handle = FontHandle(n);
        self.held.lock().unwrap().push(handle);
        Ok(handle)
    }

    fn release(&self, handle: FontHandle) {
        self.held.lock().unwrap().retain(|h| *h != handle);
    }
}

#[test]
fn font_load_failures_propagate_after_the_field_changes() {
    let loader = FlakyLoader::allowing(1);
    let mut store = ConfigStore::new(loader.clone()).unwrap();

    let notified = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&notified);
    store.subscribe(move |_, _| *counter.borrow_mut() += 1);

    let err = store.set_font_family(FontFamily::Bookman).unwrap_err();
    assert!(matches!(err, SessionError::FontLoad { .. }));
    assert_eq!(store.config().font_family, FontFamily::Bookman);
    assert_eq!(*notified.borrow(), 1);
    assert!(store.font().is_none());
    assert!(loader.held.lock().unwrap().is_empty());
}

#[test]
fn repeating_the_family_retries_a_failed_font_load() {
    let loader = FlakyLoader::allowing(1);
    let mut store = ConfigStore::new(loader.clone()).unwrap();

    store.set_font_family(FontFamily::Bookman).unwrap_err();
    assert!(store.font().is_none());

    loader.allow.store(u64::MAX, Ordering::SeqCst);
    let previous = store.set_font_family(FontFamily::Bookman).unwrap();
    assert_eq!(previous, FontFamily::Bookman);

    let font = store.font().expect("font reloaded");
    assert_eq!(font.family(), FontFamily::Bookman);
    assert_eq!(*loader.held.lock().unwrap(), vec![font.handle()]);

    // Once loaded, repeating the family is a no-op again.
    store.set_font_family(FontFamily::Bookman).unwrap();
    assert_eq!(loader.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn set_font_family_returns_the_previous_family() {
    let (mut store, _links) = store();
    assert_eq!(store.set_font_family(FontFamily::Georgia).unwrap(), FontFamily::Arial);
    assert_eq!(store.set_font_family(FontFamily::Verdana).unwrap(), FontFamily::Georgia);
}
