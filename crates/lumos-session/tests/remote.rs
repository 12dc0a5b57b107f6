use std::sync::Arc;

use lumos_core::FontFamily;
use lumos_session::{ConfigStore, FontLoader, LinkRegistry, RemoteFontLoader};

// Port 9 (discard) refuses connections locally, so the detached prefetch
// fails fast without leaving the machine.
const UNREACHABLE: &str = "http://127.0.0.1:9/css";

#[test]
fn acquisition_does_not_wait_for_the_fetch() {
    let links = Arc::new(LinkRegistry::new(UNREACHABLE));
    let loader = RemoteFontLoader::new(links.clone());

    let handle = loader.acquire(FontFamily::CourierNew).unwrap();
    assert_eq!(
        loader.loaded_stylesheets(),
        vec!["http://127.0.0.1:9/css?family=Courier+New"]
    );

    loader.release(handle);
    assert_eq!(links.held(), 0);
}

#[test]
fn store_drives_the_remote_loader() {
    let links = Arc::new(LinkRegistry::new(UNREACHABLE));
    let loader = Arc::new(RemoteFontLoader::new(links.clone()));
    let mut store = ConfigStore::new(loader).unwrap();

    store.set_font_family(FontFamily::Palatino).unwrap();
    assert_eq!(links.held(), 1);
    assert_eq!(links.acquired(), 2);
    assert_eq!(
        store.loader().loaded_stylesheets(),
        vec!["http://127.0.0.1:9/css?family=Palatino"]
    );
}
