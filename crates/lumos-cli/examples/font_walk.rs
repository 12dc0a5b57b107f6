//! Walk every catalog font through a session and print the link set after
//! each change. Useful for checking that font resources never pile up.
//!
//! Usage:
//!   cargo run -p lumos-cli --example font_walk

use std::sync::Arc;

use lumos_core::FontFamily;
use lumos_session::{ConfigStore, LinkRegistry};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let links = Arc::new(LinkRegistry::default());
    let mut store = ConfigStore::new(links.clone())?;

    for family in FontFamily::ALL {
        store.set_font_family(family)?;
        println!("{:<20} held={} {:?}", family.name(), links.held(), links.links());
    }

    println!(
        "acquired={} released={}",
        links.acquired(),
        links.released()
    );
    Ok(())
}
