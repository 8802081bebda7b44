//! Preview binary - renders the switcher for a stored preference value
//! without starting the server.
//!
//! Usage:
//!   cargo run --bin preview                     # No stored preference
//!   cargo run --bin preview -- "/auto/de"       # Preview a stored value
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (defaults to "en")
//! - LANGUAGES_FILE (JSON catalog replacing the built-in set)

use anyhow::Result;

use translate_switcher::config::Config;
use translate_switcher::i18n::{
    load_catalog, MemoryPreferences, NoReload, SelectionStore, PREFERENCE_KEY,
};
use translate_switcher::switcher::{self, SwitcherEntry};

fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    let stored_value: Option<String> = std::env::args().nth(1);

    let config = Config::from_env()?;
    let catalog = load_catalog(&config)?;

    let prefs = match &stored_value {
        Some(value) => MemoryPreferences::with_value(PREFERENCE_KEY, value),
        None => MemoryPreferences::new(),
    };
    let store = SelectionStore::with_catalog(catalog, prefs, NoReload);

    println!();
    println!("Stored preference: {}", stored_value.as_deref().unwrap_or("(none)"));
    println!(
        "Current selection: {}",
        store.current_selection().as_deref().unwrap_or("(no catalog)")
    );
    println!();

    for entry in switcher::entries(&store) {
        match entry {
            SwitcherEntry::Label { title } => println!("  [{}]", title),
            SwitcherEntry::Control { code, title } => println!("   {}  -> {}", title, code),
        }
    }
    println!();

    Ok(())
}
