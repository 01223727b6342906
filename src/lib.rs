#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod install;
pub mod interactive;
pub mod lock;
pub mod logging;
pub mod path_utils;

#[cfg(test)]
pub mod test_utils;

pub fn init_locale() {
    let locale = std::env::var(config::ENV_LANG)
        .ok()
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(&locale);
}
