//! Read-side views that swap in cached translations when rendering.
//!
//! Nothing here talks to the provider; views only read what
//! [`tolk_translator::Translator`] already cached on the record.

mod post;
mod topic;

pub use post::PostView;
pub use topic::TopicTitleView;

use tolk_translator::locale::map_locale;

/// Whether text detected as `detected` differs from the reader's locale
pub(crate) fn differs_from_locale(detected: Option<&str>, user_locale: &str) -> bool {
    match (detected, map_locale(user_locale)) {
        (Some(detected), Some(mapped)) => detected != mapped,
        _ => false,
    }
}
