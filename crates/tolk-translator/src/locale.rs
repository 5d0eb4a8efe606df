//! Host locale codes mapped to Google Translate language codes.
//!
//! See <https://cloud.google.com/translate/docs/languages>.

const LOCALE_MAPPING: &[(&str, &str)] = &[
    ("en", "en"),
    ("en_GB", "en"),
    ("en_US", "en"),
    ("ar", "ar"),
    ("bg", "bg"),
    ("bs_BA", "bs"),
    ("ca", "ca"),
    ("cs", "cs"),
    ("da", "da"),
    ("de", "de"),
    ("el", "el"),
    ("es", "es"),
    ("et", "et"),
    ("fi", "fi"),
    ("fr", "fr"),
    ("he", "iw"),
    ("hr", "hr"),
    ("hu", "hu"),
    ("hy", "hy"),
    ("id", "id"),
    ("it", "it"),
    ("ja", "ja"),
    ("ka", "ka"),
    ("kk", "kk"),
    ("ko", "ko"),
    ("ky", "ky"),
    ("lv", "lv"),
    ("mk", "mk"),
    ("nl", "nl"),
    ("pt", "pt"),
    ("ro", "ro"),
    ("ru", "ru"),
    ("sk", "sk"),
    ("sl", "sl"),
    ("sq", "sq"),
    ("sr", "sr"),
    ("sv", "sv"),
    ("tg", "tg"),
    ("te", "te"),
    ("th", "th"),
    ("uk", "uk"),
    ("uz", "uz"),
    ("zh_CN", "zh-CN"),
    ("zh_TW", "zh-TW"),
    ("tr_TR", "tr"),
    ("pt_BR", "pt"),
    ("pl_PL", "pl"),
    ("no_NO", "no"),
    ("nb_NO", "no"),
    ("fa_IR", "fa"),
];

/// Provider code for a host locale, `None` when translation into it is not possible
pub fn map_locale(host: &str) -> Option<&'static str> {
    LOCALE_MAPPING
        .iter()
        .find(|(locale, _)| *locale == host)
        .map(|(_, provider)| *provider)
}

/// All `(host, provider)` pairs in table order
pub fn supported_locales() -> impl Iterator<Item = (&'static str, &'static str)> {
    LOCALE_MAPPING.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_locales_collapse() {
        assert_eq!(map_locale("pt_BR"), Some("pt"));
        assert_eq!(map_locale("nb_NO"), Some("no"));
        assert_eq!(map_locale("en_GB"), Some("en"));
    }

    #[test]
    fn test_chinese_keeps_script() {
        assert_eq!(map_locale("zh_CN"), Some("zh-CN"));
        assert_eq!(map_locale("zh_TW"), Some("zh-TW"));
    }

    #[test]
    fn test_hebrew_uses_legacy_code() {
        assert_eq!(map_locale("he"), Some("iw"));
    }

    #[test]
    fn test_unknown_locales() {
        assert_eq!(map_locale("xx"), None);
        assert_eq!(map_locale("zh-CN"), None);
        assert_eq!(map_locale("EN"), None);
    }

    #[test]
    fn test_host_codes_are_unique() {
        let mut hosts: Vec<_> = supported_locales().map(|(host, _)| host).collect();
        let total = hosts.len();
        hosts.sort_unstable();
        hosts.dedup();
        assert_eq!(hosts.len(), total);
    }
}
