use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A display language the `countries` table carries a name column for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    Ar,
    Cs,
    Da,
    De,
    #[default]
    En,
    Es,
    Fr,
    He,
    It,
    Ja,
    Nl,
    Pt,
    Ru,
    Sk,
    ZhCn,
    ZhHk,
}

impl Language {
    pub const ALL: [Self; 16] = [
        Self::Ar,
        Self::Cs,
        Self::Da,
        Self::De,
        Self::En,
        Self::Es,
        Self::Fr,
        Self::He,
        Self::It,
        Self::Ja,
        Self::Nl,
        Self::Pt,
        Self::Ru,
        Self::Sk,
        Self::ZhCn,
        Self::ZhHk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Cs => "cs",
            Self::Da => "da",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::He => "he",
            Self::It => "it",
            Self::Ja => "ja",
            Self::Nl => "nl",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Sk => "sk",
            Self::ZhCn => "zh-cn",
            Self::ZhHk => "zh-hk",
        }
    }

    /// Name of the `countries` column holding names in this language.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Ar => "country_ar",
            Self::Cs => "country_cs",
            Self::Da => "country_da",
            Self::De => "country_de",
            Self::En => "country_en",
            Self::Es => "country_es",
            Self::Fr => "country_fr",
            Self::He => "country_he",
            Self::It => "country_it",
            Self::Ja => "country_ja",
            Self::Nl => "country_nl",
            Self::Pt => "country_pt",
            Self::Ru => "country_ru",
            Self::Sk => "country_sk",
            Self::ZhCn => "country_zh_cn",
            Self::ZhHk => "country_zh_hk",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_str() == tag)
    }

    /// Validates an optional tag, falling back to English when none is given.
    pub fn resolve(tag: Option<&str>) -> Result<Self> {
        tag.map_or(Ok(Self::default()), parse_language_code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_language_code(s)
    }
}

impl serde::Serialize for Language {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Parses a language tag into one of the supported languages.
///
/// The tag is lowercased and `_` becomes `-`, so `en_GB` reads as `en-gb`.
/// Taiwanese and Macanese Chinese map to `zh-hk`; Singaporean and bare `zh`
/// map to `zh-cn`. A tag that is still unknown is retried on its first two
/// characters before it is rejected.
///
/// # Examples
/// ```
/// use country_names::utils::lang::{parse_language_code, Language};
///
/// assert_eq!(parse_language_code("en_GB").unwrap(), Language::En);
/// assert_eq!(parse_language_code("zh_TW").unwrap(), Language::ZhHk);
/// assert!(parse_language_code("ko-KR").is_err());
/// ```
pub fn parse_language_code(lang_code: &str) -> Result<Language> {
    let normalized = lang_code.to_lowercase().replace('_', "-");

    let tag = match normalized.as_str() {
        "zh-tw" | "zh-mo" => "zh-hk",
        "zh-sg" | "zh" => "zh-cn",
        other => other,
    };

    if let Some(lang) = Language::from_tag(tag) {
        return Ok(lang);
    }

    tag.get(..2)
        .and_then(Language::from_tag)
        .ok_or_else(|| Error::InvalidArgument(lang_code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_code() {
        // Test canonical tags
        for lang in Language::ALL {
            assert_eq!(parse_language_code(lang.as_str()).unwrap(), lang);
        }

        // Test case and separator normalization
        assert_eq!(parse_language_code("EN").unwrap(), Language::En);
        assert_eq!(parse_language_code("zh_CN").unwrap(), Language::ZhCn);
        assert_eq!(parse_language_code("ZH-HK").unwrap(), Language::ZhHk);

        // Test regional variants
        assert_eq!(parse_language_code("en_GB").unwrap(), Language::En);
        assert_eq!(parse_language_code("pt-BR").unwrap(), Language::Pt);
        assert_eq!(parse_language_code("de-AT").unwrap(), Language::De);
        assert_eq!(parse_language_code("zh-TW").unwrap(), Language::ZhHk);
        assert_eq!(parse_language_code("zh_TW").unwrap(), Language::ZhHk);
        assert_eq!(parse_language_code("zh-mo").unwrap(), Language::ZhHk);
        assert_eq!(parse_language_code("ZH-SG").unwrap(), Language::ZhCn);
        assert_eq!(parse_language_code("zh").unwrap(), Language::ZhCn);
    }

    #[test]
    fn test_parse_language_code_rejects() {
        for tag in ["", "e", "ko", "ko-KR", "xx-yy", "zh-xx", " en", "é"] {
            match parse_language_code(tag) {
                Err(Error::InvalidArgument(bad)) => assert_eq!(bad, tag),
                other => panic!("expected InvalidArgument for {tag:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_language_code_idempotent() {
        let tags = [
            "ar", "CS", "da_DK", "de-CH", "en_GB", "es-MX", "fr_CA", "he", "it-IT", "ja_JP",
            "nl-BE", "pt_BR", "ru", "sk-SK", "zh", "zh-sg", "zh_TW", "zh-MO", "zh-hk", "zh-cn",
        ];

        for tag in tags {
            let once = parse_language_code(tag).unwrap();
            let twice = parse_language_code(once.as_str()).unwrap();
            assert_eq!(once, twice, "not idempotent for {tag:?}");
        }
    }

    #[test]
    fn test_resolve_defaults_to_english() {
        assert_eq!(Language::resolve(None).unwrap(), Language::En);
        assert_eq!(Language::resolve(Some("fr")).unwrap(), Language::Fr);
        assert!(Language::resolve(Some("ko")).is_err());
    }

    #[test]
    fn test_column_names() {
        assert_eq!(Language::En.column(), "country_en");
        assert_eq!(Language::ZhCn.column(), "country_zh_cn");
        assert_eq!(Language::ZhHk.column(), "country_zh_hk");

        for lang in Language::ALL {
            assert_eq!(lang.column(), format!("country_{}", lang.as_str().replace('-', "_")));
        }
    }
}
