use std::fmt;
use serde::{Deserialize, Serialize};

/// Languages for Steam pages and API responses. Sets the `Steam_Language` cookie.
/// 
/// See <https://partner.steamgames.com/doc/store/localization/languages> for more information.
#[derive(Default, Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum Language {
    /// Arabic language.
    Arabic,
    /// Bulgarian language.
    Bulgarian,
    /// Chinese (Simplified) language.
    ChineseSimplified,
    /// Chinese (Traditional) language.
    ChineseTraditional,
    /// Czech language.
    Czech,
    /// Danish language.
    Danish,
    /// Dutch language.
    Dutch,
    /// English language. This is the default language.
    #[default]
    English,
    /// Finnish language.
    Finnish,
    /// French language.
    French,
    /// German language.
    German,
    /// Greek language.
    Greek,
    /// Hungarian language.
    Hungarian,
    /// Italian language.
    Italian,
    /// Japanese language.
    Japanese,
    /// Korean language.
    Korean,
    /// Norwegian language.
    Norwegian,
    /// Polish language.
    Polish,
    /// Portuguese language.
    Portuguese,
    /// Portuguese (Brazil) language.
    PortugueseBrazil,
    /// Romanian language.
    Romanian,
    /// Russian language.
    Russian,
    /// Spanish (Spain) language.
    SpanishSpain,
    /// Spanish (Latin America) language.
    SpanishLatinAmerica,
    /// Swedish language.
    Swedish,
    /// Thai language.
    Thai,
    /// Turkish language.
    Turkish,
    /// Ukrainian language.
    Ukrainian,
    /// Vietnamese language.
    Vietnamese,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steam_name())
    }
}

impl Language {
    /// The name Steam uses for this language, e.g. "koreana". This is the value of the
    /// `Steam_Language` cookie and the `l` query parameter.
    pub fn steam_name(&self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::Bulgarian => "bulgarian",
            Self::ChineseSimplified => "schinese",
            Self::ChineseTraditional => "tchinese",
            Self::Czech => "czech",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::English => "english",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Greek => "greek",
            Self::Hungarian => "hungarian",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "koreana",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Portuguese => "portuguese",
            Self::PortugueseBrazil => "brazilian",
            Self::Romanian => "romanian",
            Self::Russian => "russian",
            Self::SpanishSpain => "spanish",
            Self::SpanishLatinAmerica => "latam",
            Self::Swedish => "swedish",
            Self::Thai => "thai",
            Self::Turkish => "turkish",
            Self::Ukrainian => "ukrainian",
            Self::Vietnamese => "vietnamese",
        }
    }
    
    /// The ISO-style code for this language.
    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Bulgarian => "bg",
            Self::ChineseSimplified => "zh-CN",
            Self::ChineseTraditional => "zh-TW",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hungarian => "hu",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::Portuguese => "pt",
            Self::PortugueseBrazil => "pt-BR",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::SpanishSpain => "es",
            Self::SpanishLatinAmerica => "es-419",
            Self::Swedish => "sv",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Vietnamese => "vn",
        }
    }
    
    /// Gets the language from the name Steam uses for it.
    pub fn from_steam_name(name: &str) -> Option<Self> {
        match name {
            "arabic" => Some(Self::Arabic),
            "bulgarian" => Some(Self::Bulgarian),
            "schinese" => Some(Self::ChineseSimplified),
            "tchinese" => Some(Self::ChineseTraditional),
            "czech" => Some(Self::Czech),
            "danish" => Some(Self::Danish),
            "dutch" => Some(Self::Dutch),
            "english" => Some(Self::English),
            "finnish" => Some(Self::Finnish),
            "french" => Some(Self::French),
            "german" => Some(Self::German),
            "greek" => Some(Self::Greek),
            "hungarian" => Some(Self::Hungarian),
            "italian" => Some(Self::Italian),
            "japanese" => Some(Self::Japanese),
            "koreana" => Some(Self::Korean),
            "norwegian" => Some(Self::Norwegian),
            "polish" => Some(Self::Polish),
            "portuguese" => Some(Self::Portuguese),
            "brazilian" => Some(Self::PortugueseBrazil),
            "romanian" => Some(Self::Romanian),
            "russian" => Some(Self::Russian),
            "spanish" => Some(Self::SpanishSpain),
            "latam" => Some(Self::SpanishLatinAmerica),
            "swedish" => Some(Self::Swedish),
            "thai" => Some(Self::Thai),
            "turkish" => Some(Self::Turkish),
            "ukrainian" => Some(Self::Ukrainian),
            "vietnamese" => Some(Self::Vietnamese),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn korean_uses_steam_specific_name() {
        assert_eq!(Language::Korean.steam_name(), "koreana");
        assert_eq!(Language::Korean.iso_code(), "ko");
    }
    
    #[test]
    fn reads_language_from_cookie_value() {
        assert_eq!(Language::from_steam_name("latam"), Some(Language::SpanishLatinAmerica));
        assert_eq!(Language::from_steam_name("klingon"), None);
    }
}
