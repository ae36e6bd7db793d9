//! Serde helpers for the shapes Steam sends numbers in.

pub mod string {
    use std::fmt::Display;
    use std::str::FromStr;
    use serde::{de, Serializer, Deserialize, Deserializer};
    
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }
    
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?.parse().map_err(de::Error::custom)
    }
}

/// Accepts either a number or a string containing a number.
pub mod number_or_string {
    use std::fmt::Display;
    use std::str::FromStr;
    use serde::{de, Deserialize, Deserializer};
    
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }
    
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr + TryFrom<u64>,
        <T as FromStr>::Err: Display,
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => T::try_from(n)
                .map_err(|_error| de::Error::custom(format!("{n} is out of range"))),
            NumberOrString::String(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// Like [`number_or_string`] for optional values. Use with `#[serde(default)]`.
pub mod option_number_or_string {
    use std::fmt::Display;
    use std::str::FromStr;
    use serde::{Deserializer, Deserialize};
    
    #[derive(Deserialize)]
    struct Wrapper<T>(#[serde(with = "super::number_or_string")] T)
    where
        T: FromStr + TryFrom<u64>,
        <T as FromStr>::Err: Display;
    
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr + TryFrom<u64>,
        <T as FromStr>::Err: Display,
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapper<T>>::deserialize(deserializer)?.map(|Wrapper(value)| value))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    
    #[derive(Deserialize)]
    struct Asset {
        #[serde(with = "super::number_or_string")]
        appid: u32,
        #[serde(with = "super::number_or_string")]
        contextid: u64,
    }
    
    #[derive(Deserialize)]
    struct Finalized {
        #[serde(default, with = "super::option_number_or_string")]
        steamid: Option<u64>,
    }
    
    #[test]
    fn reads_optional_numbers() {
        let finalized: Finalized = serde_json::from_str(r#"{"steamid":"76561198080179568"}"#).unwrap();
        
        assert_eq!(finalized.steamid, Some(76561198080179568));
        
        let finalized: Finalized = serde_json::from_str(r#"{"steamid":null}"#).unwrap();
        
        assert_eq!(finalized.steamid, None);
        
        let finalized: Finalized = serde_json::from_str("{}").unwrap();
        
        assert_eq!(finalized.steamid, None);
    }
    
    #[test]
    fn reads_numbers_and_strings() {
        let asset: Asset = serde_json::from_str(r#"{"appid":730,"contextid":"2"}"#).unwrap();
        
        assert_eq!(asset.appid, 730);
        assert_eq!(asset.contextid, 2);
    }
}
