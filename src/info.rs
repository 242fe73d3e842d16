use std::collections::btree_map;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

/// A single INFO entry: either a bare flag or the raw text after `=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InfoValue {
    Flag,
    Value(String),
}

impl InfoValue {
    pub fn value(&self) -> Option<&str> {
        match self {
            InfoValue::Flag => None,
            InfoValue::Value(v) => Some(v),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, InfoValue::Flag)
    }
}

/// The INFO column of a record.
///
/// Keys are kept sorted, so formatting always emits them in ascending order.
/// When parsing, a key that occurs more than once keeps its last value.
///
/// ```
/// use rust_vcf::{Info, InfoValue};
///
/// let info: Info = "DP=10;AF=0.5;DB".parse().unwrap();
/// assert_eq!(info.get("DP"), Some(&InfoValue::Value("10".into())));
/// assert!(info.has_flag("DB"));
/// assert_eq!(info.to_string(), "AF=0.5;DB;DP=10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info(BTreeMap<String, InfoValue>);

impl Info {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.0.get(key)
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.get(key).map_or(false, InfoValue::is_flag)
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: InfoValue) -> Option<InfoValue> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<InfoValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, InfoValue> {
        self.0.iter()
    }
}

impl<'a> From<&'a str> for Info {
    fn from(raw: &'a str) -> Self {
        raw.split(';')
            .map(|token| match token.split_once('=') {
                Some((key, value)) => (key.to_owned(), InfoValue::Value(value.to_owned())),
                None => (token.to_owned(), InfoValue::Flag),
            })
            .collect()
    }
}

impl FromStr for Info {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Info::from(raw))
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            match value {
                InfoValue::Flag => f.write_str(key)?,
                InfoValue::Value(v) => write!(f, "{}={}", key, v)?,
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, InfoValue)> for Info {
    fn from_iter<I: IntoIterator<Item = (String, InfoValue)>>(iter: I) -> Self {
        Info(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Info {
    type Item = (&'a String, &'a InfoValue);
    type IntoIter = btree_map::Iter<'a, String, InfoValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Info {
        raw.parse().unwrap()
    }

    #[test]
    fn test_flags_and_values() {
        let info = parse("DP=10;AF=0.5;DB");
        assert_eq!(info.len(), 3);
        assert_eq!(info.get("DP").and_then(InfoValue::value), Some("10"));
        assert_eq!(info.get("AF").and_then(InfoValue::value), Some("0.5"));
        assert_eq!(info.get("DB"), Some(&InfoValue::Flag));
        assert_eq!(info.to_string(), "AF=0.5;DB;DP=10");
    }

    #[test]
    fn test_last_occurrence_wins() {
        let info = parse("DP=10;DP=12;DB;DB=1");
        assert_eq!(info.get("DP").and_then(InfoValue::value), Some("12"));
        assert_eq!(info.get("DB").and_then(InfoValue::value), Some("1"));
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let info = parse("ANN=A|x=y");
        assert_eq!(info.get("ANN").and_then(InfoValue::value), Some("A|x=y"));
        assert_eq!(info.to_string(), "ANN=A|x=y");
    }

    #[test]
    fn test_missing_info_is_kept() {
        let info = parse(".");
        assert!(info.has_flag("."));
        assert_eq!(info.to_string(), ".");
    }

    #[test]
    fn test_parse_of_formatted_is_identity() {
        let mut info = Info::new();
        info.insert("SVTYPE", InfoValue::Value("DEL".into()));
        info.insert("IMPRECISE", InfoValue::Flag);
        info.insert("END", InfoValue::Value("1500".into()));
        assert_eq!(parse(&info.to_string()), info);
    }
}
