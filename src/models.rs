use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Goes negative when the roster is over capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivitySet {
    entries: Vec<(String, Activity)>,
}

impl ActivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. Replacing keeps the original position,
    /// the same way a JSON object with a repeated key behaves.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = activity;
        } else {
            self.entries.push((name, activity));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for ActivitySet {
    fn from_iter<I: IntoIterator<Item = (N, Activity)>>(iter: I) -> Self {
        let mut set = ActivitySet::new();
        for (name, activity) in iter {
            set.insert(name, activity);
        }
        set
    }
}

impl<'de> Deserialize<'de> for ActivitySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = ActivitySet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut set = ActivitySet::new();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    set.insert(name, activity);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Name,
    Date,
}

impl SortMode {
    /// Value used for the `<option>` in the sort selector.
    pub fn as_value(self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Date => "date",
        }
    }

    /// Unknown values leave sorting on name.
    pub fn from_value(value: &str) -> Self {
        match value {
            "date" => SortMode::Date,
            _ => SortMode::Name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub category: String,
    pub search: String,
    pub sort: SortMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub visible: bool,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success, visible: true }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error, visible: true }
    }
}
