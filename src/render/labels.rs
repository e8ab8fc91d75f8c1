use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Display text keyed by tick value.
///
/// Keys compare by value: `-0.0` finds `0.0` and NaN finds NaN. Serialized
/// as an array of `[value, text]` pairs since JSON object keys are strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, String)>", into = "Vec<(f64, String)>")]
pub struct TickLabels {
    entries: IndexMap<OrderedFloat<f64>, String>,
}

impl TickLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the text for `value`, returning the previous text.
    pub fn insert(&mut self, value: f64, text: impl Into<String>) -> Option<String> {
        self.entries.insert(OrderedFloat(value), text.into())
    }

    #[must_use]
    pub fn with_label(mut self, value: f64, text: impl Into<String>) -> Self {
        self.insert(value, text);
        self
    }

    /// Raw entry for `value`, empty text included.
    #[must_use]
    pub fn get(&self, value: f64) -> Option<&str> {
        self.entries.get(&OrderedFloat(value)).map(String::as_str)
    }

    /// Text to draw for `value`; `None` when absent or empty.
    #[must_use]
    pub fn label_for(&self, value: f64) -> Option<&str> {
        self.get(value).filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.entries
            .iter()
            .map(|(value, text)| (value.into_inner(), text.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(f64, S)> for TickLabels {
    fn from_iter<I: IntoIterator<Item = (f64, S)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(value, text)| (OrderedFloat(value), text.into()))
                .collect(),
        }
    }
}

impl From<Vec<(f64, String)>> for TickLabels {
    fn from(pairs: Vec<(f64, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<TickLabels> for Vec<(f64, String)> {
    fn from(labels: TickLabels) -> Self {
        labels
            .entries
            .into_iter()
            .map(|(value, text)| (value.into_inner(), text))
            .collect()
    }
}
