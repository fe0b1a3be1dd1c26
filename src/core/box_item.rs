use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::BoxCounter;

/// Fill color every freshly created box starts with.
pub const DEFAULT_BOX_COLOR: &str = "#A77EE4";

/// Placeholder entries seeded into each box's data bag, in insertion order.
pub const DEFAULT_BOX_DATA: [(&str, &str); 2] = [
    ("name", "Kevin Schaul"),
    ("school", "University of Minnesota"),
];

/// One visual unit of a rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxItem {
    num: u64,
    color: String,
    data: IndexMap<String, String>,
}

impl BoxItem {
    /// Creates a box numbered with the next tick of `counter`.
    #[must_use]
    pub fn new(counter: &mut BoxCounter) -> Self {
        let data = DEFAULT_BOX_DATA
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        Self {
            num: counter.tick(),
            color: DEFAULT_BOX_COLOR.to_owned(),
            data,
        }
    }

    #[must_use]
    pub fn num(&self) -> u64 {
        self.num
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn data_bag(&self) -> &IndexMap<String, String> {
        &self.data
    }

    /// Stores `value` under `key`, overwriting any previous value, and returns
    /// the stored value.
    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) -> &str {
        let entry = self.data.entry(key.into()).or_default();
        *entry = value.into();
        entry.as_str()
    }
}
