//! Structured data results shown by data views.

use serde::Serialize;

/// A view result made of labelled items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResult {
    pub data: DataGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataGroup {
    pub items: Vec<DataItem>,
}

/// One row. Items without a value render as a bare label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<DataGroup>,
}

impl DataItem {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            subgroup: None,
        }
    }

    pub fn value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            subgroup: None,
        }
    }

    pub fn with_subgroup(mut self, items: Vec<DataItem>) -> Self {
        self.subgroup = Some(DataGroup { items });
        self
    }
}

impl DataResult {
    pub fn new(items: Vec<DataItem>) -> Self {
        Self {
            data: DataGroup { items },
        }
    }
}
