//! Report commands.
//!
//! Each command derives one dashboard view from the generated [`Dataset`]
//! and returns it as a [`Report`] for the renderer.
//!
//! [`Dataset`]: shop_pulse_analytics::Dataset

pub mod apps;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod overview;
pub mod performance;
pub mod products;
pub mod revenue;
pub mod sales;

use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};
use shop_pulse_analytics::table::DataTableConfig;
use shop_pulse_analytics::{SortDirection, SortState, Sortable};

/// Result type shared by every command.
pub type CommandResult = Result<Report, Box<dyn std::error::Error>>;

/// One block of report output.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: Option<String>,
    pub data: Value,
    /// Header labels by field key.
    pub labels: Vec<(String, String)>,
    /// Shown instead of an empty list.
    pub empty: String,
}

impl Section {
    /// Serialize `data` into a section.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be represented as JSON.
    pub fn new<T: Serialize + ?Sized>(data: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            title: None,
            data: serde_json::to_value(data)?,
            labels: vec![],
            empty: "No data".to_string(),
        })
    }

    /// Rows of a configured table, limited to its default columns.
    #[must_use]
    pub fn table(config: &DataTableConfig, rows: Vec<Map<String, Value>>) -> Self {
        let columns = config.default_columns();
        let data = rows
            .into_iter()
            .map(|row| {
                let projected: Map<String, Value> = columns
                    .iter()
                    .map(|c| (c.key.clone(), row.get(&c.key).cloned().unwrap_or(Value::Null)))
                    .collect();
                Value::Object(projected)
            })
            .collect();

        Self {
            title: None,
            data: Value::Array(data),
            labels: columns
                .iter()
                .map(|c| (c.key.clone(), c.label.clone()))
                .collect(),
            empty: config.empty_title.clone(),
        }
    }

    #[must_use]
    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: &[(&str, &str)]) -> Self {
        self.labels = labels
            .iter()
            .map(|(k, l)| ((*k).to_string(), (*l).to_string()))
            .collect();
        self
    }

    #[must_use]
    pub fn empty_state(mut self, text: &str) -> Self {
        self.empty = text.to_string();
        self
    }
}

/// Everything a command prints.
#[derive(Debug, Clone)]
pub struct Report {
    /// Lines printed above the sections in text output.
    pub notes: Vec<String>,
    pub sections: Vec<Section>,
}

impl Report {
    #[must_use]
    pub fn with(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl From<Section> for Report {
    fn from(section: Section) -> Self {
        Self {
            notes: vec![],
            sections: vec![section],
        }
    }
}

/// Sort flags shared by the list views.
#[derive(Debug, Clone, Default, Args)]
pub struct SortArgs {
    /// Column to sort by, as if its header were clicked once
    #[arg(long, global = true)]
    pub sort: Option<String>,

    /// Force descending order
    #[arg(long, global = true)]
    pub desc: bool,
}

impl SortArgs {
    /// The table's initial sort with the flags applied.
    #[must_use]
    pub fn state<T: Sortable>(&self) -> SortState {
        let mut state = SortState::initial::<T>();
        if let Some(key) = &self.sort {
            state.click(key);
        }
        if self.desc {
            state.direction = SortDirection::Desc;
        }
        state
    }
}

/// Build a table row from `(column key, value)` pairs.
pub fn row<const N: usize>(cells: [(&str, Value); N]) -> Map<String, Value> {
    cells
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_pulse_analytics::models::Order;
    use shop_pulse_analytics::table::orders_table_config;

    use super::*;

    #[test]
    fn test_sort_flags() {
        let default = SortArgs::default().state::<Order>();
        assert_eq!(default.key, "date");
        assert_eq!(default.direction, SortDirection::Desc);

        let clicked = SortArgs {
            sort: Some("date".to_string()),
            desc: false,
        }
        .state::<Order>();
        assert_eq!(clicked.direction, SortDirection::Asc);

        let forced = SortArgs {
            sort: Some("total".to_string()),
            desc: true,
        }
        .state::<Order>();
        assert_eq!(forced.key, "total");
        assert_eq!(forced.direction, SortDirection::Desc);
    }

    #[test]
    fn test_table_projects_default_columns() {
        let config = orders_table_config();
        let section = Section::table(
            &config,
            vec![row([
                ("id", "ORD-1".into()),
                ("payment_method", "PayPal".into()),
            ])],
        );

        let first = section.data.as_array().unwrap()[0].as_object().unwrap();
        assert_eq!(first.get("id"), Some(&Value::from("ORD-1")));
        assert_eq!(first.get("total"), Some(&Value::Null));
        assert!(!first.contains_key("payment_method"));
        assert_eq!(section.empty, "No orders found");
    }
}
