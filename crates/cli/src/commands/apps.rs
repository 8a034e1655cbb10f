//! App ecosystem reports.

use clap::Subcommand;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use shop_pulse_analytics::Dataset;
use shop_pulse_analytics::derive::apps::{
    PERFORMER_LIMIT, all_apps, app_categories, app_category_roi, apps_in_category,
    low_performing_apps, top_performing_apps, utility_app_savings, utility_summary,
};
use shop_pulse_analytics::models::AppItem;
use shop_pulse_core::{AppCategory, Money};

use super::{CommandResult, Report, Section, row};

#[derive(Debug, Clone, Subcommand)]
pub enum AppView {
    /// Highest ROI apps
    Top,
    /// Lowest positive ROI apps
    Low,
    /// App count and spend per category
    Categories,
    /// ROI per revenue-bearing category
    CategoryRoi,
    /// Time savings from utility apps
    Utility {
        /// Dollar value of one saved hour (overrides `PULSE_HOURLY_VALUE`)
        #[arg(long)]
        hourly_value: Option<Decimal>,
    },
    /// Every installed app
    List {
        /// Only apps in this category
        #[arg(long)]
        category: Option<AppCategory>,
    },
}

/// Run an app report.
///
/// `hourly_value` is the configured value of a saved staff hour.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(dataset: &Dataset, view: &AppView, hourly_value: Money) -> CommandResult {
    let apps = &dataset.apps;
    let report: Report = match view {
        AppView::Top => app_table(&top_performing_apps(apps, PERFORMER_LIMIT)).into(),
        AppView::Low => app_table(&low_performing_apps(apps, PERFORMER_LIMIT)).into(),
        AppView::Categories => Section::new(&app_categories(apps))?
            .labels(&[("name", "Category"), ("count", "Apps"), ("total_cost", "Monthly cost")])
            .into(),
        AppView::CategoryRoi => Section::new(&app_category_roi(apps))?
            .labels(&[("name", "Category"), ("roi", "ROI %")])
            .into(),
        AppView::Utility {
            hourly_value: override_value,
        } => {
            let hourly = override_value.map_or(hourly_value, Money::new);
            let rows = utility_app_savings(apps, hourly);
            let summary = utility_summary(&rows);
            Report::from(
                Section::new(&rows)?
                    .titled("Utility apps")
                    .labels(&[
                        ("name", "App"),
                        ("hours_per_week", "Hours/week"),
                        ("monthly_savings", "Monthly savings"),
                        ("roi", "ROI %"),
                    ])
                    .empty_state("No utility apps installed"),
            )
            .with(Section::new(&summary)?.titled("Summary"))
        }
        AppView::List { category } => {
            let listed = match category {
                Some(category) => apps_in_category(apps, *category),
                None => all_apps(apps),
            };
            app_table(&listed).into()
        }
    };
    Ok(report)
}

fn app_row(app: &AppItem) -> Map<String, Value> {
    row([
        ("name", app.name.as_str().into()),
        ("category", app.category.label().into()),
        ("monthly_cost", app.monthly_cost.as_str().into()),
        ("revenue", app.revenue.display_whole().into()),
        ("roi", app.roi.into()),
    ])
}

fn app_table(apps: &[&AppItem]) -> Section {
    let rows: Vec<Value> = apps.iter().map(|a| Value::Object(app_row(a))).collect();
    Section {
        title: None,
        data: Value::Array(rows),
        labels: [
            ("name", "App"),
            ("category", "Category"),
            ("monthly_cost", "Monthly cost"),
            ("revenue", "Revenue"),
            ("roi", "ROI %"),
        ]
        .into_iter()
        .map(|(k, l)| (k.to_string(), l.to_string()))
        .collect(),
        empty: "No apps installed".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_pulse_analytics::DashboardConfig;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::generate(&DashboardConfig::default().with_seed(5)).unwrap()
    }

    #[test]
    fn test_utility_report_has_summary() {
        let view = AppView::Utility { hourly_value: None };
        let report = run(&dataset(), &view, Money::from_dollars(25)).unwrap();
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[1].data["total_hours_per_week"], 28);
    }

    #[test]
    fn test_hourly_value_override() {
        let view = AppView::Utility {
            hourly_value: Some(Decimal::from(50)),
        };
        let report = run(&dataset(), &view, Money::from_dollars(25)).unwrap();
        // 28 hours a week for 4 weeks at $50.
        let savings: Decimal = report.sections[1].data["total_savings"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(savings, Decimal::from(5_600));
    }

    #[test]
    fn test_list_by_category() {
        let view = AppView::List {
            category: Some(AppCategory::Loyalty),
        };
        let report = run(&dataset(), &view, Money::from_dollars(25)).unwrap();
        assert_eq!(report.sections[0].data.as_array().unwrap().len(), 2);
    }
}
