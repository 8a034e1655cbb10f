//! Performance page reports.

use clap::Subcommand;
use shop_pulse_analytics::Dataset;
use shop_pulse_analytics::derive::performance::{
    daily_conversion, performance_totals, target_attainment, traffic_totals,
};

use super::{CommandResult, Report, Section, row};

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum PerformanceView {
    /// Revenue and profit per month against target
    Monthly,
    /// Visits, conversions and orders per weekday
    Daily,
    /// Year and week totals
    Summary,
}

/// Run a performance report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(dataset: &Dataset, view: PerformanceView) -> CommandResult {
    let performance = &dataset.performance;
    let report: Report = match view {
        PerformanceView::Monthly => {
            let rows: Vec<_> = performance
                .monthly
                .iter()
                .zip(target_attainment(&performance.monthly))
                .map(|(month, attainment)| {
                    row([
                        ("month", month.month.clone().into()),
                        ("revenue", month.revenue.display_whole().into()),
                        ("profit", month.profit.display_whole().into()),
                        ("target", month.target.display_whole().into()),
                        ("attainment", attainment.attainment.into()),
                        ("met", if attainment.met { "Yes" } else { "No" }.into()),
                    ])
                })
                .collect();
            Section::new(&rows)?
                .titled("Monthly performance")
                .labels(&[
                    ("month", "Month"),
                    ("revenue", "Revenue"),
                    ("profit", "Profit"),
                    ("target", "Target"),
                    ("attainment", "Of target %"),
                    ("met", "Met"),
                ])
                .into()
        }
        PerformanceView::Daily => Section::new(&daily_conversion(&performance.daily))?
            .titled("Daily performance")
            .labels(&[
                ("day", "Day"),
                ("visits", "Visits"),
                ("conversions", "Conversions"),
                ("orders", "Orders"),
                ("conversion_rate", "Conversion %"),
            ])
            .into(),
        PerformanceView::Summary => {
            let year = performance_totals(&performance.monthly);
            let week = traffic_totals(&performance.daily);
            Report::from(
                Section::new(&[row([
                    ("revenue", year.revenue.display_whole().into()),
                    ("profit", year.profit.display_whole().into()),
                    ("margin", format!("{:.1}%", year.margin).into()),
                    (
                        "on_target",
                        format!("{} of {}", year.months_on_target, year.months).into(),
                    ),
                ])])?
                .titled("Year")
                .labels(&[
                    ("revenue", "Revenue"),
                    ("profit", "Profit"),
                    ("margin", "Margin"),
                    ("on_target", "Months on target"),
                ]),
            )
            .with(
                Section::new(&[row([
                    ("visits", week.visits.into()),
                    ("conversions", week.conversions.into()),
                    ("orders", week.orders.into()),
                    ("conversion_rate", format!("{:.1}%", week.conversion_rate).into()),
                ])])?
                .titled("Week")
                .labels(&[
                    ("visits", "Visits"),
                    ("conversions", "Conversions"),
                    ("orders", "Orders"),
                    ("conversion_rate", "Conversion"),
                ]),
            )
        }
    };
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_pulse_analytics::DashboardConfig;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::generate(&DashboardConfig::default().with_seed(9)).unwrap()
    }

    #[test]
    fn test_monthly_flags_missed_targets() {
        let report = run(&dataset(), PerformanceView::Monthly).unwrap();
        let rows = report.sections[0].data.as_array().unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[2]["met"], "No");
        assert_eq!(rows[2]["attainment"], 98);
        assert_eq!(rows.iter().filter(|r| r["met"] == "Yes").count(), 11);
    }

    #[test]
    fn test_summary_totals() {
        let report = run(&dataset(), PerformanceView::Summary).unwrap();
        let year = &report.sections[0].data[0];
        assert_eq!(year["revenue"], "$252,000");
        assert_eq!(year["margin"], "35.7%");
        assert_eq!(year["on_target"], "11 of 12");
        assert_eq!(report.sections[1].data[0]["visits"], 11_450);
    }
}
