//! Customer segment reports.

use clap::Subcommand;
use serde_json::{Map, Value};
use shop_pulse_analytics::derive::customers::{
    CohortTable, MAX_COHORT_MONTHS, TOP_CUSTOMER_LIMIT, clv_distribution, cohort_retention,
    customers_by_location, customers_by_purchase_frequency, customers_by_spend_bracket,
    sample_cohort_retention, top_customers_by_orders, top_customers_by_spending, user_type_aov,
    user_type_data, user_type_revenue,
};
use shop_pulse_analytics::models::Customer;
use shop_pulse_analytics::table::customers_table_config;
use shop_pulse_analytics::{Dataset, Segment, sort_rows};

use super::{CommandResult, Report, Section, SortArgs, row};

const SEGMENT_LABELS: [(&str, &str); 3] =
    [("name", "Segment"), ("value", "Customers"), ("percentage", "Share %")];

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerView {
    /// Highest lifetime spend
    TopSpenders {
        #[arg(short = 'n', long, default_value_t = TOP_CUSTOMER_LIMIT)]
        limit: usize,
    },
    /// Most orders placed
    TopOrders {
        #[arg(short = 'n', long, default_value_t = TOP_CUSTOMER_LIMIT)]
        limit: usize,
    },
    /// New versus returning customers
    UserTypes,
    /// Revenue from new versus returning customers
    Revenue,
    /// Average order value for new versus returning customers
    Aov,
    /// Customers per region
    Locations,
    /// Customers per lifetime spend bracket
    Brackets,
    /// Customers per purchase frequency band
    Frequency,
    /// Monthly retention by first-purchase cohort
    Cohorts {
        /// Months of cohorts to include
        #[arg(
            long,
            default_value_t = 6,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_COHORT_MONTHS))
        )]
        months: u32,

        /// Show the fixed reference cohort table instead
        #[arg(long)]
        sample: bool,
    },
    /// Lifetime value distribution
    Clv,
    /// Average lifetime value by quarter
    ClvTrend,
    /// The full customer table
    List(SortArgs),
}

/// Run a customer report.
///
/// # Errors
///
/// Returns an error if the sort key is unknown or serialization fails.
pub fn run(dataset: &Dataset, view: &CustomerView) -> CommandResult {
    let customers = &dataset.customers;
    let report: Report = match view {
        CustomerView::TopSpenders { limit } => {
            customer_table(&top_customers_by_spending(customers, *limit)).into()
        }
        CustomerView::TopOrders { limit } => {
            customer_table(&top_customers_by_orders(customers, *limit)).into()
        }
        CustomerView::UserTypes => segments(&user_type_data(customers))?,
        CustomerView::Revenue => Section::new(&user_type_revenue(customers))?
            .labels(&[("name", "Type"), ("value", "Revenue")])
            .into(),
        CustomerView::Aov => Section::new(&user_type_aov(customers))?
            .labels(&[("name", "Type"), ("value", "AOV")])
            .into(),
        CustomerView::Locations => segments(&customers_by_location(customers))?,
        CustomerView::Brackets => segments(&customers_by_spend_bracket(customers))?,
        CustomerView::Frequency => segments(&customers_by_purchase_frequency(customers))?,
        CustomerView::Cohorts { months, sample } => {
            let table = if *sample {
                sample_cohort_retention()
            } else {
                cohort_retention(customers, dataset.reference_date, *months)?
            };
            cohort_section(&table).into()
        }
        CustomerView::Clv => Section::new(&clv_distribution())?
            .labels(&[("range", "Lifetime value"), ("value", "Customers")])
            .into(),
        CustomerView::ClvTrend => Section::new(&dataset.clv_trend)?
            .labels(&[("quarter", "Quarter"), ("value", "Average CLV")])
            .into(),
        CustomerView::List(sort) => {
            let sorted = sort_rows(customers, &sort.state::<Customer>())?;
            Report::from(customer_table(&sorted)).note(format!("{} customers", sorted.len()))
        }
    };
    Ok(report)
}

fn segments(rows: &[Segment]) -> CommandResult {
    Ok(Section::new(rows)?.labels(&SEGMENT_LABELS).into())
}

fn customer_row(customer: &Customer) -> Map<String, Value> {
    row([
        ("name", customer.name.as_str().into()),
        ("email", customer.email.as_str().into()),
        ("total_spent", customer.total_spent.display().into()),
        ("orders", customer.orders.into()),
        ("tier", customer.tier.label().into()),
        ("last_order", customer.last_order_label().into()),
        ("first_purchase", customer.first_purchase_label().into()),
        ("location", customer.location.label().into()),
    ])
}

fn customer_table(customers: &[&Customer]) -> Section {
    let rows = customers.iter().map(|c| customer_row(c)).collect();
    Section::table(&customers_table_config(), rows)
}

/// One row per cohort with a column per elapsed month.
fn cohort_section(table: &CohortTable) -> Section {
    let rows: Vec<Value> = table
        .cohorts
        .iter()
        .map(|cohort| {
            let mut cells = row([
                ("cohort", cohort.date.as_str().into()),
                ("customers", cohort.customers.into()),
            ]);
            for (k, cell) in cohort.retention.iter().enumerate() {
                let column = table
                    .months
                    .get(k)
                    .cloned()
                    .unwrap_or_else(|| format!("Month {}", k + 1));
                cells.insert(
                    column,
                    cell.map_or(Value::Null, |pct| format!("{pct}%").into()),
                );
            }
            Value::Object(cells)
        })
        .collect();

    Section {
        title: None,
        data: Value::Array(rows),
        labels: vec![
            ("cohort".to_string(), "Cohort".to_string()),
            ("customers".to_string(), "Customers".to_string()),
        ],
        empty: "No cohorts in range".to_string(),
    }
}
