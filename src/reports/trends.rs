//! Trend Report
//!
//! Top income and expense trends for each date window, with the window's net
//! total and savings rate.

use serde::Serialize;
use tracing::debug;

use crate::config::Settings;
use crate::display::{format_money, format_savings_rate, format_trend_line, separator};
use crate::display::report::RULE_WIDTH;
use crate::error::{TrendsError, TrendsResult};
use crate::models::{DateRange, Kind, Ledger, Money, Trend};
use crate::services::trend::total_of;
use crate::services::{aggregate, date_ranges, filter_by_date_range, savings_rate, WindowMode};

/// Trends for a single date window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowReport {
    /// The window's bounds (both excluded from the window's transactions)
    pub range: DateRange,
    /// Number of transactions inside the window
    pub transaction_count: usize,
    /// Income trends, largest first
    pub income_trends: Vec<Trend>,
    /// Expense trends, most negative first
    pub expense_trends: Vec<Trend>,
    /// Sum of the listed income trends
    pub total_income: Money,
    /// Magnitude of the listed expense trends
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub net: Money,
    /// Savings rate in percent, `None` when there is no income
    pub savings_rate: Option<f64>,
}

impl WindowReport {
    /// Build the report for one window of a ledger
    pub fn generate(ledger: &Ledger, range: DateRange, top_n: i64) -> TrendsResult<Self> {
        let window = filter_by_date_range(ledger, range.start, range.end);

        let income_trends = aggregate(&window, Kind::Income, top_n)?;
        let expense_trends = aggregate(&window, Kind::Expense, top_n)?;

        let overflow = || TrendsError::Overflow(format!("totals for window {}", range));
        let total_income = total_of(&income_trends)?;
        let total_expenses = total_of(&expense_trends)?
            .checked_abs()
            .ok_or_else(overflow)?;
        let net = total_income
            .checked_sub(total_expenses)
            .ok_or_else(overflow)?;

        let rate = match savings_rate(total_income, total_expenses) {
            Ok(rate) => Some(rate),
            Err(TrendsError::DegenerateMath(_)) => None,
            Err(e) => return Err(e),
        };

        debug!(
            window = %range,
            transactions = window.len(),
            income_trends = income_trends.len(),
            expense_trends = expense_trends.len(),
            "aggregated window"
        );

        Ok(Self {
            range,
            transaction_count: window.len(),
            income_trends,
            expense_trends,
            total_income,
            total_expenses,
            net,
            savings_rate: rate,
        })
    }

    /// Trends of one kind
    pub fn trends(&self, kind: Kind) -> &[Trend] {
        match kind {
            Kind::Income => &self.income_trends,
            Kind::Expense => &self.expense_trends,
        }
    }

    /// Signed total of the listed trends of one kind
    fn signed_total(&self, kind: Kind) -> Money {
        match kind {
            Kind::Income => self.total_income,
            Kind::Expense => Money::from_cents(-self.total_expenses.cents()),
        }
    }

    /// Format the window for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = &settings.currency_symbol;
        let mut output = String::new();

        for kind in Kind::ALL {
            let trends = self.trends(kind);
            if trends.is_empty() {
                continue;
            }

            output.push_str(&format!(
                "Top {} Trends for {}:\n",
                kind.label(),
                self.range.format(&settings.header_date_format)
            ));
            for trend in trends {
                output.push_str(&format_trend_line(trend, symbol));
                output.push('\n');
            }
            output.push_str(&format!(
                "Total: {}\n\n",
                format_money(self.signed_total(kind), symbol)
            ));
        }

        output.push_str(&format!("Total: {}\n", format_money(self.net, symbol)));
        output.push_str(&format!(
            "Savings Rate: {}\n",
            format_savings_rate(self.savings_rate)
        ));
        output.push_str(&separator(RULE_WIDTH));
        output.push('\n');

        output
    }
}

/// Trend Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    /// Maximum trends listed per kind and window (0 = unlimited)
    pub top_n: i64,
    /// One entry per window, oldest first
    pub windows: Vec<WindowReport>,
}

impl TrendReport {
    /// Generate a trend report over the windows chosen by `mode`
    pub fn generate(ledger: &Ledger, mode: WindowMode, top_n: i64) -> TrendsResult<Self> {
        if ledger.is_empty() {
            return Err(TrendsError::EmptyResult);
        }

        let windows = date_ranges(ledger, mode)?
            .into_iter()
            .map(|range| WindowReport::generate(ledger, range, top_n))
            .collect::<TrendsResult<Vec<_>>>()?;

        Ok(Self { top_n, windows })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        self.windows
            .iter()
            .map(|window| window.format_terminal(settings))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn txn(m: u32, day: u32, dollars: i64, description: &str) -> Transaction {
        Transaction::new(d(m, day), Money::from_dollars_cents(dollars, 0), description)
    }

    fn sample() -> Ledger {
        Ledger::new(vec![
            txn(1, 1, -999, "Opening"),
            txn(1, 5, 2000, "Salary"),
            txn(1, 10, -800, "Rent"),
            txn(1, 12, -50, "Groceries"),
            txn(1, 19, -70, "Groceries"),
            txn(1, 20, 100, "Refund"),
            txn(1, 31, 2000, "Salary"),
        ])
    }

    #[test]
    fn test_whole_range_excludes_boundary_dates() {
        let report = TrendReport::generate(&sample(), WindowMode::WholeRange, 0).unwrap();
        assert_eq!(report.windows.len(), 1);

        let window = &report.windows[0];
        assert_eq!(window.range, DateRange::new(d(1, 1), d(1, 31)));
        assert_eq!(window.transaction_count, 5);
        assert_eq!(
            window.income_trends,
            vec![
                Trend::new("Salary", Money::from_dollars_cents(2000, 0)),
                Trend::new("Refund", Money::from_dollars_cents(100, 0)),
            ]
        );
        assert_eq!(
            window.expense_trends,
            vec![
                Trend::new("Rent", Money::from_dollars_cents(-800, 0)),
                Trend::new("Groceries", Money::from_dollars_cents(-120, 0)),
            ]
        );
        assert_eq!(window.total_income, Money::from_dollars_cents(2100, 0));
        assert_eq!(window.total_expenses, Money::from_dollars_cents(920, 0));
        assert_eq!(window.net, Money::from_dollars_cents(1180, 0));
    }

    #[test]
    fn test_totals_follow_truncated_trends() {
        let report = TrendReport::generate(&sample(), WindowMode::WholeRange, 1).unwrap();
        let window = &report.windows[0];
        assert_eq!(window.income_trends.len(), 1);
        assert_eq!(window.total_income, Money::from_dollars_cents(2000, 0));
        assert_eq!(window.total_expenses, Money::from_dollars_cents(800, 0));
        let rate = window.savings_rate.unwrap();
        assert!((rate - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_without_income_has_no_rate() {
        let ledger = Ledger::new(vec![
            txn(3, 1, -5, "a"),
            txn(3, 2, -5, "b"),
            txn(3, 3, -5, "c"),
        ]);
        let report = TrendReport::generate(&ledger, WindowMode::WholeRange, 0).unwrap();
        assert_eq!(report.windows[0].savings_rate, None);
    }

    #[test]
    fn test_rolling_windows_ascend() {
        let report = TrendReport::generate(&sample(), WindowMode::Rolling { weeks: 1 }, 0).unwrap();
        // 30 days -> 4 whole weeks -> four one-week windows
        assert_eq!(report.windows.len(), 4);
        for pair in report.windows.windows(2) {
            assert!(pair[0].range.start < pair[1].range.start);
        }
    }

    #[test]
    fn test_rolling_window_boundary_date_in_neither_window() {
        // Newest 29-03, two weeks of span: windows (15-03, 22-03) and (22-03, 29-03)
        let ledger = Ledger::new(vec![
            txn(3, 15, 1, "Oldest"),
            txn(3, 18, -10, "Early"),
            txn(3, 22, -40, "Boundary"),
            txn(3, 25, -20, "Late"),
            txn(3, 29, 1, "Newest"),
        ]);
        let report = TrendReport::generate(&ledger, WindowMode::Rolling { weeks: 1 }, 0).unwrap();

        let ranges: Vec<DateRange> = report.windows.iter().map(|w| w.range).collect();
        assert_eq!(
            ranges,
            vec![
                DateRange::new(d(3, 15), d(3, 22)),
                DateRange::new(d(3, 22), d(3, 29)),
            ]
        );

        let described: Vec<Vec<&str>> = report
            .windows
            .iter()
            .map(|w| w.expense_trends.iter().map(|t| t.description.as_str()).collect())
            .collect();
        assert_eq!(described, vec![vec!["Early"], vec!["Late"]]);
        assert!(report.windows.iter().all(|w| w.transaction_count == 1));
    }

    #[test]
    fn test_window_total_overflow_is_error() {
        let huge = Money::parse("90000000000000000.00").unwrap();
        let ledger = Ledger::new(vec![
            txn(5, 1, 1, "Start"),
            Transaction::new(d(5, 2), huge, "Bonus"),
            Transaction::new(d(5, 3), huge, "Prize"),
            txn(5, 31, 1, "End"),
        ]);
        assert!(matches!(
            TrendReport::generate(&ledger, WindowMode::WholeRange, 0),
            Err(TrendsError::Overflow(_))
        ));
    }

    #[test]
    fn test_empty_ledger() {
        assert!(matches!(
            TrendReport::generate(&Ledger::empty(), WindowMode::WholeRange, 3),
            Err(TrendsError::EmptyResult)
        ));
    }

    #[test]
    fn test_format_terminal() {
        let ledger = Ledger::new(vec![
            txn(2, 1, 1, "Start"),
            txn(2, 10, 1000, "Salary"),
            txn(2, 11, -250, "Rent"),
            txn(2, 28, 1, "End"),
        ]);
        let report = TrendReport::generate(&ledger, WindowMode::WholeRange, 5).unwrap();
        let text = report.format_terminal(&Settings::default());

        let expected = "\
Top Payments Trends for 01-02-2024 to 28-02-2024:
  Salary: $1000.00
Total: $1000.00

Top Expenses Trends for 01-02-2024 to 28-02-2024:
  Rent: -$250.00
Total: -$250.00

Total: $750.00
Savings Rate: 75.00%
--------------------------------------------------
";
        assert_eq!(text, expected);
    }
}
