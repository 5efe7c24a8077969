//! Income Statement
//!
//! Derives an income statement from a snapshot of transaction records.
//! Amounts are grouped by category, resolved to statement lines through the
//! taxonomy, and rolled up into the standard subtotals. Nothing here can
//! fail: an empty snapshot yields a statement of zeros.

use std::collections::HashMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::display::report::{double_separator, format_header, format_margin, separator};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, StatementLine, Taxonomy, TransactionRecord};

/// Heading printed above the operating-expense breakdown; layout only
const OPERATING_EXPENSES_HEADING: &str = "Less: Operating Expenses:";

/// Per-category sums of transaction amounts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    sums: HashMap<String, Money>,
    transaction_count: usize,
}

impl CategoryTotals {
    /// Sum a set of transactions by category label
    pub fn from_transactions(transactions: &[TransactionRecord]) -> Self {
        let mut totals = Self::default();
        for record in transactions {
            totals.add(record);
        }
        totals
    }

    /// Fold one more transaction into the sums
    pub fn add(&mut self, record: &TransactionRecord) {
        *self
            .sums
            .entry(record.category.label().to_string())
            .or_insert_with(Money::zero) += record.amount;
        self.transaction_count += 1;
    }

    /// Sum for a category label; categories never seen count as zero
    pub fn lookup(&self, label: &str) -> Money {
        self.sums.get(label).copied().unwrap_or_default()
    }

    /// Number of transactions folded in
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Category labels with their sums, sorted by label
    pub fn entries(&self) -> Vec<(&str, Money)> {
        let mut entries: Vec<_> = self
            .sums
            .iter()
            .map(|(label, amount)| (label.as_str(), *amount))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Named quantities and subtotals of an income statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFigures {
    pub revenue: Money,
    pub sales_returns: Money,
    pub cogs: Money,
    pub salaries: Money,
    pub rent: Money,
    pub utilities: Money,
    pub depreciation: Money,
    pub other_operating_expenses: Money,
    pub other_income: Money,
    pub other_expenses: Money,
    pub tax_expense: Money,

    pub net_revenue: Money,
    pub gross_profit: Money,
    pub total_operating_expenses: Money,
    pub operating_profit: Money,
    pub ebt: Money,
    pub net_profit: Money,
}

impl StatementFigures {
    /// Resolve quantities from category sums and compute the subtotals
    ///
    /// A statement line collects every taxonomy category mapped to it.
    /// Categories without a mapping, or missing from the taxonomy, are
    /// ignored.
    pub fn from_totals(totals: &CategoryTotals, taxonomy: &Taxonomy) -> Self {
        let quantity = |line: StatementLine| -> Money {
            taxonomy
                .categories
                .iter()
                .filter(|def| def.line == Some(line))
                .map(|def| totals.lookup(&def.label))
                .sum()
        };

        let revenue = quantity(StatementLine::Revenue);
        let sales_returns = quantity(StatementLine::SalesReturns);
        let cogs = quantity(StatementLine::Cogs);
        let salaries = quantity(StatementLine::Salaries);
        let rent = quantity(StatementLine::Rent);
        let utilities = quantity(StatementLine::Utilities);
        let depreciation = quantity(StatementLine::Depreciation);
        let other_operating_expenses = quantity(StatementLine::OtherOperatingExpenses);
        let other_income = quantity(StatementLine::OtherIncome);
        let other_expenses = quantity(StatementLine::OtherExpenses);
        let tax_expense = quantity(StatementLine::TaxExpense);

        let net_revenue = revenue - sales_returns;
        let gross_profit = net_revenue - cogs;
        let total_operating_expenses =
            salaries + rent + utilities + depreciation + other_operating_expenses;
        let operating_profit = gross_profit - total_operating_expenses;
        let ebt = operating_profit + other_income - other_expenses;
        let net_profit = ebt - tax_expense;

        Self {
            revenue,
            sales_returns,
            cogs,
            salaries,
            rent,
            utilities,
            depreciation,
            other_operating_expenses,
            other_income,
            other_expenses,
            tax_expense,
            net_revenue,
            gross_profit,
            total_operating_expenses,
            operating_profit,
            ebt,
            net_profit,
        }
    }

    /// The resolved amount for a single statement line
    pub fn quantity(&self, line: StatementLine) -> Money {
        match line {
            StatementLine::Revenue => self.revenue,
            StatementLine::SalesReturns => self.sales_returns,
            StatementLine::Cogs => self.cogs,
            StatementLine::Salaries => self.salaries,
            StatementLine::Rent => self.rent,
            StatementLine::Utilities => self.utilities,
            StatementLine::Depreciation => self.depreciation,
            StatementLine::OtherOperatingExpenses => self.other_operating_expenses,
            StatementLine::OtherIncome => self.other_income,
            StatementLine::OtherExpenses => self.other_expenses,
            StatementLine::TaxExpense => self.tax_expense,
        }
    }
}

/// One labelled, signed amount of the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementRow {
    pub label: &'static str,
    pub amount: Money,
}

impl StatementRow {
    fn new(label: &'static str, amount: Money) -> Self {
        Self { label, amount }
    }
}

/// Profit measures as a percentage of net revenue
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub gross_profit: f64,
    pub operating_profit: f64,
    pub net_profit: f64,
}

/// `value / net_revenue * 100`, or 0 when there is no net revenue
pub fn margin(value: Money, net_revenue: Money) -> f64 {
    if net_revenue.is_zero() {
        0.0
    } else {
        value.as_f64() / net_revenue.as_f64() * 100.0
    }
}

/// Income statement derived from a set of transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatement {
    pub figures: StatementFigures,
    /// Number of transactions the statement was built from
    pub transaction_count: usize,
}

impl IncomeStatement {
    /// Build a statement from transactions using the given taxonomy
    pub fn generate(transactions: &[TransactionRecord], taxonomy: &Taxonomy) -> Self {
        let totals = CategoryTotals::from_transactions(transactions);
        Self::from_totals(&totals, taxonomy)
    }

    /// Build a statement from precomputed category sums
    pub fn from_totals(totals: &CategoryTotals, taxonomy: &Taxonomy) -> Self {
        let figures = StatementFigures::from_totals(totals, taxonomy);
        tracing::debug!(
            transactions = totals.transaction_count(),
            net_profit = %figures.net_profit,
            "income statement computed"
        );

        Self {
            figures,
            transaction_count: totals.transaction_count(),
        }
    }

    /// Whether any transactions fed this statement
    pub fn has_data(&self) -> bool {
        self.transaction_count > 0
    }

    /// Statement rows in presentation order, deductions negated
    pub fn line_items(&self) -> Vec<StatementRow> {
        let f = &self.figures;
        vec![
            StatementRow::new("Sales / Service Revenue", f.revenue),
            StatementRow::new("Less: Sales Returns & Discounts", -f.sales_returns),
            StatementRow::new("Net Revenue", f.net_revenue),
            StatementRow::new("Less: Cost of Goods Sold (COGS)", -f.cogs),
            StatementRow::new("Gross Profit", f.gross_profit),
            StatementRow::new("- Salaries & Wages", -f.salaries),
            StatementRow::new("- Rent Expense", -f.rent),
            StatementRow::new("- Utilities", -f.utilities),
            StatementRow::new("- Depreciation", -f.depreciation),
            StatementRow::new("- Other Operating Expenses", -f.other_operating_expenses),
            StatementRow::new("Total Operating Expenses", -f.total_operating_expenses),
            StatementRow::new("Operating Profit (EBIT)", f.operating_profit),
            StatementRow::new("Add: Other Income", f.other_income),
            StatementRow::new("Less: Other Expenses", -f.other_expenses),
            StatementRow::new("Earnings Before Tax (EBT)", f.ebt),
            StatementRow::new("Less: Tax Expense", -f.tax_expense),
            StatementRow::new("Net Profit / (Loss)", f.net_profit),
        ]
    }

    /// Gross, operating and net margins
    pub fn margins(&self) -> Margins {
        let f = &self.figures;
        Margins {
            gross_profit: margin(f.gross_profit, f.net_revenue),
            operating_profit: margin(f.operating_profit, f.net_revenue),
            net_profit: margin(f.net_profit, f.net_revenue),
        }
    }

    /// Format the statement for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        const WIDTH: usize = 56;
        let amount_heading = format!("Amount ({})", currency_symbol);

        let mut output = String::new();
        output.push_str(&format_header("Income Statement", WIDTH));
        output.push('\n');
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<40} {:>15}\n", "Particulars", amount_heading));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for row in self.line_items() {
            if row.label == "- Salaries & Wages" {
                output.push_str(&format!("{:<40}\n", OPERATING_EXPENSES_HEADING));
            }
            output.push_str(&format!("{:<40} {:>15}\n", row.label, row.amount));
        }

        output.push_str(&separator(WIDTH));
        output.push('\n');

        let margins = self.margins();
        output.push_str(&format!(
            "{:<40} {:>15}\n",
            "Gross Profit Margin",
            format_margin(margins.gross_profit)
        ));
        output.push_str(&format!(
            "{:<40} {:>15}\n",
            "Operating Profit Margin",
            format_margin(margins.operating_profit)
        ));
        output.push_str(&format!(
            "{:<40} {:>15}\n",
            "Net Profit Margin",
            format_margin(margins.net_profit)
        ));

        output
    }

    /// Export the statement as a two-column CSV table
    pub fn export_csv<W: Write>(&self, writer: W, currency_symbol: &str) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        let amount_heading = format!("Amount ({})", currency_symbol);
        csv.write_record(["Particulars", amount_heading.as_str()])
            .map_err(export_err)?;

        for row in self.line_items() {
            if row.label == "- Salaries & Wages" {
                csv.write_record([OPERATING_EXPENSES_HEADING, ""])
                    .map_err(export_err)?;
            }
            let amount = row.amount.to_string();
            csv.write_record([row.label, amount.as_str()])
                .map_err(export_err)?;
        }

        csv.flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Compute an income statement using the default (granular) taxonomy
pub fn compute_income_statement(transactions: &[TransactionRecord]) -> IncomeStatement {
    IncomeStatement::generate(transactions, &Taxonomy::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerStore;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn txn(category: &str, units: i64) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Category::new(category),
            "",
            Money::from_units(units),
        )
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            txn("Sales / Service Revenue", 1000),
            txn("Cost of Goods Sold (COGS)", 400),
            txn("Rent Expense", 100),
        ]
    }

    #[test]
    fn test_concrete_scenario() {
        let mut store = LedgerStore::new();
        for record in sample() {
            store.add_transaction(record).unwrap();
        }

        let statement = compute_income_statement(store.transactions());
        let f = statement.figures;
        assert_eq!(f.net_revenue, Money::from_units(1000));
        assert_eq!(f.gross_profit, Money::from_units(600));
        assert_eq!(f.total_operating_expenses, Money::from_units(100));
        assert_eq!(f.operating_profit, Money::from_units(500));
        assert_eq!(f.ebt, Money::from_units(500));
        assert_eq!(f.net_profit, Money::from_units(500));

        let margins = statement.margins();
        assert!((margins.gross_profit - 60.0).abs() < 1e-9);
        assert!((margins.operating_profit - 50.0).abs() < 1e-9);
        assert!((margins.net_profit - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let statement = compute_income_statement(&[]);
        assert!(!statement.has_data());
        assert_eq!(statement.figures, StatementFigures::default());
        assert_eq!(statement.margins(), Margins::default());
        assert!(statement
            .line_items()
            .iter()
            .all(|row| row.amount.is_zero()));
    }

    #[test]
    fn test_full_chain_of_subtotals() {
        let transactions = vec![
            txn("Sales / Service Revenue", 5000),
            txn("Sales Returns & Discounts", 200),
            txn("Cost of Goods Sold (COGS)", 1800),
            txn("Salaries & Wages", 900),
            txn("Rent Expense", 400),
            txn("Utilities", 150),
            txn("Depreciation", 100),
            txn("Other Operating Expenses", 50),
            txn("Other Income", 300),
            txn("Other Expenses", 80),
            txn("Tax Expense", 420),
        ];
        let f = compute_income_statement(&transactions).figures;

        assert_eq!(f.net_revenue, Money::from_units(4800));
        assert_eq!(f.gross_profit, Money::from_units(3000));
        assert_eq!(f.total_operating_expenses, Money::from_units(1600));
        assert_eq!(f.operating_profit, Money::from_units(1400));
        assert_eq!(f.ebt, Money::from_units(1620));
        assert_eq!(f.net_profit, Money::from_units(1200));
    }

    #[test]
    fn test_same_category_is_summed() {
        let transactions = vec![
            txn("Sales / Service Revenue", 100),
            txn("Sales / Service Revenue", 250),
        ];
        let f = compute_income_statement(&transactions).figures;
        assert_eq!(f.revenue, Money::from_units(350));
    }

    #[test]
    fn test_unmapped_categories_are_ignored() {
        let mut transactions = sample();
        transactions.push(txn("Current Asset", 9999));
        transactions.push(txn("Not A Category", 12345));

        let statement = compute_income_statement(&transactions);
        assert_eq!(statement.figures, compute_income_statement(&sample()).figures);
        assert_eq!(statement.transaction_count, 5);
    }

    #[test]
    fn test_incremental_totals_match_batch() {
        let transactions = sample();
        let batch = compute_income_statement(&transactions);

        let mut totals = CategoryTotals::default();
        for record in transactions.iter().rev() {
            totals.add(record);
        }
        let incremental = IncomeStatement::from_totals(&totals, &Taxonomy::default());

        assert_eq!(batch, incremental);
    }

    #[test]
    fn test_lookup_defaults_to_zero() {
        let totals = CategoryTotals::from_transactions(&sample());
        assert_eq!(totals.lookup("Rent Expense"), Money::from_units(100));
        assert_eq!(totals.lookup("Tax Expense"), Money::zero());
        assert_eq!(totals.entries().len(), 3);
    }

    #[test]
    fn test_margin_guard() {
        assert_eq!(margin(Money::from_units(-50), Money::zero()), 0.0);
        // Returns cancelling all revenue leave nothing to divide by
        let f = compute_income_statement(&[
            txn("Sales / Service Revenue", 100),
            txn("Sales Returns & Discounts", 100),
            txn("Rent Expense", 10),
        ]);
        assert_eq!(f.margins().net_profit, 0.0);
    }

    #[test]
    fn test_line_items_order_and_signs() {
        let statement = compute_income_statement(&sample());
        let rows = statement.line_items();

        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].label, "Sales / Service Revenue");
        assert_eq!(rows[3].amount, Money::from_units(-400));
        assert_eq!(rows[6].amount, Money::from_units(-100));
        assert_eq!(rows[10].amount, Money::from_units(-100));
        assert_eq!(rows[16].label, "Net Profit / (Loss)");
        assert_eq!(rows[16].amount, Money::from_units(500));
    }

    #[test]
    fn test_broad_taxonomy_statement() {
        let transactions = vec![
            txn("Revenue Accounts", 800),
            txn("Contra-Revenue Accounts (Reduce revenue)", 50),
            txn("Operating Expenses (Day-to-day business costs)", 250),
        ];
        let statement = IncomeStatement::generate(&transactions, &Taxonomy::broad());
        assert_eq!(statement.figures.net_revenue, Money::from_units(750));
        assert_eq!(statement.figures.operating_profit, Money::from_units(500));
    }

    #[test]
    fn test_format_terminal() {
        let output = compute_income_statement(&sample()).format_terminal("₹");
        assert!(output.contains("Amount (₹)"));
        assert!(output.contains("Less: Operating Expenses:"));
        assert!(output.contains("Gross Profit Margin"));
        assert!(output.contains("60.0%"));
        assert!(output.contains("50.0%"));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        compute_income_statement(&sample())
            .export_csv(&mut buffer, "₹")
            .unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Particulars,Amount (₹)");
        assert_eq!(lines[1], "Sales / Service Revenue,1000.00");
        assert!(lines.contains(&"Less: Operating Expenses:,"));
        assert_eq!(lines.last(), Some(&"Net Profit / (Loss),500.00"));
        // Header, 17 rows, one heading row
        assert_eq!(lines.len(), 19);
    }
}
