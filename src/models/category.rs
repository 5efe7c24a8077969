//! Category taxonomy
//!
//! Categories double as transaction categories and journal account types.
//! The set is configuration, not code: a [`Taxonomy`] lists every accepted
//! label, its broad kind, and the income-statement line (if any) that its
//! amounts feed. Two built-in schemes are provided; a custom table can be
//! loaded from `taxonomy.json`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad accounting class of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl CategoryKind {
    /// Whether categories of this kind belong on the balance sheet
    pub fn is_balance_sheet(&self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
            Self::Equity => write!(f, "Equity"),
            Self::Revenue => write!(f, "Revenue"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// The named quantities an income statement is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementLine {
    Revenue,
    SalesReturns,
    Cogs,
    Salaries,
    Rent,
    Utilities,
    Depreciation,
    OtherOperatingExpenses,
    OtherIncome,
    OtherExpenses,
    TaxExpense,
}

impl StatementLine {
    pub const ALL: [StatementLine; 11] = [
        Self::Revenue,
        Self::SalesReturns,
        Self::Cogs,
        Self::Salaries,
        Self::Rent,
        Self::Utilities,
        Self::Depreciation,
        Self::OtherOperatingExpenses,
        Self::OtherIncome,
        Self::OtherExpenses,
        Self::TaxExpense,
    ];

    /// Label of the granular category that feeds this line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Sales / Service Revenue",
            Self::SalesReturns => "Sales Returns & Discounts",
            Self::Cogs => "Cost of Goods Sold (COGS)",
            Self::Salaries => "Salaries & Wages",
            Self::Rent => "Rent Expense",
            Self::Utilities => "Utilities",
            Self::Depreciation => "Depreciation",
            Self::OtherOperatingExpenses => "Other Operating Expenses",
            Self::OtherIncome => "Other Income",
            Self::OtherExpenses => "Other Expenses",
            Self::TaxExpense => "Tax Expense",
        }
    }

    fn kind(&self) -> CategoryKind {
        match self {
            Self::Revenue | Self::OtherIncome => CategoryKind::Revenue,
            _ => CategoryKind::Expense,
        }
    }
}

/// A category label resolved against the active taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Wrap a label without checking it against a taxonomy
    ///
    /// Use [`Taxonomy::resolve`] for user input.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<StatementLine> for Category {
    fn from(line: StatementLine) -> Self {
        Self::new(line.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One row of the taxonomy table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub label: String,
    pub kind: CategoryKind,
    /// Statement line fed by this category; `None` means the statement ignores it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<StatementLine>,
}

impl CategoryDef {
    pub fn new(label: impl Into<String>, kind: CategoryKind, line: Option<StatementLine>) -> Self {
        Self {
            label: label.into(),
            kind,
            line,
        }
    }
}

/// Which built-in category table to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyScheme {
    /// Balance-sheet classes plus individual income-statement line items
    #[default]
    Granular,
    /// Broad account classes only ("Revenue Accounts", "Operating Expenses ...")
    Broad,
}

impl TaxonomyScheme {
    pub fn taxonomy(&self) -> Taxonomy {
        match self {
            Self::Granular => Taxonomy::granular(),
            Self::Broad => Taxonomy::broad(),
        }
    }
}

/// Ordered table of accepted categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: Vec<CategoryDef>,
}

const ASSET_CLASSES: [(&str, CategoryKind); 6] = [
    ("Current Asset", CategoryKind::Asset),
    ("Non-Current Asset", CategoryKind::Asset),
    ("Contra-Asset (Reduce asset value)", CategoryKind::Asset),
    ("Liabilities", CategoryKind::Liability),
    (
        "Contra-Liability Accounts (Reduce liability value)",
        CategoryKind::Liability,
    ),
    ("Equity Accounts / Capital", CategoryKind::Equity),
];

impl Taxonomy {
    /// Balance-sheet classes followed by one category per statement line
    pub fn granular() -> Self {
        let mut categories: Vec<CategoryDef> = ASSET_CLASSES
            .iter()
            .map(|(label, kind)| CategoryDef::new(*label, *kind, None))
            .collect();

        categories.extend(
            StatementLine::ALL
                .iter()
                .map(|line| CategoryDef::new(line.label(), line.kind(), Some(*line))),
        );

        Self { categories }
    }

    /// The ten broad account classes
    ///
    /// Revenue, contra-revenue and both expense classes map onto the nearest
    /// statement line so that a statement can still be derived.
    pub fn broad() -> Self {
        let mut categories: Vec<CategoryDef> = ASSET_CLASSES
            .iter()
            .map(|(label, kind)| CategoryDef::new(*label, *kind, None))
            .collect();

        categories.extend([
            CategoryDef::new(
                "Revenue Accounts",
                CategoryKind::Revenue,
                Some(StatementLine::Revenue),
            ),
            CategoryDef::new(
                "Contra-Revenue Accounts (Reduce revenue)",
                CategoryKind::Revenue,
                Some(StatementLine::SalesReturns),
            ),
            CategoryDef::new(
                "Operating Expenses (Day-to-day business costs)",
                CategoryKind::Expense,
                Some(StatementLine::OtherOperatingExpenses),
            ),
            CategoryDef::new(
                "Non-Operating Expenses (Not part of core operations)",
                CategoryKind::Expense,
                Some(StatementLine::OtherExpenses),
            ),
        ]);

        Self { categories }
    }

    /// Find a category by label (case-insensitive, surrounding whitespace ignored)
    pub fn resolve(&self, label: &str) -> Option<Category> {
        self.find(label).map(|def| Category::new(def.label.clone()))
    }

    /// Find the definition for a label
    pub fn find(&self, label: &str) -> Option<&CategoryDef> {
        let wanted = label.trim();
        self.categories
            .iter()
            .find(|def| def.label.eq_ignore_ascii_case(wanted))
    }

    /// Statement line fed by a category, if the taxonomy maps it
    pub fn line_for(&self, category: &Category) -> Option<StatementLine> {
        self.categories
            .iter()
            .find(|def| def.label == category.label())
            .and_then(|def| def.line)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Check that labels are unique and non-empty
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for def in &self.categories {
            let key = def.label.trim().to_lowercase();
            if key.is_empty() {
                return Err("Category label cannot be empty".into());
            }
            if !seen.insert(key) {
                return Err(format!("Duplicate category label: {}", def.label));
            }
        }
        Ok(())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::granular()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granular_contains_every_statement_line() {
        let taxonomy = Taxonomy::granular();
        assert_eq!(taxonomy.len(), 17);
        for line in StatementLine::ALL {
            let category = taxonomy.resolve(line.label()).unwrap();
            assert_eq!(taxonomy.line_for(&category), Some(line));
        }
        assert!(taxonomy.validate().is_ok());
    }

    #[test]
    fn test_balance_sheet_classes_are_unmapped() {
        let taxonomy = Taxonomy::granular();
        let cash = taxonomy.resolve("current asset").unwrap();
        assert_eq!(cash.label(), "Current Asset");
        assert_eq!(taxonomy.line_for(&cash), None);
        assert!(taxonomy.find("Current Asset").unwrap().kind.is_balance_sheet());
    }

    #[test]
    fn test_broad_scheme_maps_revenue_accounts() {
        let taxonomy = TaxonomyScheme::Broad.taxonomy();
        let revenue = taxonomy.resolve("Revenue Accounts").unwrap();
        assert_eq!(taxonomy.line_for(&revenue), Some(StatementLine::Revenue));
        assert!(taxonomy.resolve("Rent Expense").is_none());
        assert_eq!(taxonomy.len(), 10);
    }

    #[test]
    fn test_resolve_unknown_label() {
        assert!(Taxonomy::default().resolve("Groceries").is_none());
        assert_eq!(
            Taxonomy::default().line_for(&Category::new("Groceries")),
            None
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let taxonomy = Taxonomy {
            categories: vec![
                CategoryDef::new("Rent", CategoryKind::Expense, None),
                CategoryDef::new("rent ", CategoryKind::Expense, None),
            ],
        };
        assert!(taxonomy.validate().is_err());
    }

    #[test]
    fn test_taxonomy_json_shape() {
        let json = r#"{"categories":[{"label":"Fees","kind":"revenue","line":"revenue"}]}"#;
        let taxonomy: Taxonomy = serde_json::from_str(json).unwrap();
        let fees = taxonomy.resolve("fees").unwrap();
        assert_eq!(taxonomy.line_for(&fees), Some(StatementLine::Revenue));
    }
}
