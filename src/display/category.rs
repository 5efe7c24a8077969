//! Category display formatting
//!
//! Lists the active taxonomy grouped by kind.

use crate::models::{CategoryKind, Taxonomy};

/// Format the taxonomy as a grouped list, noting which statement line each
/// category feeds
pub fn format_taxonomy(taxonomy: &Taxonomy) -> String {
    if taxonomy.is_empty() {
        return "No categories configured.\n".to_string();
    }

    let mut output = String::new();
    for kind in [
        CategoryKind::Asset,
        CategoryKind::Liability,
        CategoryKind::Equity,
        CategoryKind::Revenue,
        CategoryKind::Expense,
    ] {
        let defs: Vec<_> = taxonomy
            .categories
            .iter()
            .filter(|def| def.kind == kind)
            .collect();
        if defs.is_empty() {
            continue;
        }

        output.push_str(&format!("{}\n", kind.to_string().to_uppercase()));
        for def in defs {
            match def.line {
                Some(line) if line.label() != def.label => {
                    output.push_str(&format!("  {}  → {}\n", def.label, line.label()))
                }
                Some(_) => output.push_str(&format!("  {}\n", def.label)),
                None => output.push_str(&format!("  {}  (not on statement)\n", def.label)),
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granular_listing() {
        let output = format_taxonomy(&Taxonomy::granular());
        assert!(output.contains("ASSET\n"));
        assert!(output.contains("  Current Asset  (not on statement)\n"));
        assert!(output.contains("  Rent Expense\n"));
    }

    #[test]
    fn test_broad_listing_shows_mapping() {
        let output = format_taxonomy(&Taxonomy::broad());
        assert!(output.contains("Revenue Accounts  → Sales / Service Revenue"));
    }

    #[test]
    fn test_empty_taxonomy() {
        let taxonomy = Taxonomy { categories: vec![] };
        assert_eq!(format_taxonomy(&taxonomy), "No categories configured.\n");
    }
}
