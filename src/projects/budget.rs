//! Budget categories with a ledger and a spending bar chart.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

const TITLE_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 23;

/// One deposit (positive) or withdrawal (negative)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

/// A named spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub ledger: Vec<LedgerEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        self.ledger.push(LedgerEntry {
            amount,
            description: description.into(),
        });
    }

    /// Record a withdrawal if the balance covers it.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            return false;
        }
        self.ledger.push(LedgerEntry {
            amount: -amount,
            description: description.into(),
        });
        true
    }

    pub fn balance(&self) -> f64 {
        self.ledger.iter().map(|e| e.amount).sum()
    }

    /// Whether `amount` can be taken out
    pub fn check_funds(&self, amount: f64) -> bool {
        self.balance() >= amount
    }

    /// Move `amount` into `other`, recording both sides.
    pub fn transfer(&mut self, amount: f64, other: &mut Category) -> bool {
        if !self.check_funds(amount) {
            return false;
        }
        self.withdraw(amount, format!("Transfer to {}", other.name));
        other.deposit(amount, format!("Transfer from {}", self.name));
        true
    }

    /// Sum of all withdrawals as a positive number
    pub fn spent(&self) -> f64 {
        -self.ledger.iter().map(|e| e.amount).filter(|a| *a < 0.0).sum::<f64>()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:*^width$}", self.name, width = TITLE_WIDTH)?;
        for entry in &self.ledger {
            let description: String = entry.description.chars().take(DESCRIPTION_WIDTH).collect();
            writeln!(f, "{:<width$}{:7.2}", description, entry.amount, width = DESCRIPTION_WIDTH)?;
        }
        write!(f, "Total: {:.2}", self.balance())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Bar chart of the share of all withdrawals taken by each category.
pub fn create_spend_chart(categories: &[Category]) -> Result<String> {
    if categories.is_empty() {
        return Err(DrillError::validation("the spend chart needs at least one category"));
    }

    let spent: Vec<f64> = categories.iter().map(Category::spent).collect();
    let total: f64 = spent.iter().sum();
    let percentages: Vec<i64> = spent
        .iter()
        .map(|s| if total > 0.0 { (s / total * 100.0).round() as i64 } else { 0 })
        .collect();

    let mut chart = String::from("Percentage spent by category\n");
    for level in (0..=100).rev().step_by(10) {
        chart.push_str(&format!("{:>3}| ", level));
        for percent in &percentages {
            chart.push_str(if *percent >= level { "o  " } else { "   " });
        }
        chart.push('\n');
    }
    chart.push_str("    ");
    chart.push_str(&"-".repeat(3 * categories.len() + 1));

    let names: Vec<Vec<char>> = categories.iter().map(|c| capitalize(&c.name).chars().collect()).collect();
    let longest = names.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..longest {
        chart.push_str("\n     ");
        for name in &names {
            chart.push(name.get(row).copied().unwrap_or(' '));
            chart.push_str("  ");
        }
    }
    Ok(chart)
}

/// Load a list of categories from a JSON file
pub fn load_categories<P: AsRef<Path>>(path: P) -> Result<Vec<Category>> {
    let content = fs::read_to_string(&path)?;
    let categories = serde_json::from_str(&content)?;
    Ok(categories)
}

/// Save a list of categories as pretty JSON
pub fn save_categories<P: AsRef<Path>>(path: P, categories: &[Category]) -> Result<()> {
    let content = serde_json::to_string_pretty(categories)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Food, Clothing and Auto with a few transactions
pub fn demo_categories() -> Vec<Category> {
    let mut food = Category::new("Food");
    food.deposit(1000.0, "deposit");
    food.withdraw(10.15, "groceries");
    food.withdraw(15.89, "restaurant and more food for dessert");

    let mut clothing = Category::new("Clothing");
    food.transfer(50.0, &mut clothing);

    let mut auto = Category::new("Auto");
    auto.deposit(1000.0, "initial deposit");
    auto.withdraw(15.0, "");

    vec![food, clothing, auto]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_display() {
        let categories = demo_categories();
        assert_eq!(
            categories[0].to_string(),
            "*************Food*************\ndeposit                1000.00\ngroceries               -10.15\nrestaurant and more foo -15.89\nTransfer to Clothing    -50.00\nTotal: 923.96"
        );
        assert_eq!(
            categories[1].to_string(),
            "***********Clothing***********\nTransfer from Food       50.00\nTotal: 50.00"
        );
    }

    #[test]
    fn test_insufficient_funds() {
        let mut food = Category::new("Food");
        food.deposit(20.0, "");
        let mut other = Category::new("Other");
        assert!(!food.withdraw(25.0, "too much"));
        assert!(!food.transfer(25.0, &mut other));
        assert!(food.check_funds(20.0));
        assert_eq!(food.ledger.len(), 1);
        assert!(other.ledger.is_empty());
    }

    #[test]
    fn test_spend_chart() {
        let chart = create_spend_chart(&demo_categories()).unwrap();
        let expected = "Percentage spent by category\n100|          \n 90|          \n 80| o        \n 70| o        \n 60| o        \n 50| o        \n 40| o        \n 30| o        \n 20| o        \n 10| o     o  \n  0| o  o  o  \n    ----------\n     F  C  A  \n     o  l  u  \n     o  o  t  \n     d  t  o  \n        h     \n        i     \n        n     \n        g     ";
        assert_eq!(chart, expected);
    }

    #[test]
    fn test_spend_chart_without_withdrawals() {
        let mut savings = Category::new("savings");
        savings.deposit(10.0, "");
        let chart = create_spend_chart(&[savings]).unwrap();
        assert!(chart.contains("\n 10|    \n  0| o  \n"));
        assert!(chart.ends_with("\n     S  \n     a  \n     v  \n     i  \n     n  \n     g  \n     s  "));
        assert!(create_spend_chart(&[]).is_err());
    }
}
