//! Expense tracker with an optional JSON ledger and a text menu.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
}

/// Recorded expenses in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTracker {
    pub expenses: Vec<Expense>,
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger. A missing file is an empty tracker.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no expense ledger yet");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)?;
        let tracker = serde_json::from_str(&content)?;
        Ok(tracker)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Record an expense. The amount must be a non-negative number and the
    /// category must not be blank.
    pub fn add_expense(&mut self, amount: f64, category: &str) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DrillError::validation(format!(
                "amount must be a non-negative number, got {}",
                amount
            )));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(DrillError::validation("category cannot be empty"));
        }
        self.expenses.push(Expense {
            amount,
            category: category.to_string(),
        });
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn filter_by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses.iter().filter(move |e| e.category == category)
    }
}

pub fn format_expense(expense: &Expense) -> String {
    format!("Amount: ${:.2}, Category: {}", expense.amount, expense.category)
}

const MENU: &str = "\nExpense Tracker\n\
1. Add Expense\n\
2. List all expenses\n\
3. Show total expenses\n\
4. Filter expenses by category\n\
5. Exit\n";

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu loop until the user picks "Exit" or input ends.
pub fn run_interactive<R: BufRead, W: Write>(tracker: &mut ExpenseTracker, mut input: R, output: &mut W) -> Result<()> {
    loop {
        write!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, output, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(amount) = prompt(&mut input, output, "Enter amount: $")? else {
                    break;
                };
                let Ok(amount) = amount.parse::<f64>() else {
                    writeln!(output, "Invalid amount: {}", amount)?;
                    continue;
                };
                let Some(category) = prompt(&mut input, output, "Enter category: ")? else {
                    break;
                };
                if let Err(e) = tracker.add_expense(amount, &category) {
                    writeln!(output, "{}", e)?;
                }
            }
            "2" => {
                writeln!(output, "\nAll Expenses:")?;
                for expense in &tracker.expenses {
                    writeln!(output, "{}", format_expense(expense))?;
                }
            }
            "3" => writeln!(output, "\nTotal Expenses: ${:.2}", tracker.total())?,
            "4" => {
                let Some(category) = prompt(&mut input, output, "Enter category to filter: ")? else {
                    break;
                };
                writeln!(output, "\nExpenses for {}:", category)?;
                for expense in tracker.filter_by_category(&category) {
                    writeln!(output, "{}", format_expense(expense))?;
                }
            }
            "5" => {
                writeln!(output, "Exiting the program.")?;
                break;
            }
            other => writeln!(output, "Invalid choice '{}'. Please enter 1-5.", other)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_add_and_total() {
        let mut tracker = ExpenseTracker::new();
        tracker.add_expense(12.5, "Food").unwrap();
        tracker.add_expense(7.25, "Travel").unwrap();
        tracker.add_expense(3.0, "Food").unwrap();
        assert_eq!(tracker.total(), 22.75);
        assert_eq!(tracker.filter_by_category("Food").count(), 2);
        assert_eq!(tracker.filter_by_category("food").count(), 0);
        assert_eq!(format_expense(&tracker.expenses[0]), "Amount: $12.50, Category: Food");
    }

    #[test]
    fn test_rejects_bad_expenses() {
        let mut tracker = ExpenseTracker::new();
        assert!(tracker.add_expense(-1.0, "Food").is_err());
        assert!(tracker.add_expense(f64::INFINITY, "Food").is_err());
        assert!(tracker.add_expense(1.0, "   ").is_err());
        assert!(tracker.expenses.is_empty());
    }

    #[test]
    fn test_interactive_session() {
        let mut tracker = ExpenseTracker::new();
        let input = Cursor::new("1\n12.5\nFood\n1\nabc\n1\n4\nBooks\n3\n4\nFood\n5\n");
        let mut output = Vec::new();
        run_interactive(&mut tracker, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(tracker.expenses.len(), 2);
        assert!(text.contains("Invalid amount: abc"));
        assert!(text.contains("Total Expenses: $16.50"));
        assert!(text.contains("Expenses for Food:\nAmount: $12.50, Category: Food\n"));
        assert!(text.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_interactive_stops_at_eof() {
        let mut tracker = ExpenseTracker::new();
        let mut output = Vec::new();
        run_interactive(&mut tracker, Cursor::new("2\n"), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("All Expenses:"));
    }
}
