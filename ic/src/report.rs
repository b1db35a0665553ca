//! Run report and console summary

use colored::*;

use crate::category::Category;

/// What happened to one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Issue filed, with the reference printed by the tracker if any
    Created { reference: Option<String> },
    /// Would have been filed
    DryRun,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub file: String,
    pub category: Category,
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, ItemStatus::Failed { .. })
    }
}

/// Counters and outcomes for one run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub dry_run: bool,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<ItemOutcome>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: ItemOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when nothing failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Outcomes that did not produce an issue
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Number of attempted items per category, in category order
    pub fn breakdown(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.outcomes.iter().filter(|o| o.category == *c).count()))
            .filter(|(_, n)| *n > 0)
            .collect()
    }

    /// Print the end-of-run summary
    pub fn print_summary(&self, issues_url: &str) {
        let rule = "=".repeat(50);

        println!();
        println!("{}", rule);
        println!("{} Issue creation process completed!", "✓".green());
        println!("{}", rule);
        println!();
        println!("Summary:");
        println!("  - Attempted: {}", self.total());
        if self.dry_run {
            println!("  - Would create: {}", self.succeeded.to_string().green());
        } else {
            println!("  - Successfully created: {}", self.succeeded.to_string().green());
        }
        if self.failed > 0 {
            println!("  - Failed: {}", self.failed.to_string().red());
            for outcome in self.failures() {
                if let ItemStatus::Failed { reason } = &outcome.status {
                    println!("      {} {} [{}]: {}", "✗".red(), outcome.file, outcome.category, reason);
                }
            }
        }
        println!();

        let breakdown = self.breakdown();
        if !breakdown.is_empty() {
            println!("Issue breakdown:");
            for (category, count) in breakdown {
                println!("  - {}: {} ({})", category.label(), count, category.marker());
            }
            println!();
        }

        println!("View all issues at: {}", issues_url.cyan());
        println!();

        if self.dry_run {
            println!("{}", "This was a dry run. Run without --dry-run to create issues.".yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(category: Category, status: ItemStatus) -> ItemOutcome {
        ItemOutcome {
            file: "issue.md".to_string(),
            category,
            status,
        }
    }

    #[test]
    fn test_record_counts() {
        let mut report = RunReport::new(false);
        report.record(outcome(Category::HighPriority, ItemStatus::Created { reference: None }));
        report.record(outcome(
            Category::HighPriority,
            ItemStatus::Failed {
                reason: "boom".to_string(),
            },
        ));
        report.record(outcome(Category::CodeQuality, ItemStatus::DryRun));

        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_failures_keep_file_and_category() {
        let mut report = RunReport::new(false);
        report.record(outcome(Category::HighPriority, ItemStatus::DryRun));
        report.record(ItemOutcome {
            file: "issue-02.md".to_string(),
            category: Category::LowPriority,
            status: ItemStatus::Failed {
                reason: "File not found".to_string(),
            },
        });

        let failures: Vec<&ItemOutcome> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].file, "issue-02.md");
        assert_eq!(failures[0].category, Category::LowPriority);
    }

    #[test]
    fn test_empty_report_succeeds() {
        let report = RunReport::new(true);
        assert_eq!(report.total(), 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_breakdown_in_category_order() {
        let mut report = RunReport::new(true);
        report.record(outcome(Category::CodeQuality, ItemStatus::DryRun));
        report.record(outcome(Category::HighPriority, ItemStatus::DryRun));
        report.record(outcome(Category::HighPriority, ItemStatus::DryRun));

        assert_eq!(
            report.breakdown(),
            vec![(Category::HighPriority, 2), (Category::CodeQuality, 1)]
        );
    }
}
