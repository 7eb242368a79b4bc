//! Report rendering — console and JSON reporters.

use serde::Serialize;

use roster_core::types::Assignment;

/// Result of solving one roster dataset.
#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    /// Dataset name from the roster file.
    pub name: String,
    /// Winning assignment (worker index per manager; empty when no
    /// candidate beat the sentinel).
    pub assignment: Assignment,
    /// Per-manager performance under the winning assignment, in manager
    /// order. Empty when the assignment is empty.
    pub manager_performance: Vec<f64>,
}

/// Full run output: one entry per dataset plus the optional combined
/// cross-roster view.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub rosters: Vec<RosterReport>,
    /// Per-manager performance of the composed cross-roster teams.
    /// Present only when more than one dataset was solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined: Option<Vec<f64>>,
}

/// Output renderer for a completed run.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &RunReport) -> Result<String, String>;
}

/// Human-readable terminal output.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║         Roster Assignment Report         ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for roster in &report.rosters {
            if roster.assignment.is_empty() {
                output.push_str(&format!(
                    "✗ {} — no assignment (all candidates degenerate)\n",
                    roster.name
                ));
                continue;
            }
            output.push_str(&format!(
                "✓ {} — assignment {:?}\n",
                roster.name, roster.assignment.worker_for_manager
            ));
            for (manager, performance) in roster.manager_performance.iter().enumerate() {
                output.push_str(&format!(
                    "    manager {} ← worker {} (performance {:.4})\n",
                    manager,
                    roster.assignment.worker_for_manager[manager],
                    performance
                ));
            }
        }

        if let Some(combined) = &report.combined {
            output.push_str("\nCombined cross-roster teams:\n");
            for (manager, performance) in combined.iter().enumerate() {
                output.push_str(&format!(
                    "    manager {manager}: team performance {performance:.4}\n"
                ));
            }
        }

        Ok(output)
    }
}

/// Machine-readable JSON output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        RunReport {
            rosters: vec![RosterReport {
                name: "lawyers".to_string(),
                assignment: Assignment::new(vec![3, 2, 1, 0]),
                manager_performance: vec![0.5, 0.4, 0.53, 0.75],
            }],
            combined: None,
        }
    }

    #[test]
    fn test_console_lists_assignment() {
        let text = ConsoleReporter.generate(&sample_report()).unwrap();
        assert!(text.contains("lawyers"));
        assert!(text.contains("[3, 2, 1, 0]"));
        assert!(text.contains("manager 0 ← worker 3"));
    }

    #[test]
    fn test_console_empty_assignment() {
        let report = RunReport {
            rosters: vec![RosterReport {
                name: "degenerate".to_string(),
                assignment: Assignment::empty(),
                manager_performance: Vec::new(),
            }],
            combined: None,
        };
        let text = ConsoleReporter.generate(&report).unwrap();
        assert!(text.contains("no assignment"));
    }

    #[test]
    fn test_json_is_parseable() {
        let text = JsonReporter.generate(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rosters"][0]["name"], "lawyers");
        assert_eq!(
            value["rosters"][0]["assignment"]["worker_for_manager"][0],
            3
        );
    }
}
