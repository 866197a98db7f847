//! Hierarchy Projections
//!
//! Pure helpers turning the aggregate Plan → Bucket → Task payload into
//! what the raw, tree and table views render.

use serde_json::Value;

use crate::models::PlanNode;

/// Colour of the "complete" progress pill
pub const COMPLETE_COLOR: &str = "#10b981";
/// Colour of every other progress pill
pub const IN_PROGRESS_COLOR: &str = "#3b82f6";

/// Binary progress state; only exactly 100 is complete. Values outside
/// 0..=100 are not validated and count as in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Complete,
    InProgress,
}

impl Progress {
    pub fn from_percent(percent: i64) -> Self {
        if percent == 100 {
            Progress::Complete
        } else {
            Progress::InProgress
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Progress::Complete => COMPLETE_COLOR,
            Progress::InProgress => IN_PROGRESS_COLOR,
        }
    }
}

/// One task with its plan and bucket context repeated
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub plan_id: i64,
    pub plan_name: String,
    pub bucket_id: i64,
    pub bucket_name: String,
    pub task_id: i64,
    pub task_title: String,
    pub percent_complete: i64,
}

impl SummaryRow {
    /// Lowercased text the table filter searches
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.plan_name, self.bucket_name, self.task_title, self.task_id
        )
        .to_lowercase()
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter.is_empty() || self.search_text().contains(&filter.to_lowercase())
    }
}

/// One row per task, in payload order
pub fn flatten(plans: &[PlanNode]) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    for plan in plans {
        for bucket in &plan.buckets {
            for task in &bucket.tasks {
                rows.push(SummaryRow {
                    plan_id: plan.id,
                    plan_name: plan.name.clone(),
                    bucket_id: bucket.id,
                    bucket_name: bucket.name.clone(),
                    task_id: task.id,
                    task_title: task.title.clone(),
                    percent_complete: task.percent_complete,
                });
            }
        }
    }
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Plan,
    Bucket,
    Task,
}

impl BranchKind {
    pub fn icon(self) -> &'static str {
        match self {
            BranchKind::Plan => "📁",
            BranchKind::Bucket => "🗄️",
            BranchKind::Task => "📝",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BranchKind::Plan => "tree-node plan-node",
            BranchKind::Bucket => "tree-node bucket-node",
            BranchKind::Task => "tree-node task-node",
        }
    }
}

/// Node of the tree view. Plans and buckets always carry a child list,
/// possibly empty; tasks carry a percent instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeBranch {
    pub kind: BranchKind,
    pub id: i64,
    pub label: String,
    pub percent_complete: Option<i64>,
    pub children: Vec<TreeBranch>,
}

impl TreeBranch {
    pub fn has_child_list(&self) -> bool {
        self.kind != BranchKind::Task
    }
}

/// Nested Plan → Bucket → Task branches, in payload order
pub fn tree(plans: &[PlanNode]) -> Vec<TreeBranch> {
    plans
        .iter()
        .map(|plan| TreeBranch {
            kind: BranchKind::Plan,
            id: plan.id,
            label: plan.name.clone(),
            percent_complete: None,
            children: plan
                .buckets
                .iter()
                .map(|bucket| TreeBranch {
                    kind: BranchKind::Bucket,
                    id: bucket.id,
                    label: bucket.name.clone(),
                    percent_complete: None,
                    children: bucket
                        .tasks
                        .iter()
                        .map(|task| TreeBranch {
                            kind: BranchKind::Task,
                            id: task.id,
                            label: task.title.clone(),
                            percent_complete: Some(task.percent_complete),
                            children: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// Rows visible under a substring filter (case-insensitive)
pub fn filter_rows(rows: Vec<SummaryRow>, filter: &str) -> Vec<SummaryRow> {
    let needle = filter.to_lowercase();
    rows.into_iter().filter(|row| row.matches(&needle)).collect()
}

/// Pretty-printed payload for the raw view
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BucketNode, TaskNode};
    use serde_json::json;

    fn make_hierarchy(plans: i64, buckets: i64, tasks: i64) -> Vec<PlanNode> {
        let mut next_task = 1;
        (1..=plans)
            .map(|p| PlanNode {
                id: p,
                name: format!("Plan {}", p),
                buckets: (1..=buckets)
                    .map(|b| {
                        let bucket_id = p * 100 + b;
                        BucketNode {
                            id: bucket_id,
                            name: format!("Bucket {}", bucket_id),
                            plan_id: p,
                            tasks: (0..tasks)
                                .map(|_| {
                                    let id = next_task;
                                    next_task += 1;
                                    TaskNode {
                                        id,
                                        title: format!("Task {}", id),
                                        percent_complete: 0,
                                        bucket_id,
                                        plan_id: p,
                                    }
                                })
                                .collect(),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    #[test]
    fn test_flatten_row_count_and_ancestry() {
        let plans = make_hierarchy(2, 2, 3);
        let rows = flatten(&plans);

        assert_eq!(rows.len(), 12);
        for row in &rows {
            let plan = plans.iter().find(|p| p.id == row.plan_id).unwrap();
            assert_eq!(row.plan_name, plan.name);
            let bucket = plan.buckets.iter().find(|b| b.id == row.bucket_id).unwrap();
            assert_eq!(row.bucket_name, bucket.name);
            assert!(bucket.tasks.iter().any(|t| t.id == row.task_id && t.title == row.task_title));
        }
    }

    #[test]
    fn test_flatten_skips_empty_branches() {
        let plans = vec![PlanNode { id: 1, name: "Empty".into(), buckets: vec![] }];
        assert!(flatten(&plans).is_empty());
    }

    #[test]
    fn test_tree_keeps_empty_plans_and_buckets() {
        let mut plans = make_hierarchy(1, 1, 2);
        plans.push(PlanNode { id: 9, name: "Empty".into(), buckets: vec![] });
        plans[0].buckets.push(BucketNode { id: 150, name: "Idle".into(), plan_id: 1, tasks: vec![] });

        let branches = tree(&plans);

        assert_eq!(branches.len(), 2);
        let empty = &branches[1];
        assert_eq!((empty.kind, empty.label.as_str()), (BranchKind::Plan, "Empty"));
        assert!(empty.has_child_list());
        assert!(empty.children.is_empty());

        let buckets = &branches[0].children;
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].children.len(), 2);
        assert!(buckets[1].has_child_list());
        assert!(buckets[1].children.is_empty());

        let task = &buckets[0].children[0];
        assert_eq!(task.kind, BranchKind::Task);
        assert_eq!(task.percent_complete, Some(0));
        assert!(!task.has_child_list());
    }

    #[test]
    fn test_filter_matches_task_id() {
        let plans = make_hierarchy(1, 1, 6);
        let rows = filter_rows(flatten(&plans), "5");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].task_id, 5);
    }

    #[test]
    fn test_filter_is_case_insensitive_over_all_fields() {
        let plans = make_hierarchy(2, 1, 1);
        let rows = flatten(&plans);

        assert_eq!(filter_rows(rows.clone(), "PLAN 2").len(), 1);
        assert_eq!(filter_rows(rows.clone(), "bucket").len(), 2);
        assert_eq!(filter_rows(rows.clone(), "task 1").len(), 1);
        assert_eq!(filter_rows(rows.clone(), "").len(), 2);
        assert!(filter_rows(rows, "nothing").is_empty());
    }

    #[test]
    fn test_filter_equals_reference_predicate() {
        let rows = flatten(&make_hierarchy(2, 2, 3));
        for needle in ["1", "plan 1 bucket", "Task 1", "x"] {
            let expected: Vec<_> = rows
                .iter()
                .filter(|r| {
                    format!("{} {} {} {}", r.plan_name, r.bucket_name, r.task_title, r.task_id)
                        .to_lowercase()
                        .contains(&needle.to_lowercase())
                })
                .cloned()
                .collect();
            assert_eq!(filter_rows(rows.clone(), needle), expected, "filter {:?}", needle);
        }
    }

    #[test]
    fn test_completion_color_rule() {
        assert_eq!(Progress::from_percent(100), Progress::Complete);
        for percent in [0, 1, 50, 99] {
            assert_eq!(Progress::from_percent(percent), Progress::InProgress);
        }
        // not validated
        assert_eq!(Progress::from_percent(150).color(), IN_PROGRESS_COLOR);
        assert_eq!(Progress::Complete.color(), COMPLETE_COLOR);
    }

    #[test]
    fn test_pretty_prints_indented() {
        let text = pretty(&json!({ "plans": [] }));
        assert_eq!(text, "{\n  \"plans\": []\n}");
    }
}
