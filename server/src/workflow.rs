//! # Search Workflow
//!
//! Per-session state machine tying filters, query execution, and result
//! projection together.
//!
//! ```text
//! Idle --(edit filter)--> Idle
//! Idle --(explicit search, criteria valid)--> Loading
//! Loading --(remote success)--> Results
//! Loading --(remote failure)--> Idle (rendered as the empty state)
//! Results --(edit filter)--> Idle  [page reset to 1]
//! Results --(premium action)--> Results  [gate only, no state change]
//! ```
//!
//! Editing filters never dispatches anything; a remote call happens only on
//! the explicit search action. Every dispatch takes a sequence number and
//! only the most recently issued one is authoritative, so a slow response
//! from a superseded query can never overwrite fresher results.

use serde::Serialize;

use lexp_providers::{
    criteria::{CriteriaError, FilterField, Platform, SearchCriteria},
    models::{ProfileRecord, SearchResult},
};

/// How many profiles render without an upgrade.
pub const VISIBLE_PROFILES: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Loading,
    Results(SearchResult),
}

#[derive(Default)]
pub struct SearchWorkflow {
    criteria: SearchCriteria,
    phase: WorkflowPhase,
    last_issued: u64,
    has_searched: bool,
}

/// What the dashboard renders: the bounded window over the current result
/// set. Zero results and a failed query produce the same view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub searched: bool,
    pub loading: bool,
    pub total_results: u64,
    pub visible: Vec<ProfileRecord>,
    pub has_more: bool,
}

/// First [`VISIBLE_PROFILES`] items in endpoint order, plus whether more
/// exist beyond the window. Pure; the result set is never reordered.
pub fn project(result: &SearchResult) -> (&[ProfileRecord], bool) {
    let end = result.items.len().min(VISIBLE_PROFILES);
    (&result.items[..end], result.items.len() > VISIBLE_PROFILES)
}

impl SearchWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn platform(&self) -> Platform {
        self.criteria.platform
    }

    /// Replaces one filter field. Any edit other than the page itself
    /// resets pagination and returns the workflow to Idle; an in-flight
    /// query is invalidated so its completion cannot land on criteria the
    /// user has already changed.
    pub fn edit_filter(
        &mut self,
        field: FilterField,
        value: &str,
    ) -> Result<&SearchCriteria, CriteriaError> {
        self.criteria.set(field, value)?;

        if field != FilterField::Page {
            self.criteria.reset_page();
        }

        if self.phase == WorkflowPhase::Loading {
            self.last_issued += 1;
        }
        self.phase = WorkflowPhase::Idle;

        Ok(&self.criteria)
    }

    /// The explicit search action. Refuses (returns `None`, no remote call)
    /// until at least one of job title, company, or skills is set;
    /// otherwise issues a new sequence number and hands back the criteria
    /// snapshot to dispatch with.
    pub fn begin_search(&mut self) -> Option<(u64, SearchCriteria)> {
        if !self.criteria.has_required() {
            return None;
        }

        self.has_searched = true;
        self.last_issued += 1;
        self.phase = WorkflowPhase::Loading;

        Some((self.last_issued, self.criteria.clone()))
    }

    /// Applies a completed query: last write wins. A completion whose
    /// sequence number is not the latest issued is discarded and the
    /// current state kept. `None` marks a failed query, which lands back in
    /// Idle and renders exactly like a search that matched nothing.
    pub fn apply_outcome(&mut self, seq: u64, outcome: Option<SearchResult>) -> bool {
        if seq != self.last_issued {
            return false;
        }

        self.phase = match outcome {
            Some(result) => WorkflowPhase::Results(result),
            None => WorkflowPhase::Idle,
        };

        true
    }

    pub fn results_view(&self) -> ResultsView {
        match &self.phase {
            WorkflowPhase::Results(result) => {
                let (visible, has_more) = project(result);
                ResultsView {
                    searched: true,
                    loading: false,
                    total_results: result.total_results,
                    visible: visible.to_vec(),
                    has_more,
                }
            }
            phase => ResultsView {
                searched: self.has_searched,
                loading: *phase == WorkflowPhase::Loading,
                total_results: 0,
                visible: Vec::new(),
                has_more: false,
            },
        }
    }

    /// A profile inside the visible window, if results are showing.
    pub fn visible_profile(&self, position: usize) -> Option<&ProfileRecord> {
        match &self.phase {
            WorkflowPhase::Results(result) => {
                let (visible, _) = project(result);
                visible.get(position)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(count: usize) -> SearchResult {
        let items = (0..count)
            .map(|i| ProfileRecord {
                full_name: format!("Profile {i}"),
                link: format!("https://example.com/{i}"),
                ..ProfileRecord::default()
            })
            .collect();

        SearchResult {
            items,
            total_results: count as u64,
        }
    }

    fn workflow_with_results(count: usize) -> SearchWorkflow {
        let mut workflow = SearchWorkflow::new();
        workflow
            .edit_filter(FilterField::JobTitle, "Engineer")
            .unwrap();
        let (seq, _) = workflow.begin_search().unwrap();
        assert!(workflow.apply_outcome(seq, Some(result_with(count))));
        workflow
    }

    #[test]
    fn test_project_small_result_set() {
        let result = result_with(3);
        let (visible, has_more) = project(&result);

        assert_eq!(visible.len(), 3);
        assert!(!has_more);
        assert_eq!(visible, &result.items[..]);
    }

    #[test]
    fn test_project_exactly_five() {
        let result = result_with(5);
        let (visible, has_more) = project(&result);
        assert_eq!(visible.len(), 5);
        assert!(!has_more);
    }

    #[test]
    fn test_project_caps_window_and_keeps_order() {
        let result = result_with(12);
        let (visible, has_more) = project(&result);

        assert_eq!(visible.len(), 5);
        assert!(has_more);

        let names: Vec<&str> = visible.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(
            names,
            ["Profile 0", "Profile 1", "Profile 2", "Profile 3", "Profile 4"]
        );
    }

    #[test]
    fn test_search_refused_without_required_criteria() {
        let mut workflow = SearchWorkflow::new();
        workflow.edit_filter(FilterField::Location, "Berlin").unwrap();
        workflow.edit_filter(FilterField::Seniority, "senior").unwrap();

        assert_eq!(workflow.begin_search(), None);
        assert!(!workflow.results_view().searched);
    }

    #[test]
    fn test_any_required_field_enables_search() {
        for field in [FilterField::JobTitle, FilterField::Company, FilterField::Skills] {
            let mut workflow = SearchWorkflow::new();
            workflow.edit_filter(field, "something").unwrap();
            assert!(workflow.begin_search().is_some());
        }
    }

    #[test]
    fn test_editing_filters_resets_page() {
        let mut workflow = workflow_with_results(8);
        workflow.edit_filter(FilterField::Page, "4").unwrap();
        assert_eq!(workflow.criteria().page, 4);

        workflow.edit_filter(FilterField::Industry, "fintech").unwrap();

        assert_eq!(workflow.criteria().page, 1);
        assert!(!workflow.results_view().loading);
        assert!(workflow.results_view().visible.is_empty());
    }

    #[test]
    fn test_editing_page_keeps_page() {
        let mut workflow = SearchWorkflow::new();
        workflow.edit_filter(FilterField::Page, "7").unwrap();
        assert_eq!(workflow.criteria().page, 7);
    }

    #[test]
    fn test_edit_returns_results_to_idle() {
        let mut workflow = workflow_with_results(8);
        assert_eq!(workflow.results_view().visible.len(), 5);

        workflow.edit_filter(FilterField::Company, "Initech").unwrap();

        let view = workflow.results_view();
        assert!(view.searched);
        assert!(view.visible.is_empty());
        assert_eq!(view.total_results, 0);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut workflow = SearchWorkflow::new();
        workflow.edit_filter(FilterField::JobTitle, "Engineer").unwrap();

        let (seq_a, _) = workflow.begin_search().unwrap();
        let (seq_b, _) = workflow.begin_search().unwrap();

        // B resolves first, then A straggles in.
        assert!(workflow.apply_outcome(seq_b, Some(result_with(2))));
        assert!(!workflow.apply_outcome(seq_a, Some(result_with(9))));

        let view = workflow.results_view();
        assert_eq!(view.total_results, 2);
        assert_eq!(view.visible.len(), 2);
    }

    #[test]
    fn test_latest_query_wins_regardless_of_arrival_order() {
        let mut workflow = SearchWorkflow::new();
        workflow.edit_filter(FilterField::Skills, "rust").unwrap();

        let (seq_a, _) = workflow.begin_search().unwrap();
        let (seq_b, _) = workflow.begin_search().unwrap();

        assert!(!workflow.apply_outcome(seq_a, Some(result_with(9))));
        assert!(workflow.apply_outcome(seq_b, Some(result_with(2))));

        assert_eq!(workflow.results_view().total_results, 2);
    }

    #[test]
    fn test_edit_invalidates_inflight_query() {
        let mut workflow = SearchWorkflow::new();
        workflow.edit_filter(FilterField::JobTitle, "Engineer").unwrap();

        let (seq, _) = workflow.begin_search().unwrap();
        workflow.edit_filter(FilterField::Company, "Initech").unwrap();

        assert!(!workflow.apply_outcome(seq, Some(result_with(4))));
        assert!(workflow.results_view().visible.is_empty());
    }

    #[test]
    fn test_failed_query_renders_like_zero_results() {
        let mut failed = SearchWorkflow::new();
        failed.edit_filter(FilterField::JobTitle, "Engineer").unwrap();
        let (seq, _) = failed.begin_search().unwrap();
        assert!(failed.apply_outcome(seq, None));

        let mut empty = SearchWorkflow::new();
        empty.edit_filter(FilterField::JobTitle, "Engineer").unwrap();
        let (seq, _) = empty.begin_search().unwrap();
        assert!(empty.apply_outcome(seq, Some(result_with(0))));

        // The dashboard does not distinguish the two.
        let failed_view = failed.results_view();
        let empty_view = empty.results_view();
        assert_eq!(failed_view.visible, empty_view.visible);
        assert_eq!(failed_view.has_more, empty_view.has_more);
        assert!(failed_view.searched && empty_view.searched);
    }

    #[test]
    fn test_visible_profile_lookup() {
        let workflow = workflow_with_results(12);

        assert_eq!(
            workflow.visible_profile(0).unwrap().full_name,
            "Profile 0"
        );
        assert_eq!(
            workflow.visible_profile(4).unwrap().full_name,
            "Profile 4"
        );
        // Sixth profile exists in the result set but is outside the window.
        assert!(workflow.visible_profile(5).is_none());
    }

    #[test]
    fn test_workflow_is_reenterable() {
        let mut workflow = workflow_with_results(3);

        workflow.edit_filter(FilterField::Skills, "go").unwrap();
        let (seq, _) = workflow.begin_search().unwrap();
        assert!(workflow.apply_outcome(seq, Some(result_with(7))));

        let view = workflow.results_view();
        assert_eq!(view.total_results, 7);
        assert!(view.has_more);
    }
}
