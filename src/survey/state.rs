use std::collections::{BTreeSet, HashMap};

use crate::survey::questions::{QuestionId, QuestionKind, QuestionPage};

/// Rejection returned when an operation's precondition does not hold. The
/// session is left untouched; callers log the rejection and move on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurveyError {
    #[error("page index {index} out of range, survey has {page_count} pages")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("\"{value}\" is not an option of {id}")]
    UnknownOption { id: QuestionId, value: String },

    #[error("{id} is a {actual:?} question")]
    KindMismatch { id: QuestionId, actual: QuestionKind },

    #[error("submit from page {index}, only valid from page {last}")]
    NotOnLastPage { index: usize, last: usize },
}

/// A collected answer, tagged by question kind. Single-choice answers use
/// the empty string as the unselected sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Single(String),
    Multi(BTreeSet<String>),
}

impl Answer {
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Single(value) => !value.is_empty(),
            Self::Multi(values) => !values.is_empty(),
        }
    }
}

/// All responses collected so far, one entry per distinct question id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerSheet {
    values: HashMap<QuestionId, Answer>,
}

impl AnswerSheet {
    fn seeded(pages: &[QuestionPage]) -> Self {
        let mut values = HashMap::new();
        for page in pages {
            values.entry(page.id).or_insert_with(|| match page.kind {
                QuestionKind::SingleChoice => Answer::Single(String::new()),
                QuestionKind::MultiChoice => Answer::Multi(BTreeSet::new()),
            });
        }
        Self { values }
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.values.get(&id)
    }

    /// Selected value of a single-choice question, if one has been picked.
    pub fn single(&self, id: QuestionId) -> Option<&str> {
        match self.values.get(&id) {
            Some(Answer::Single(value)) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Selected values of a multi-choice question.
    pub fn multi(&self, id: QuestionId) -> Option<&BTreeSet<String>> {
        match self.values.get(&id) {
            Some(Answer::Multi(values)) => Some(values),
            _ => None,
        }
    }

    /// Whether `value` is currently selected under `id`, for either kind.
    pub fn contains(&self, id: QuestionId, value: &str) -> bool {
        match self.values.get(&id) {
            Some(Answer::Single(selected)) => selected == value,
            Some(Answer::Multi(values)) => values.contains(value),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A survey session: the immutable page sequence plus the answer sheet and
/// the current position. All mutation goes through the operations below,
/// synchronously, in response to one user interaction each.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pages: Vec<QuestionPage>,
    answers: AnswerSheet,
    current_page: usize,
}

impl Survey {
    /// Seeds one correctly-typed answer entry per distinct id and starts on
    /// page 0. Panics on an empty page list; that is a programming error,
    /// not a runtime condition to recover from.
    pub fn new(pages: Vec<QuestionPage>) -> Self {
        assert!(!pages.is_empty(), "a survey needs at least one page");
        let answers = AnswerSheet::seeded(&pages);
        Self {
            pages,
            answers,
            current_page: 0,
        }
    }

    pub fn pages(&self) -> &[QuestionPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    fn page(&self, index: usize) -> Result<&QuestionPage, SurveyError> {
        self.pages.get(index).ok_or(SurveyError::PageOutOfRange {
            index,
            page_count: self.pages.len(),
        })
    }

    /// Replace the stored answer of the single-choice question shown on
    /// `page_index`. Reselecting the current value is a no-op.
    pub fn select_single(&mut self, page_index: usize, value: &str) -> Result<(), SurveyError> {
        let page = self.page(page_index)?;
        if page.kind != QuestionKind::SingleChoice {
            return Err(SurveyError::KindMismatch {
                id: page.id,
                actual: page.kind,
            });
        }
        if !page.has_option(value) {
            return Err(SurveyError::UnknownOption {
                id: page.id,
                value: value.to_string(),
            });
        }
        let id = page.id;
        self.answers.values.insert(id, Answer::Single(value.to_string()));
        Ok(())
    }

    /// Drive `value`'s membership in the multi-choice answer shown on
    /// `page_index` to `checked`. Re-toggling to the current state is a
    /// no-op.
    pub fn toggle_multiple(
        &mut self,
        page_index: usize,
        value: &str,
        checked: bool,
    ) -> Result<(), SurveyError> {
        let page = self.page(page_index)?;
        if page.kind != QuestionKind::MultiChoice {
            return Err(SurveyError::KindMismatch {
                id: page.id,
                actual: page.kind,
            });
        }
        if !page.has_option(value) {
            return Err(SurveyError::UnknownOption {
                id: page.id,
                value: value.to_string(),
            });
        }
        let id = page.id;
        if let Some(Answer::Multi(values)) = self.answers.values.get_mut(&id) {
            if checked {
                values.insert(value.to_string());
            } else {
                values.remove(value);
            }
        }
        Ok(())
    }

    /// Whether the page's question has an answer: a non-empty value for
    /// single-choice, a non-empty set for multi-choice. This never gates
    /// `go_to`; whether "Next" requires it is a presentation decision.
    pub fn can_advance(&self, page_index: usize) -> bool {
        self.pages
            .get(page_index)
            .and_then(|page| self.answers.get(page.id))
            .map_or(false, Answer::is_answered)
    }

    /// The only navigation primitive; next and previous are
    /// `go_to(current ± 1)`. Leaves the answer sheet untouched.
    pub fn go_to(&mut self, page_index: usize) -> Result<(), SurveyError> {
        if page_index >= self.pages.len() {
            return Err(SurveyError::PageOutOfRange {
                index: page_index,
                page_count: self.pages.len(),
            });
        }
        self.current_page = page_index;
        Ok(())
    }

    /// 1-based ordinal of the question shown on `page_index`, counting a
    /// continuation chain as one question.
    pub fn logical_question_number(&self, page_index: usize) -> usize {
        let last = page_index.min(self.pages.len() - 1);
        self.pages[..=last]
            .iter()
            .filter(|page| !page.continuation)
            .count()
            .max(1)
    }

    pub fn total_logical_questions(&self) -> usize {
        self.pages.iter().filter(|page| !page.continuation).count()
    }

    /// Fraction of the survey reached on `page_index`, in (0, 1].
    pub fn progress_fraction(&self, page_index: usize) -> f64 {
        self.logical_question_number(page_index) as f64 / self.total_logical_questions() as f64
    }

    pub fn on_last_page(&self) -> bool {
        self.current_page + 1 == self.pages.len()
    }

    /// Finalize the survey. Valid only from the last page; returns the full
    /// answer snapshot for the submission collaborator. The session itself
    /// performs no I/O.
    pub fn submit(&self) -> Result<AnswerSheet, SurveyError> {
        if !self.on_last_page() {
            return Err(SurveyError::NotOnLastPage {
                index: self.current_page,
                last: self.pages.len() - 1,
            });
        }
        Ok(self.answers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::questions::{bonestack_pages, ChoiceOption};

    fn page(
        id: QuestionId,
        kind: QuestionKind,
        continuation: bool,
        values: &[&'static str],
    ) -> QuestionPage {
        QuestionPage {
            id,
            kind,
            title: "",
            subtitle: None,
            icon: None,
            continuation,
            options: values.iter().map(|v| ChoiceOption::new(v, v)).collect(),
        }
    }

    fn three_single_pages() -> Survey {
        Survey::new(vec![
            page(
                QuestionId::PrimaryGoal,
                QuestionKind::SingleChoice,
                false,
                &["growth", "support"],
            ),
            page(
                QuestionId::AgeGroup,
                QuestionKind::SingleChoice,
                false,
                &["18-25", "26-35"],
            ),
            page(
                QuestionId::Budget,
                QuestionKind::SingleChoice,
                false,
                &["0", "1-100"],
            ),
        ])
    }

    #[test]
    fn seeding_creates_one_typed_entry_per_id() {
        let survey = Survey::new(bonestack_pages());
        assert_eq!(survey.page_count(), 9);
        assert_eq!(survey.answers().len(), 8);
        assert_eq!(
            survey.answers().get(QuestionId::PrimaryGoal),
            Some(&Answer::Single(String::new()))
        );
        assert_eq!(
            survey.answers().get(QuestionId::SecondaryGoals),
            Some(&Answer::Multi(BTreeSet::new()))
        );
        assert_eq!(survey.current_page(), 0);
    }

    #[test]
    fn select_single_overwrites() {
        let mut survey = three_single_pages();
        survey.select_single(0, "growth").unwrap();
        survey.select_single(0, "support").unwrap();
        assert_eq!(survey.answers().single(QuestionId::PrimaryGoal), Some("support"));
    }

    #[test]
    fn reselecting_the_same_value_changes_nothing() {
        let mut survey = three_single_pages();
        survey.select_single(0, "growth").unwrap();
        let before = survey.clone();
        survey.select_single(0, "growth").unwrap();
        assert_eq!(survey, before);
    }

    #[test]
    fn unknown_value_is_rejected_without_corrupting_state() {
        let mut survey = three_single_pages();
        survey.select_single(0, "growth").unwrap();
        let before = survey.clone();
        assert_eq!(
            survey.select_single(0, "bogus"),
            Err(SurveyError::UnknownOption {
                id: QuestionId::PrimaryGoal,
                value: "bogus".into(),
            })
        );
        assert_eq!(survey, before);
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut survey = Survey::new(bonestack_pages());
        assert!(matches!(
            survey.toggle_multiple(0, "growth", true),
            Err(SurveyError::KindMismatch { .. })
        ));
        assert!(matches!(
            survey.select_single(1, "height"),
            Err(SurveyError::KindMismatch { .. })
        ));
    }

    #[test]
    fn toggle_true_is_idempotent() {
        let mut survey = Survey::new(bonestack_pages());
        survey.toggle_multiple(1, "height", true).unwrap();
        survey.toggle_multiple(1, "height", true).unwrap();
        let selected = survey.answers().multi(QuestionId::SecondaryGoals).unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains("height"));
    }

    #[test]
    fn toggle_round_trips_to_the_prior_state() {
        let mut survey = Survey::new(bonestack_pages());
        let before = survey.clone();
        survey.toggle_multiple(1, "height", true).unwrap();
        survey.toggle_multiple(1, "height", false).unwrap();
        assert_eq!(survey, before);
    }

    #[test]
    fn toggles_accumulate_and_remove() {
        let mut survey = Survey::new(vec![page(
            QuestionId::HealthNotes,
            QuestionKind::MultiChoice,
            false,
            &["a", "b", "c"],
        )]);
        survey.toggle_multiple(0, "a", true).unwrap();
        survey.toggle_multiple(0, "b", true).unwrap();
        survey.toggle_multiple(0, "a", false).unwrap();
        let selected = survey.answers().multi(QuestionId::HealthNotes).unwrap();
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn continuation_pages_share_one_answer_slot() {
        let mut survey = Survey::new(bonestack_pages());
        // pages 1 and 2 are the secondaryGoals continuation pair
        survey.toggle_multiple(1, "height", true).unwrap();
        survey.toggle_multiple(2, "posture", true).unwrap();
        let selected = survey.answers().multi(QuestionId::SecondaryGoals).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut survey = three_single_pages();
        survey.select_single(0, "growth").unwrap();
        assert_eq!(survey.answers().single(QuestionId::PrimaryGoal), Some("growth"));
        survey.go_to(1).unwrap();
        assert_eq!(survey.current_page(), 1);
        assert_eq!(
            survey.go_to(5),
            Err(SurveyError::PageOutOfRange {
                index: 5,
                page_count: 3,
            })
        );
        assert_eq!(survey.current_page(), 1);
    }

    #[test]
    fn go_to_leaves_answers_untouched() {
        let mut survey = three_single_pages();
        survey.select_single(0, "growth").unwrap();
        let answers = survey.answers().clone();
        survey.go_to(2).unwrap();
        survey.go_to(0).unwrap();
        assert_eq!(survey.answers(), &answers);
    }

    #[test]
    fn can_advance_requires_a_non_empty_answer() {
        let mut survey = Survey::new(bonestack_pages());
        assert!(!survey.can_advance(0));
        survey.select_single(0, "growth").unwrap();
        assert!(survey.can_advance(0));
        assert!(!survey.can_advance(1));
        survey.toggle_multiple(2, "posture", true).unwrap();
        // the shared slot answers both continuation pages
        assert!(survey.can_advance(1));
        assert!(survey.can_advance(2));
        assert!(!survey.can_advance(99));
    }

    #[test]
    fn continuation_pages_report_the_same_ordinal() {
        let survey = Survey::new(bonestack_pages());
        assert_eq!(survey.total_logical_questions(), 8);
        assert_eq!(survey.logical_question_number(1), 2);
        assert_eq!(survey.logical_question_number(2), 2);
        assert_eq!(survey.logical_question_number(3), 3);
    }

    #[test]
    fn progress_is_monotone_and_hits_both_endpoints() {
        let survey = Survey::new(bonestack_pages());
        let total = survey.total_logical_questions() as f64;
        assert_eq!(survey.progress_fraction(0), 1.0 / total);
        assert_eq!(survey.progress_fraction(survey.page_count() - 1), 1.0);
        let mut previous = 0.0;
        for index in 0..survey.page_count() {
            let fraction = survey.progress_fraction(index);
            assert!(fraction >= previous);
            assert!(fraction <= 1.0);
            previous = fraction;
        }
    }

    #[test]
    fn submit_is_rejected_before_the_last_page() {
        let mut survey = three_single_pages();
        assert_eq!(
            survey.submit(),
            Err(SurveyError::NotOnLastPage { index: 0, last: 2 })
        );
        survey.go_to(2).unwrap();
        assert!(survey.submit().is_ok());
    }

    #[test]
    fn submit_returns_the_full_snapshot() {
        let mut survey = three_single_pages();
        survey.select_single(0, "growth").unwrap();
        survey.select_single(1, "26-35").unwrap();
        survey.go_to(2).unwrap();
        let snapshot = survey.submit().unwrap();
        assert_eq!(snapshot.single(QuestionId::PrimaryGoal), Some("growth"));
        assert_eq!(snapshot.single(QuestionId::AgeGroup), Some("26-35"));
        assert_eq!(snapshot.single(QuestionId::Budget), None);
    }

    #[test]
    #[should_panic(expected = "at least one page")]
    fn an_empty_survey_is_a_programming_error() {
        let _ = Survey::new(Vec::new());
    }
}
