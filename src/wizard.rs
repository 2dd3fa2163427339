//! Answer wizard session
//!
//! One instance per wizard invocation: the race's question snapshot, a
//! cursor, and the accumulated answer map. Navigation and commit rules
//! live here so they can be tested without a DOM; fetching and
//! rendering stay in the components.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::models::{Answer, AnswerPayload, Question, QuestionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    NoQuestions,
    NothingAnswered,
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::NoQuestions => {
                write!(f, "This race has no questions configured yet.")
            }
            WizardError::NothingAnswered => {
                write!(f, "Please answer at least one question before finishing.")
            }
        }
    }
}

/// Wizard state for a single run. Dropped without submission, the
/// accumulated answers are simply lost; there is no draft persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    race_id: u32,
    questions: Vec<Question>,
    index: usize,
    answers: BTreeMap<u32, Answer>,
}

impl WizardSession {
    /// Build a session over a fetched question list; an empty list is
    /// refused so the wizard never opens on a blank screen.
    pub fn new(race_id: u32, questions: Vec<Question>) -> Result<Self, WizardError> {
        if questions.is_empty() {
            return Err(WizardError::NoQuestions);
        }
        Ok(Self {
            race_id,
            questions,
            index: 0,
            answers: BTreeMap::new(),
        })
    }

    pub fn race_id(&self) -> u32 {
        self.race_id
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Forward navigation (next/finish) stays blocked while the current
    /// question cannot render an editor.
    pub fn can_advance(&self) -> bool {
        let q = self.current_question();
        match q.question_type {
            QuestionKind::Unknown => false,
            QuestionKind::Slider => q.slider_spec().map(|s| s.is_valid()).unwrap_or(false),
            _ => true,
        }
    }

    /// Overwrite the answer for the question currently on screen.
    pub fn commit(&mut self, answer: Answer) {
        let id = self.current_question().id;
        self.answers.insert(id, answer);
    }

    pub fn answer_for(&self, question_id: u32) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    /// Move the cursor forward; no-op at the last question.
    pub fn go_next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move the cursor back; no-op at the first question.
    pub fn go_previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Wire body for the final submission: question-id string to answer
    /// object. Refuses to produce an empty body, so no request is ever
    /// issued for an untouched wizard.
    pub fn finish_payload(&self) -> Result<BTreeMap<String, AnswerPayload>, WizardError> {
        if self.answers.is_empty() {
            return Err(WizardError::NothingAnswered);
        }
        Ok(self
            .answers
            .iter()
            .map(|(id, answer)| (id.to_string(), answer.to_payload(*id)))
            .collect())
    }
}

/// A saved ordering only seeds the display when its id set matches the
/// current option set exactly; any drift (added, removed or duplicated
/// ids) returns None and the caller falls back to the default order.
pub fn reconcile_order(saved: &[u32], option_ids: &[u32]) -> Option<Vec<u32>> {
    if saved.len() != option_ids.len() {
        return None;
    }
    let saved_set: BTreeSet<u32> = saved.iter().copied().collect();
    let current: BTreeSet<u32> = option_ids.iter().copied().collect();
    if saved_set != current {
        return None;
    }
    Some(saved.to_vec())
}

/// True when `now_ms` (epoch milliseconds) is past the close instant.
/// An absent or unparseable close date leaves the quiniela open.
pub fn deadline_passed(close_ms: Option<f64>, now_ms: f64) -> bool {
    match close_ms {
        Some(ms) if ms.is_finite() => now_ms > ms,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;

    fn question(id: u32, kind: QuestionKind) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            question_type: kind,
            is_mc_multiple_correct: false,
            options: Vec::new(),
            slider_unit: None,
            slider_min_value: None,
            slider_max_value: None,
            slider_step: None,
            slider_points_exact: None,
            slider_threshold_partial: None,
            slider_points_partial: None,
        }
    }

    fn with_options(mut q: Question, ids: &[u32]) -> Question {
        q.options = ids
            .iter()
            .map(|id| QuestionOption {
                id: *id,
                option_text: format!("Option {}", id),
            })
            .collect();
        q
    }

    #[test]
    fn test_new_refuses_an_empty_question_list() {
        assert_eq!(
            WizardSession::new(1, Vec::new()).unwrap_err(),
            WizardError::NoQuestions
        );
    }

    #[test]
    fn test_next_walks_to_the_last_question_and_stops() {
        let questions: Vec<Question> =
            (1..=4).map(|id| question(id, QuestionKind::FreeText)).collect();
        let mut session = WizardSession::new(7, questions).unwrap();
        assert!(session.is_first());
        assert!(!session.is_last());

        for _ in 0..3 {
            assert!(session.go_next());
        }
        assert!(session.is_last());
        assert_eq!(session.index(), 3);
        // Boundary is a no-op, not a wrap
        assert!(!session.go_next());
        assert_eq!(session.index(), 3);

        for _ in 0..3 {
            assert!(session.go_previous());
        }
        assert!(session.is_first());
        assert!(!session.go_previous());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_committed_answers_survive_navigation() {
        let questions = vec![
            question(1, QuestionKind::FreeText),
            with_options(question(2, QuestionKind::MultipleChoice), &[10, 11]),
            {
                let mut q = with_options(question(3, QuestionKind::MultipleChoice), &[20, 21, 22]);
                q.is_mc_multiple_correct = true;
                q
            },
        ];
        let mut session = WizardSession::new(7, questions).unwrap();

        session.commit(Answer::FreeText("hello".into()));
        session.go_next();
        session.commit(Answer::SingleChoice(Some(11)));
        session.go_next();
        session.commit(Answer::MultiChoice(vec![20, 22]));

        session.go_previous();
        session.go_previous();
        assert_eq!(
            session.answer_for(1),
            Some(&Answer::FreeText("hello".into()))
        );
        assert_eq!(
            session.answer_for(2),
            Some(&Answer::SingleChoice(Some(11)))
        );
        assert_eq!(
            session.answer_for(3),
            Some(&Answer::MultiChoice(vec![20, 22]))
        );
        assert_eq!(session.answer_for(99), None);
    }

    #[test]
    fn test_commit_overwrites_the_previous_answer() {
        let mut session =
            WizardSession::new(7, vec![question(1, QuestionKind::FreeText)]).unwrap();
        session.commit(Answer::FreeText("first".into()));
        session.commit(Answer::FreeText("second".into()));
        assert_eq!(
            session.answer_for(1),
            Some(&Answer::FreeText("second".into()))
        );
        assert_eq!(session.finish_payload().unwrap().len(), 1);
    }

    #[test]
    fn test_finish_payload_requires_at_least_one_answer() {
        let session = WizardSession::new(7, vec![question(1, QuestionKind::FreeText)]).unwrap();
        assert_eq!(
            session.finish_payload().unwrap_err(),
            WizardError::NothingAnswered
        );
    }

    #[test]
    fn test_finish_payload_matches_the_wire_shape() {
        let questions = vec![
            question(1, QuestionKind::FreeText),
            with_options(question(2, QuestionKind::MultipleChoice), &[10, 11]),
        ];
        let mut session = WizardSession::new(42, questions).unwrap();
        session.commit(Answer::FreeText("hello".into()));
        session.go_next();
        session.commit(Answer::SingleChoice(Some(11)));

        let payload = session.finish_payload().unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"1":{"question_id":1,"answer_text":"hello"},"2":{"question_id":2,"selected_option_id":11}}"#
        );
    }

    #[test]
    fn test_can_advance_blocks_broken_questions() {
        let mut slider = question(1, QuestionKind::Slider);
        let session = WizardSession::new(7, vec![slider.clone()]).unwrap();
        // Missing bounds
        assert!(!session.can_advance());

        slider.slider_min_value = Some(0.0);
        slider.slider_max_value = Some(0.0);
        slider.slider_step = Some(1.0);
        let session = WizardSession::new(7, vec![slider.clone()]).unwrap();
        // min == max
        assert!(!session.can_advance());

        slider.slider_max_value = Some(50.0);
        let session = WizardSession::new(7, vec![slider]).unwrap();
        assert!(session.can_advance());

        let session = WizardSession::new(7, vec![question(1, QuestionKind::Unknown)]).unwrap();
        assert!(!session.can_advance());

        let session = WizardSession::new(7, vec![question(1, QuestionKind::FreeText)]).unwrap();
        assert!(session.can_advance());
    }

    #[test]
    fn test_reconcile_order_requires_an_exact_id_set_match() {
        // Saved order C,A,B over options A,B,C
        assert_eq!(reconcile_order(&[3, 1, 2], &[1, 2, 3]), Some(vec![3, 1, 2]));
        // Saved order references a vanished id
        assert_eq!(reconcile_order(&[4, 1, 2], &[1, 2, 3]), None);
        // Option added since the answer was saved
        assert_eq!(reconcile_order(&[2, 1], &[1, 2, 3]), None);
        // Duplicate id cannot sneak past the size check
        assert_eq!(reconcile_order(&[1, 1, 2], &[1, 2, 3]), None);
        assert_eq!(reconcile_order(&[], &[]), Some(vec![]));
    }

    #[test]
    fn test_deadline_passed_only_after_the_close_instant() {
        assert!(deadline_passed(Some(1_000.0), 2_000.0));
        assert!(!deadline_passed(Some(2_000.0), 2_000.0));
        assert!(!deadline_passed(Some(3_000.0), 2_000.0));
        assert!(!deadline_passed(None, 2_000.0));
        // Unparseable dates arrive as NaN and leave the pool open
        assert!(!deadline_passed(Some(f64::NAN), 2_000.0));
    }
}
