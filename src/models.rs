//! Frontend Models
//!
//! Data structures matching backend entities and wire payloads.

use serde::{Deserialize, Serialize};

/// Question type tag. Unrecognized backend values decode to `Unknown`
/// so one bad question degrades to an inline notice instead of a
/// failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    #[default]
    FreeText,
    MultipleChoice,
    Ordering,
    Slider,
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::FreeText => "FREE_TEXT",
            QuestionKind::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionKind::Ordering => "ORDERING",
            QuestionKind::Slider => "SLIDER",
            QuestionKind::Unknown => "UNKNOWN",
        }
    }
}

/// Option of a MULTIPLE_CHOICE or ORDERING question (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: u32,
    pub option_text: String,
}

/// Question data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub question_type: QuestionKind,
    #[serde(default)]
    pub is_mc_multiple_correct: bool,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub slider_unit: Option<String>,
    #[serde(default)]
    pub slider_min_value: Option<f64>,
    #[serde(default)]
    pub slider_max_value: Option<f64>,
    #[serde(default)]
    pub slider_step: Option<f64>,
    #[serde(default)]
    pub slider_points_exact: Option<i32>,
    #[serde(default)]
    pub slider_threshold_partial: Option<f64>,
    #[serde(default)]
    pub slider_points_partial: Option<i32>,
}

impl Question {
    /// Assemble the slider configuration; None when min, max or step is missing.
    pub fn slider_spec(&self) -> Option<SliderSpec> {
        Some(SliderSpec {
            min: self.slider_min_value?,
            max: self.slider_max_value?,
            step: self.slider_step?,
            unit: self.slider_unit.clone().unwrap_or_default(),
            threshold: self.slider_threshold_partial.unwrap_or(0.0),
            points_exact: self.slider_points_exact.unwrap_or(0),
            points_partial: self.slider_points_partial.unwrap_or(0),
        })
    }

    pub fn option_ids(&self) -> Vec<u32> {
        self.options.iter().map(|o| o.id).collect()
    }
}

/// Slider configuration of a SLIDER question
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: String,
    pub threshold: f64,
    pub points_exact: i32,
    pub points_partial: i32,
}

impl SliderSpec {
    /// Bounds the track refuses to render on: min below max, step positive.
    pub fn is_valid(&self) -> bool {
        self.min < self.max && self.step > 0.0
    }
}

/// One committed answer, variant matching the question type
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    FreeText(String),
    SingleChoice(Option<u32>),
    MultiChoice(Vec<u32>),
    /// Option ids in the user's chosen order
    Ordering(Vec<u32>),
    Slider(f64),
}

impl Answer {
    /// Wire form for answer and official-answer submissions.
    pub fn to_payload(&self, question_id: u32) -> AnswerPayload {
        let mut payload = AnswerPayload::new(question_id);
        match self {
            Answer::FreeText(text) => payload.answer_text = Some(text.clone()),
            Answer::SingleChoice(option_id) => payload.selected_option_id = *option_id,
            Answer::MultiChoice(option_ids) => {
                payload.selected_option_ids = Some(option_ids.clone())
            }
            Answer::Ordering(option_ids) => {
                payload.ordered_options_text = Some(join_ordered_ids(option_ids))
            }
            Answer::Slider(value) => payload.slider_answer_value = Some(*value),
        }
        payload
    }
}

/// Per-question answer object the backend expects: `question_id` plus
/// exactly one populated variant field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub question_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_ids: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_options_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_answer_value: Option<f64>,
}

impl AnswerPayload {
    pub fn new(question_id: u32) -> Self {
        Self {
            question_id,
            answer_text: None,
            selected_option_id: None,
            selected_option_ids: None,
            ordered_options_text: None,
            slider_answer_value: None,
        }
    }

    /// Reinterpret a stored payload as the editable variant for
    /// `question`. The official answer key comes back in this shape too,
    /// so the admin form and the wizard share this path.
    pub fn to_answer(&self, question: &Question) -> Option<Answer> {
        match question.question_type {
            QuestionKind::FreeText => Some(Answer::FreeText(
                self.answer_text.clone().unwrap_or_default(),
            )),
            QuestionKind::MultipleChoice => {
                if question.is_mc_multiple_correct {
                    Some(Answer::MultiChoice(
                        self.selected_option_ids.clone().unwrap_or_default(),
                    ))
                } else {
                    Some(Answer::SingleChoice(self.selected_option_id))
                }
            }
            QuestionKind::Ordering => self
                .ordered_options_text
                .as_deref()
                .map(|text| Answer::Ordering(parse_ordered_ids(text))),
            QuestionKind::Slider => self.slider_answer_value.map(Answer::Slider),
            QuestionKind::Unknown => None,
        }
    }
}

/// Comma-joined id sequence used by ORDERING answers on the wire
pub fn join_ordered_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-joined id sequence; non-numeric fragments are dropped.
pub fn parse_ordered_ids(text: &str) -> Vec<u32> {
    text.split(',')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .collect()
}

/// Race data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_date: String,
    /// Prediction deadline; None means the quiniela never closes
    #[serde(default)]
    pub quiniela_close_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub promo_image_url: Option<String>,
    #[serde(default)]
    pub gender_category: Option<String>,
    #[serde(default)]
    pub race_format_id: Option<u32>,
}

/// Race format (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceFormat {
    pub id: u32,
    pub name: String,
}

/// Favorite link attached to a race (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteLink {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub order: i32,
}

/// League data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub admin_username: Option<String>,
    #[serde(default)]
    pub race_ids: Vec<u32>,
}

/// Race eligible for league assembly (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRace {
    pub id: u32,
    pub title: String,
    pub event_date: String,
}

/// Authenticated user as reported by the session endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub role: String,
}

impl UserInfo {
    pub fn is_general_admin(&self) -> bool {
        self.role == "general_admin"
    }

    /// League administration is open to both admin roles
    pub fn manages_leagues(&self) -> bool {
        self.role == "general_admin" || self.role == "league_admin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_question_kind_wire_names() {
        let kinds: Vec<QuestionKind> =
            serde_json::from_str(r#"["FREE_TEXT","MULTIPLE_CHOICE","ORDERING","SLIDER"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                QuestionKind::FreeText,
                QuestionKind::MultipleChoice,
                QuestionKind::Ordering,
                QuestionKind::Slider
            ]
        );
    }

    #[test]
    fn test_unrecognized_kind_decodes_to_unknown() {
        let q: Question =
            serde_json::from_str(r#"{"id":7,"text":"?","question_type":"MATRIX","options":[]}"#)
                .unwrap();
        assert_eq!(q.question_type, QuestionKind::Unknown);
    }

    #[test]
    fn test_payload_has_exactly_one_variant_field() {
        let answers = [
            Answer::FreeText("x".into()),
            Answer::SingleChoice(Some(4)),
            Answer::MultiChoice(vec![1, 2]),
            Answer::Ordering(vec![3, 1]),
            Answer::Slider(12.5),
        ];
        for answer in &answers {
            let p = answer.to_payload(9);
            let populated = [
                p.answer_text.is_some(),
                p.selected_option_id.is_some(),
                p.selected_option_ids.is_some(),
                p.ordered_options_text.is_some(),
                p.slider_answer_value.is_some(),
            ]
            .iter()
            .filter(|set| **set)
            .count();
            assert_eq!(populated, 1, "payload for {:?}", answer);
            assert_eq!(p.question_id, 9);
        }
        // An unanswered single choice keeps no selection at all
        let p = Answer::SingleChoice(None).to_payload(9);
        assert_eq!(p.selected_option_id, None);
    }

    #[test]
    fn test_ordering_ids_round_trip() {
        assert_eq!(join_ordered_ids(&[12, 10, 11]), "12,10,11");
        assert_eq!(parse_ordered_ids("12,10,11"), vec![12, 10, 11]);
        assert_eq!(parse_ordered_ids(" 3 , 1 "), vec![3, 1]);
        assert_eq!(parse_ordered_ids(""), Vec::<u32>::new());
        assert_eq!(parse_ordered_ids("a,2"), vec![2]);
    }

    #[test]
    fn test_slider_spec_validation() {
        let mut q = question(1, QuestionKind::Slider);
        assert!(q.slider_spec().is_none());

        q.slider_min_value = Some(0.0);
        q.slider_max_value = Some(50.0);
        q.slider_step = Some(0.5);
        q.slider_unit = Some("km/h".into());
        let spec = q.slider_spec().unwrap();
        assert!(spec.is_valid());
        assert_eq!(spec.unit, "km/h");

        q.slider_max_value = Some(0.0);
        assert!(!q.slider_spec().unwrap().is_valid());
        q.slider_max_value = Some(50.0);
        q.slider_step = Some(0.0);
        assert!(!q.slider_spec().unwrap().is_valid());
    }

    #[test]
    fn test_payload_round_trips_back_to_the_answer() {
        let ft = question(3, QuestionKind::FreeText);
        let mc_single = question(3, QuestionKind::MultipleChoice);
        let mut mc_multi = question(3, QuestionKind::MultipleChoice);
        mc_multi.is_mc_multiple_correct = true;
        let ord = question(3, QuestionKind::Ordering);
        let slider = question(3, QuestionKind::Slider);

        let cases = [
            (Answer::FreeText("winner".into()), &ft),
            (Answer::SingleChoice(Some(5)), &mc_single),
            (Answer::MultiChoice(vec![5, 6]), &mc_multi),
            (Answer::Ordering(vec![6, 5]), &ord),
            (Answer::Slider(41.5), &slider),
        ];
        for (answer, q) in &cases {
            assert_eq!(answer.to_payload(3).to_answer(q).as_ref(), Some(answer));
        }

        // A payload from another type reads back as empty, not garbage
        let foreign = Answer::Slider(41.5).to_payload(3);
        assert_eq!(foreign.to_answer(&ft), Some(Answer::FreeText(String::new())));
        assert_eq!(foreign.to_answer(&ord), None);
        assert_eq!(foreign.to_answer(&mc_single), Some(Answer::SingleChoice(None)));

        let unknown = question(3, QuestionKind::Unknown);
        assert_eq!(foreign.to_answer(&unknown), None);
    }
}
