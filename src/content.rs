// Quiz content source - questions are read once and never mutated

use std::path::Path;

use color_eyre::{
    eyre::{bail, ensure, WrapErr},
    Result,
};

use crate::{
    models::{Question, Questions},
    services::quiz::QuizRepository,
};

const BUILTIN_QUIZ: &str = include_str!("../content/quiz.json");

#[derive(Debug, Clone)]
pub struct QuizContent {
    questions: Questions,
}

impl QuizContent {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut questions: Questions =
            serde_json::from_str(json).wrap_err("could not parse quiz content")?;
        ensure!(!questions.is_empty(), "quiz content has no questions");

        questions.sort_by_key(|q| q.question_number);
        if let Some(pair) = questions
            .windows(2)
            .find(|pair| pair[0].question_number == pair[1].question_number)
        {
            bail!("question {} appears more than once", pair[0].question_number);
        }
        Ok(Self { questions })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read quiz content from {}", path.display()))?;
        let content = Self::from_json(&json)?;
        tracing::info!(
            "loaded {} questions from {}",
            content.len(),
            path.display()
        );
        Ok(content)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_QUIZ)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, number: u32) -> Option<&Question> {
        self.position(number).map(|idx| &self.questions[idx])
    }

    pub fn next_number(&self, number: u32) -> Option<u32> {
        let idx = self.position(number)?;
        self.questions.get(idx + 1).map(|q| q.question_number)
    }

    pub fn prev_number(&self, number: u32) -> Option<u32> {
        let idx = self.position(number)?;
        idx.checked_sub(1).map(|i| self.questions[i].question_number)
    }

    fn position(&self, number: u32) -> Option<usize> {
        self.questions
            .binary_search_by_key(&number, |q| q.question_number)
            .ok()
    }
}

impl QuizRepository for QuizContent {
    fn question(&self, number: u32) -> Option<Question> {
        self.get(number).cloned()
    }

    fn next_number(&self, number: u32) -> Option<u32> {
        QuizContent::next_number(self, number)
    }

    fn prev_number(&self, number: u32) -> Option<u32> {
        QuizContent::prev_number(self, number)
    }

    fn count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interaction;

    #[test]
    fn builtin_content_parses() {
        let content = QuizContent::builtin().unwrap();
        assert!(!content.is_empty());
        assert_eq!(content.questions()[0].question_number, 1);

        let kinds: Vec<&str> = content.questions().iter().map(|q| q.kind_label()).collect();
        assert!(kinds.contains(&"Single choice"));
        assert!(kinds.contains(&"Multiple choice"));
        assert!(kinds.contains(&"Sign or reject"));
    }

    #[test]
    fn builtin_choice_answers_reference_options() {
        let content = QuizContent::builtin().unwrap();
        for q in content.questions() {
            assert!(!q.feedback_content.pages.is_empty(), "question {}", q.question_number);
            match &q.interaction {
                Interaction::Single(mc) | Interaction::Multi(mc) => {
                    for id in &mc.correct_answers {
                        assert!(mc.options.iter().any(|o| &o.id == id), "dangling answer {id}");
                    }
                    if matches!(q.interaction, Interaction::Single(_)) {
                        assert_eq!(mc.correct_answers.len(), 1);
                    }
                }
                Interaction::SignOrReject(_) => {}
            }
        }
    }

    #[test]
    fn questions_are_ordered_by_number() {
        let json = r#"[
            {"type":"single","questionNumber":7,"question":"b","feedbackContent":{"pages":["x"]},
             "options":[{"id":"a","text":"A"}],"correctAnswers":["a"]},
            {"type":"single","questionNumber":3,"question":"a","feedbackContent":{"pages":["x"]},
             "options":[{"id":"a","text":"A"}],"correctAnswers":["a"]}
        ]"#;
        let content = QuizContent::from_json(json).unwrap();
        assert_eq!(content.questions()[0].question_number, 3);
        assert_eq!(content.next_number(3), Some(7));
        assert_eq!(content.next_number(7), None);
        assert_eq!(content.prev_number(7), Some(3));
        assert_eq!(content.prev_number(3), None);
        assert!(content.get(5).is_none());
    }

    #[test]
    fn duplicate_question_numbers_are_rejected() {
        let json = r#"[
            {"type":"single","questionNumber":4,"question":"a","feedbackContent":{"pages":["x"]},
             "options":[{"id":"a","text":"A"}],"correctAnswers":["a"]},
            {"type":"multi","questionNumber":4,"question":"b","feedbackContent":{"pages":["y"]},
             "options":[{"id":"a","text":"A"}],"correctAnswers":["a"]}
        ]"#;
        let err = QuizContent::from_json(json).unwrap_err();
        assert!(err.to_string().contains("question 4 appears more than once"));
    }

    #[test]
    fn empty_or_malformed_content_is_an_error() {
        assert!(QuizContent::from_json("[]").is_err());
        assert!(QuizContent::from_json(r#"[{"type":"single"}]"#).is_err());
    }
}
