use color_eyre::{eyre::eyre, Result};

use crate::models::{Interaction, Question, WalletAction};

// ---------------------------------------------------------------------------
// QuizRepository trait (the service only needs read access to questions)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    fn question(&self, number: u32) -> Option<Question>;

    fn next_number(&self, number: u32) -> Option<u32>;

    fn prev_number(&self, number: u32) -> Option<u32>;

    fn count(&self) -> usize;
}

// ---------------------------------------------------------------------------
// Submissions and grading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Option ids picked on a single or multi choice question.
    Choices(Vec<String>),
    /// Button pressed in the simulated wallet prompt.
    Wallet(WalletAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
    /// The submission does not fit the question's interaction type.
    Mismatched,
}

pub fn grade(question: &Question, submission: &Submission) -> Grade {
    let correct = match (&question.interaction, submission) {
        (Interaction::Single(mc), Submission::Choices(selected)) => {
            selected.len() == 1 && mc.is_correct(selected)
        }
        (Interaction::Multi(mc), Submission::Choices(selected)) => mc.is_correct(selected),
        (Interaction::SignOrReject(sr), Submission::Wallet(action)) => {
            sr.expected_action == *action
        }
        (Interaction::Single(_) | Interaction::Multi(_), Submission::Wallet(_))
        | (Interaction::SignOrReject(_), Submission::Choices(_)) => return Grade::Mismatched,
    };

    if correct {
        Grade::Correct
    } else {
        Grade::Incorrect
    }
}

pub struct AnswerOutcome {
    pub question: Question,
    pub submission: Submission,
    pub is_correct: bool,
    pub prev_number: Option<u32>,
    pub next_number: Option<u32>,
}

pub enum SubmitOutcome {
    Graded(AnswerOutcome),
    UnknownQuestion,
    Mismatched,
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

pub struct QuizService<R: QuizRepository> {
    repo: R,
}

impl<R: QuizRepository> QuizService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn question(&self, number: u32) -> Result<Question> {
        self.repo
            .question(number)
            .ok_or_else(|| eyre!("question {number} does not exist"))
    }

    pub fn count(&self) -> usize {
        self.repo.count()
    }

    pub fn neighbours(&self, number: u32) -> (Option<u32>, Option<u32>) {
        (self.repo.prev_number(number), self.repo.next_number(number))
    }

    pub fn submit(&self, number: u32, submission: Submission) -> SubmitOutcome {
        let Some(question) = self.repo.question(number) else {
            return SubmitOutcome::UnknownQuestion;
        };

        let is_correct = match grade(&question, &submission) {
            Grade::Correct => true,
            Grade::Incorrect => false,
            Grade::Mismatched => {
                tracing::warn!(
                    "submission {:?} does not fit {} question {number}",
                    submission,
                    question.kind_label()
                );
                return SubmitOutcome::Mismatched;
            }
        };

        tracing::info!(
            "question {number} answered: submission={:?}, correct={is_correct}",
            submission
        );

        let (prev_number, next_number) = self.neighbours(number);
        SubmitOutcome::Graded(AnswerOutcome {
            question,
            submission,
            is_correct,
            prev_number,
            next_number,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
