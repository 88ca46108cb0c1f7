//! Three-step needs-assessment wizard and its submission sequence.

use std::time::Duration;

use super::staged::StagedSequence;

pub const TOTAL_STEPS: usize = 3;

pub const PROCESSING_PHASES: [&str; 4] = [
    "Analyzing your insurance needs...",
    "Identifying suitable products...",
    "Tailoring to your individual life...",
    "Building visualizations...",
];

/// A multiple-choice suitability question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

static STEP_ONE: [Question; 4] = [
    Question {
        key: "coverage_duration",
        prompt: "How long do you need life insurance coverage?",
        options: &[
            "For a specific period (like until retirement or kids are grown)",
            "For my entire lifetime",
            "I'm not sure - I want flexibility",
        ],
    },
    Question {
        key: "cash_value_interest",
        prompt: "Are you interested in building cash value in your life insurance policy?",
        options: &[
            "No, I just want the death benefit protection",
            "Yes, I want to build savings/cash value over time",
            "Maybe - I want to learn more about the benefits",
        ],
    },
    Question {
        key: "risk_tolerance",
        prompt: "How do you feel about market risk in your life insurance?",
        options: &[
            "I want guaranteed returns only",
            "I'm comfortable with some market risk for growth potential",
            "I want to participate in market gains but with downside protection",
        ],
    },
    Question {
        key: "premium_flexibility",
        prompt: "What type of premium payments do you prefer?",
        options: &[
            "Level premiums that never increase",
            "Flexible premiums I can adjust over time",
            "I want to start with lower premiums",
        ],
    },
];

static STEP_TWO: [Question; 4] = [
    Question {
        key: "cash_access_needs",
        prompt: "Do you want to be able to access cash from your life insurance while you're alive?",
        options: &[
            "No, I only need the death benefit",
            "Yes, I want to use it for emergencies or major purchases",
            "Yes, I want to supplement my retirement income",
        ],
    },
    Question {
        key: "education_funding",
        prompt: "Are you interested in using life insurance to help fund your children's education?",
        options: &[
            "No, I have other education savings plans",
            "Yes, I want guaranteed education funding",
            "Yes, but I want growth potential for education costs",
        ],
    },
    Question {
        key: "budget_priority",
        prompt: "What's most important to you?",
        options: &[
            "Maximum death benefit for my premium dollar",
            "Building wealth and cash value over time",
            "A balance of protection and savings",
        ],
    },
    Question {
        key: "health_concerns",
        prompt: "Are you concerned about qualifying for life insurance?",
        options: &[
            "No, I'm in good health",
            "Yes, I have some health issues",
            "Yes, and I want simplified underwriting (no medical exam)",
        ],
    },
];

/// Pre-populated financial figures reviewed on the last step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialProfile {
    pub age_insured: u32,
    pub marital_status: &'static str,
    pub dependents: u32,
    pub youngest_dependent_age: u32,
    pub annual_income_primary: u64,
    pub annual_essential_expenses: u64,
    pub liquid_assets: u64,
    pub debts_to_clear: u64,
    pub available_death_benefit: u64,
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            age_insured: 35,
            marital_status: "married",
            dependents: 2,
            youngest_dependent_age: 8,
            annual_income_primary: 85_000,
            // 0.7 x income
            annual_essential_expenses: 59_500,
            liquid_assets: 25_000,
            debts_to_clear: 150_000,
            available_death_benefit: 200_000,
        }
    }
}

impl FinancialProfile {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        use super::client::format_currency;

        vec![
            ("Age of insured", self.age_insured.to_string()),
            ("Marital status", self.marital_status.to_owned()),
            ("Dependents", self.dependents.to_string()),
            ("Youngest dependent age", self.youngest_dependent_age.to_string()),
            ("Annual income", format_currency(self.annual_income_primary)),
            (
                "Essential expenses",
                format_currency(self.annual_essential_expenses),
            ),
            ("Liquid assets", format_currency(self.liquid_assets)),
            ("Debts to clear", format_currency(self.debts_to_clear)),
            (
                "Existing death benefit",
                format_currency(self.available_death_benefit),
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentPhase {
    Editing,
    Processing(StagedSequence),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentForm {
    client_id: String,
    step: usize,
    /// Selected option index per question, steps one and two back to back.
    answers: [Option<usize>; 8],
    focused_question: usize,
    profile: FinancialProfile,
    phase: AssessmentPhase,
}

impl AssessmentForm {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            step: 1,
            answers: [None; 8],
            focused_question: 0,
            profile: FinancialProfile::default(),
            phase: AssessmentPhase::Editing,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn progress_percent(&self) -> u16 {
        let percent = self.step * 100 / TOTAL_STEPS;
        u16::try_from(percent).unwrap_or(100)
    }

    pub fn profile(&self) -> &FinancialProfile {
        &self.profile
    }

    pub fn phase(&self) -> &AssessmentPhase {
        &self.phase
    }

    /// Questions on the current step; the review step has none.
    pub fn questions(&self) -> &'static [Question] {
        match self.step {
            1 => &STEP_ONE,
            2 => &STEP_TWO,
            _ => &[],
        }
    }

    pub fn focused_question(&self) -> usize {
        self.focused_question
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answer_slot(question).and_then(|slot| self.answers[slot])
    }

    pub fn focus_next(&mut self) {
        let count = self.questions().len();
        if count > 0 {
            self.focused_question = (self.focused_question + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.questions().len();
        if count > 0 {
            self.focused_question = (self.focused_question + count - 1) % count;
        }
    }

    /// Picks the next option for the focused question.
    pub fn cycle_answer(&mut self) {
        let Some(question) = self.questions().get(self.focused_question) else {
            return;
        };
        let option_count = question.options.len();
        if let Some(slot) = self.answer_slot(self.focused_question) {
            self.answers[slot] = Some(match self.answers[slot] {
                Some(index) => (index + 1) % option_count,
                None => 0,
            });
        }
    }

    pub fn select_answer(&mut self, question: usize, option: usize) {
        let valid = self
            .questions()
            .get(question)
            .is_some_and(|q| option < q.options.len());
        if let (true, Some(slot)) = (valid, self.answer_slot(question)) {
            self.answers[slot] = Some(option);
        }
    }

    pub fn is_current_step_valid(&self) -> bool {
        match self.step {
            1 | 2 => (0..self.questions().len()).all(|index| self.answer(index).is_some()),
            3 => true,
            _ => false,
        }
    }

    /// Advances only past a complete step.
    pub fn next(&mut self) -> bool {
        if self.is_current_step_valid() && self.step < TOTAL_STEPS {
            self.step += 1;
            self.focused_question = 0;
            return true;
        }
        false
    }

    pub fn previous(&mut self) -> bool {
        if self.step > 1 {
            self.step -= 1;
            self.focused_question = 0;
            return true;
        }
        false
    }

    /// Starts the processing sequence from the review step.
    pub fn submit(&mut self, phase_duration: Duration) -> bool {
        if self.step != TOTAL_STEPS || self.phase != AssessmentPhase::Editing {
            return false;
        }
        self.phase = AssessmentPhase::Processing(StagedSequence::new(
            PROCESSING_PHASES.to_vec(),
            phase_duration,
        ));
        self.finish_if_complete();
        true
    }

    /// Returns true on the tick where processing finishes.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if let AssessmentPhase::Processing(sequence) = &mut self.phase {
            sequence.advance(elapsed);
            return self.finish_if_complete();
        }
        false
    }

    fn finish_if_complete(&mut self) -> bool {
        let done = matches!(&self.phase, AssessmentPhase::Processing(s) if s.is_complete());
        if done {
            self.phase = AssessmentPhase::Finished;
        }
        done
    }

    fn answer_slot(&self, question: usize) -> Option<usize> {
        match self.step {
            1 if question < STEP_ONE.len() => Some(question),
            2 if question < STEP_TWO.len() => Some(STEP_ONE.len() + question),
            _ => None,
        }
    }
}
