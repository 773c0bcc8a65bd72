use serde::Serialize;

/// Answer value that counts towards risk scoring. Comparison is exact;
/// variants such as "Yes" or "true" do not score.
pub const AFFIRMATIVE_ANSWER: &str = "yes";

/// A section of the fitness and propriety questionnaire.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitnessSection {
    pub code: &'static str,
    pub title: &'static str,
}

/// A single question. Every question belongs to exactly one section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitnessQuestion {
    pub code: &'static str,
    pub text: &'static str,
    pub section: &'static str,
    /// Risk points contributed by an affirmative answer. Zero for
    /// informational questions that never affect the score.
    pub weight: u32,
}

static SECTIONS: &[FitnessSection] = &[
    FitnessSection {
        code: "integrity",
        title: "Honesty, integrity and reputation",
    },
    FitnessSection {
        code: "financial",
        title: "Financial soundness",
    },
    FitnessSection {
        code: "competence",
        title: "Competence and capability",
    },
];

static QUESTIONS: &[FitnessQuestion] = &[
    FitnessQuestion {
        code: "criminal_convictions",
        text: "Have you ever been convicted of any criminal offence, or is any prosecution \
               pending against you?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "regulatory_investigations",
        text: "Have you ever been the subject of an investigation or disciplinary proceedings \
               by a regulatory body?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "fraud_dishonesty",
        text: "Have you ever been found to have acted fraudulently or dishonestly in any \
               civil, criminal or regulatory proceedings?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "market_abuse",
        text: "Have you ever contravened, or been investigated for contravening, market abuse \
               or insider dealing provisions?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "money_laundering",
        text: "Have you ever been investigated in connection with money laundering, terrorist \
               financing or sanctions breaches?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "director_disqualification",
        text: "Have you ever been disqualified, or subject to proceedings for disqualification, \
               from acting as a director?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "fiduciary_breach",
        text: "Have you ever been found in breach of a fiduciary duty or removed from a \
               position of trust?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "prior_refusal",
        text: "Have you ever been refused, or had revoked, an authorisation, registration or \
               approval by a regulatory body?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "overseas_sanctions",
        text: "Have you ever been sanctioned or censured by an overseas regulator or \
               professional body?",
        section: "integrity",
        weight: 10,
    },
    FitnessQuestion {
        code: "civil_proceedings",
        text: "Have you ever been a defendant in civil proceedings connected with financial \
               services or financial loss?",
        section: "integrity",
        weight: 5,
    },
    FitnessQuestion {
        code: "professional_sanctions",
        text: "Have you ever been reprimanded, suspended or expelled by a professional body \
               of which you were a member?",
        section: "integrity",
        weight: 5,
    },
    FitnessQuestion {
        code: "adverse_media",
        text: "Has adverse information about your conduct appeared in the press or other \
               media?",
        section: "integrity",
        weight: 2,
    },
    FitnessQuestion {
        code: "ccj_orders",
        text: "Have you ever had a county court judgment or equivalent order made against \
               you?",
        section: "financial",
        weight: 5,
    },
    FitnessQuestion {
        code: "bankruptcy",
        text: "Have you ever been declared bankrupt, or is a bankruptcy petition pending \
               against you?",
        section: "financial",
        weight: 5,
    },
    FitnessQuestion {
        code: "iva_dro",
        text: "Have you ever entered into an individual voluntary arrangement or debt relief \
               order?",
        section: "financial",
        weight: 5,
    },
    FitnessQuestion {
        code: "creditor_arrangements",
        text: "Have you ever made any other composition or arrangement with your creditors?",
        section: "financial",
        weight: 5,
    },
    FitnessQuestion {
        code: "relevant_experience",
        text: "Do you have experience relevant to the senior management functions you will \
               hold?",
        section: "competence",
        weight: 0,
    },
    FitnessQuestion {
        code: "qualifications",
        text: "Do you hold the professional qualifications relevant to your role?",
        section: "competence",
        weight: 0,
    },
    FitnessQuestion {
        code: "training_completed",
        text: "Have you completed the firm's senior manager induction and conduct rules \
               training?",
        section: "competence",
        weight: 0,
    },
    FitnessQuestion {
        code: "time_commitment",
        text: "Are you able to commit sufficient time to discharge the responsibilities of \
               your role?",
        section: "competence",
        weight: 0,
    },
];

pub fn sections() -> &'static [FitnessSection] {
    SECTIONS
}

pub fn questions() -> &'static [FitnessQuestion] {
    QUESTIONS
}

pub fn question_by_code(code: &str) -> Option<&'static FitnessQuestion> {
    QUESTIONS.iter().find(|question| question.code == code)
}

/// Number of questions one individual is expected to answer.
pub fn question_count() -> usize {
    QUESTIONS.len()
}
