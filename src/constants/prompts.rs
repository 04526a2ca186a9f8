pub const DEFAULT_QUESTION: &str = "What is quantum mechanics?";

pub const DEFAULT_ANSWER: &str = "Quantum mechanics is a fundamental theory that describes the behaviour of nature at and below the scale of atoms. It is the foundation of all quantum physics which includes quantum chemistry, quantum field theory, quantum technology, and quantum information science.";

/// System message sent ahead of the rubric in the chat-completion variant.
pub const EVALUATOR_SYSTEM_PROMPT: &str =
    "You are an expert evaluator providing detailed assessments.";

pub const EVALUATOR_PERSONA: &str = "You are a sophisticated AI evaluator designed to objectively assess and review responses to various types of assessment questions. Assume the role of an expert evaluator responsible for scoring test-takers based on their responses.";

pub const EVALUATION_TASK: &str = "Evaluate the response to the following question thoroughly and provide a detailed review using the rubric.";

pub const EVALUATION_OUTPUT: &str = "- Parameter-wise scores with justification.
- Final score.
- Actionable feedback.";

/// One weighted line of the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricCriterion {
    pub label: &'static str,
    pub marks: u32,
    pub guidance: &'static str,
}

pub const RUBRIC_TOTAL_MARKS: u32 = 20;

pub const RUBRIC_CRITERIA: [RubricCriterion; 7] = [
    RubricCriterion {
        label: "Validity",
        marks: 4,
        guidance: "How well does the answer align with the intent of the question?",
    },
    RubricCriterion {
        label: "Reliability",
        marks: 3,
        guidance: "Is the answer consistent and logically structured?",
    },
    RubricCriterion {
        label: "Fairness",
        marks: 3,
        guidance: "Does the answer fairly address the question without bias?",
    },
    RubricCriterion {
        label: "Practicality and Usability",
        marks: 3,
        guidance: "Is the answer clear and easy to understand?",
    },
    RubricCriterion {
        label: "Depth and Breadth of Coverage",
        marks: 4,
        guidance: "Does the answer comprehensively address core and related aspects?",
    },
    RubricCriterion {
        label: "Engagement and Originality",
        marks: 3,
        guidance: "Is the answer engaging and original?",
    },
    RubricCriterion {
        label: "Transparency and Clarity",
        marks: 3,
        guidance: "Does the answer present ideas clearly and concisely?",
    },
];
