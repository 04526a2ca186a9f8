use crate::constants::prompts::{
    EVALUATION_OUTPUT, EVALUATION_TASK, EVALUATOR_PERSONA, RUBRIC_CRITERIA,
};

/// Renders the rubric prompt for a question/answer pair.
///
/// Both inputs are interpolated verbatim: no escaping, truncation or length checks.
pub fn build_prompt(question: &str, answer: &str) -> String {
    let guidelines: String = RUBRIC_CRITERIA
        .iter()
        .map(|criterion| {
            format!(
                "- **{} ({} Marks)**: {}\n",
                criterion.label, criterion.marks, criterion.guidance
            )
        })
        .collect();

    let mut prompt = String::with_capacity(1024 + question.len() + answer.len());
    prompt.push_str(EVALUATOR_PERSONA);
    prompt.push_str("\n\n### Task\n");
    prompt.push_str(EVALUATION_TASK);
    prompt.push_str(&format!("\n\n### Question\n\"{}\"\n\n", question));
    prompt.push_str(&format!("### Answer\n\"{}\"\n\n", answer));
    prompt.push_str("### Evaluation Guidelines\n");
    prompt.push_str(&guidelines);
    prompt.push_str("\n### Output\n");
    prompt.push_str(EVALUATION_OUTPUT);
    prompt
}
