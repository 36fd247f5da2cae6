//! Prompt template for FAQ consolidation

use crate::core::question::QuestionBatch;

/// Template for the consolidation instruction
pub struct FaqPromptTemplate;

impl FaqPromptTemplate {
    /// Role and task description that opens every consolidation prompt
    pub fn preamble() -> &'static str {
        r#"You are an expert academic assistant responsible for helping a teacher manage student questions.

You will be given a list of questions submitted by students. Analyze these questions and identify common themes or recurring inquiries.

Based on your analysis, generate a list of Frequently Asked Questions (FAQs). For each FAQ, provide a clear, concise, and helpful answer."#
    }

    /// Rules the generator must follow when grouping questions
    pub fn rules() -> &'static str {
        r#"- Only generate FAQs for topics that seem to be of general interest or are asked multiple times in different ways.
- Do not generate an FAQ for every single input question. Consolidate similar questions into a single FAQ.
- If the list of questions is very diverse with no clear common themes, you can return an empty list of FAQs.
- The tone of every answer must be helpful, polite, and professional."#
    }

    /// Full instruction for one batch.
    ///
    /// Each question is embedded verbatim, quoted, one bullet per line.
    pub fn consolidation_prompt(batch: &QuestionBatch) -> String {
        let mut prompt = format!("{}\n\n{}\n\nHere are the student questions:\n", Self::preamble(), Self::rules());

        for question in batch {
            prompt.push_str(&format!("- \"{}\"\n", question));
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_are_quoted_and_bulleted() {
        let batch = QuestionBatch::new(["When is the deadline?", "Can I get an extension?"]);
        let prompt = FaqPromptTemplate::consolidation_prompt(&batch);
        assert!(prompt.contains("- \"When is the deadline?\"\n"));
        assert!(prompt.contains("- \"Can I get an extension?\"\n"));
    }

    #[test]
    fn test_question_order_is_kept() {
        let batch = QuestionBatch::new(["zebra?", "apple?"]);
        let prompt = FaqPromptTemplate::consolidation_prompt(&batch);
        let zebra = prompt.find("zebra?").unwrap();
        let apple = prompt.find("apple?").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_duplicates_are_listed_individually() {
        let batch = QuestionBatch::new(vec!["Same?"; 3]);
        let prompt = FaqPromptTemplate::consolidation_prompt(&batch);
        assert_eq!(prompt.matches("- \"Same?\"").count(), 3);
    }

    #[test]
    fn test_instructions_present() {
        let prompt = FaqPromptTemplate::consolidation_prompt(&QuestionBatch::new(["Q?"]));
        assert!(prompt.contains("common themes"));
        assert!(prompt.contains("Consolidate similar questions into a single FAQ"));
        assert!(prompt.contains("return an empty list"));
        assert!(prompt.contains("helpful, polite, and professional"));
    }
}
