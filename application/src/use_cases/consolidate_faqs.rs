//! Consolidate FAQs use case
//!
//! Turns a batch of raw student questions into a short list of FAQs by
//! asking the generative backend to group them by theme.
//!
//! The flow is a single request/response:
//! 1. Empty batch → empty result, backend untouched
//! 2. Render the consolidation prompt and send it with the FAQ schema
//! 3. Validate the structured output; anything malformed becomes an empty result
//!
//! Backend call failures are returned to the caller unchanged. There is no
//! retry here.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use campus_domain::util::preview;
use campus_domain::{FaqPromptTemplate, FaqResult, OutputSchema, QuestionBatch, parse_faq_output};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during consolidation
#[derive(Error, Debug)]
pub enum ConsolidateError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl ConsolidateError {
    /// Whether retrying the same call later may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ConsolidateError::Generation(e) => e.is_transient(),
        }
    }
}

/// Use case for consolidating student questions into FAQs
///
/// Holds only shared handles, so clones can run concurrently without
/// coordinating with each other.
#[derive(Clone)]
pub struct ConsolidateFaqsUseCase {
    generator: Arc<dyn TextGenerator>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConsolidateFaqsUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Consolidate with default (no-op) progress
    pub async fn consolidate(&self, batch: QuestionBatch) -> Result<FaqResult, ConsolidateError> {
        self.consolidate_with_progress(batch, &NoProgress).await
    }

    /// Consolidate with progress callbacks
    pub async fn consolidate_with_progress(
        &self,
        batch: QuestionBatch,
        progress: &dyn ProgressNotifier,
    ) -> Result<FaqResult, ConsolidateError> {
        if batch.is_empty() {
            debug!("No questions to consolidate; skipping generation");
            return Ok(FaqResult::empty());
        }

        let model = self.generator.model();
        info!(
            questions = batch.len(),
            model = %model,
            "Consolidating questions into FAQs"
        );
        if let Some(first) = batch.iter().next() {
            debug!("First question: {}", preview(first, 80));
        }

        let prompt = FaqPromptTemplate::consolidation_prompt(&batch);
        let schema = OutputSchema::faq_list();

        self.conversation_logger.log(ConversationEvent::new(
            "faq_prompt",
            serde_json::json!({
                "model": model.to_string(),
                "questions": batch.len(),
                "prompt": prompt,
            }),
        ));

        progress.on_generation_start(model, batch.len());
        let output = self.generator.generate(&prompt, &schema).await;
        progress.on_generation_end(output.is_ok());

        let result = match output? {
            Some(value) => match parse_faq_output(&value) {
                Some(result) => result,
                None => {
                    warn!("Generator output did not match the FAQ schema; returning no FAQs");
                    FaqResult::empty()
                }
            },
            None => {
                warn!("Generator returned no structured output; returning no FAQs");
                FaqResult::empty()
            }
        };

        info!(faqs = result.len(), "Consolidation finished");

        self.conversation_logger.log(ConversationEvent::new(
            "faq_result",
            serde_json::json!({
                "model": model.to_string(),
                "faqs": serde_json::to_value(result.faqs()).unwrap_or_default(),
            }),
        ));

        Ok(result)
    }
}
