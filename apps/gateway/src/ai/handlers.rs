//! Axum route handlers for the AI task routes.
//!
//! Each handler follows the same shape: check the credential, validate the
//! payload, build the prompt, make one completion call, wrap the result in a
//! success envelope. Failures map onto `AppError` and leave as error envelopes.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::ai::prompts;
use crate::completions::CompletionClient;
use crate::envelope::Envelope;
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryPayload {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct SocialPostRequest {
    pub content: String,
    pub platform: String,
}

#[derive(Debug, Serialize)]
pub struct SocialPostPayload {
    pub post: String,
    pub platform: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreenResumeRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScreenResumePayload {
    pub evaluation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// The credential check runs before field validation, so any payload that
/// deserializes gets the same answer from a misconfigured deployment. A body
/// the extractor rejects never reaches this check.
fn require_completions(state: &AppState) -> Result<&CompletionClient, AppError> {
    state.completions.as_ref().ok_or(AppError::MissingCredential)
}

/// POST /ai/summary
///
/// Summarizes free-form text into a concise completion.
pub async fn handle_summary(
    State(state): State<AppState>,
    AppJson(request): AppJson<SummarizeRequest>,
) -> Result<Json<Envelope<SummaryPayload>>, AppError> {
    let completions = require_completions(&state)?;

    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let summary = completions
        .complete(&prompts::summary_prompt(&request.text))
        .await
        .map_err(|e| AppError::Completion(format!("Error generating summary: {e}")))?;

    Ok(Json(Envelope::success(SummaryPayload { summary })))
}

/// POST /ai/post_social
///
/// Drafts a social media post for the requested platform. The platform is
/// free text and comes back in the response exactly as supplied.
pub async fn handle_post_social(
    State(state): State<AppState>,
    AppJson(request): AppJson<SocialPostRequest>,
) -> Result<Json<Envelope<SocialPostPayload>>, AppError> {
    let completions = require_completions(&state)?;

    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    if request.platform.trim().is_empty() {
        return Err(AppError::Validation("platform cannot be empty".to_string()));
    }

    let post = completions
        .complete(&prompts::social_post_prompt(&request.content, &request.platform))
        .await
        .map_err(|e| AppError::Completion(format!("Error generating social media post: {e}")))?;

    Ok(Json(Envelope::success(SocialPostPayload {
        post,
        // Echoed exactly as received, casing and all
        platform: request.platform,
    })))
}

/// POST /ai/screen_resume
///
/// Evaluates a resume against a job description and returns the model's
/// match assessment.
pub async fn handle_screen_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScreenResumeRequest>,
) -> Result<Json<Envelope<ScreenResumePayload>>, AppError> {
    let completions = require_completions(&state)?;

    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let evaluation = completions
        .complete(&prompts::screen_resume_prompt(
            &request.resume,
            &request.job_description,
        ))
        .await
        .map_err(|e| AppError::Completion(format!("Error screening resume: {e}")))?;

    Ok(Json(Envelope::success(ScreenResumePayload { evaluation })))
}
