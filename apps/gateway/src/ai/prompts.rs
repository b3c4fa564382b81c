// Prompt construction for the AI task routes. Every builder is total: the
// payload has already passed validation by the time it is called.

use crate::completions::Prompt;

/// System role for the summarization task.
pub const SUMMARY_SYSTEM: &str = "You are a helpful assistant that summarizes text.";

/// System role for the resume screening task.
pub const SCREEN_RESUME_SYSTEM: &str =
    "You are an HR assistant who screens resumes for job positions.";

const SUMMARY_MAX_TOKENS: u32 = 150;
const SOCIAL_POST_MAX_TOKENS: u32 = 150;
const SCREEN_RESUME_MAX_TOKENS: u32 = 300;

/// Prompt for summarizing free-form text. The input is embedded verbatim,
/// without truncation or escaping beyond what the transport requires.
pub fn summary_prompt(text: &str) -> Prompt {
    Prompt {
        system_instruction: SUMMARY_SYSTEM.to_string(),
        user_message: format!("Summarize the following text concisely: {text}"),
        max_output_tokens: SUMMARY_MAX_TOKENS,
    }
}

/// Prompt for drafting a social media post. The platform is caller-supplied
/// free text and lands in both the system role and the user message.
pub fn social_post_prompt(content: &str, platform: &str) -> Prompt {
    Prompt {
        system_instruction: format!(
            "You are a social media expert who creates engaging posts for {platform}."
        ),
        user_message: format!("Create a {platform} post based on this content: {content}"),
        max_output_tokens: SOCIAL_POST_MAX_TOKENS,
    }
}

/// Prompt for evaluating a resume against a job description, with labeled
/// sections so the model can tell the two apart.
pub fn screen_resume_prompt(resume: &str, job_description: &str) -> Prompt {
    Prompt {
        system_instruction: SCREEN_RESUME_SYSTEM.to_string(),
        user_message: format!(
            "Evaluate this resume for the following job description. \
             Provide a match percentage and brief explanation.\
             \n\nJob Description: {job_description}\n\nResume: {resume}"
        ),
        max_output_tokens: SCREEN_RESUME_MAX_TOKENS,
    }
}
