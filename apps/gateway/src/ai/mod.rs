// Route handlers and prompt builders for the AI tasks. All provider calls
// go through completions::CompletionClient; the handlers never perform
// network I/O themselves.

pub mod handlers;
pub mod prompts;
