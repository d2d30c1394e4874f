// Profile Advisor: turns a profile into a scored critique, a resume draft,
// and a cold-outreach email. All completion calls go through llm_client.

pub mod badge;
pub mod handlers;
pub mod interpreter;
pub mod orchestrator;
pub mod prompt_builder;
pub mod prompts;
