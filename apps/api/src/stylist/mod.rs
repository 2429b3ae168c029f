// Styling form: validation, the submit state machine, and the recommendation call.
// All LLM calls go through llm_client; nothing here talks to Gemini directly.

pub mod form;
pub mod handlers;
pub mod layout;
pub mod models;
pub mod prompts;
pub mod recommender;
pub mod validation;
