// Recommendation engine.
// Demo path: selector → customizer. Real path: remote analyzer via llm_client.
// The fallback controller chooses between them per request.

pub mod catalogue;
pub mod customizer;
pub mod demo;
pub mod fallback;
pub mod formatting;
pub mod handlers;
pub mod prompts;
pub mod provider;
pub mod remote;
pub mod selector;
