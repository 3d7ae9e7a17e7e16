// Customer-service chat: prompt text, prompt assembly, orchestration, HTTP handler.
// All completion calls go through llm_client; no direct provider calls here.

pub mod assembler;
pub mod handlers;
pub mod prompts;
pub mod service;
