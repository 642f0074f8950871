mod client;

pub use client::{AnswerClient, AnswerResponse, Answerer, DEFAULT_ENDPOINT, QuestionRequest};
