mod common;
mod reasons;
mod scoring;
