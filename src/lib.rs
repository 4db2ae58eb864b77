pub mod colorizer;
pub mod example;
pub mod reader;
pub mod render;
pub mod stats;
pub mod worker;

// Re-export main types for convenient access
pub use colorizer::{
    colorize_text, BoundaryRules, ColoredSentence, Colorizer, Sentence, SplitterKind
};

// Re-export presentation and async plumbing used by the CLI
pub use render::{render, OutputFormat};
pub use worker::{ColorizeWorker, WorkerHandle};
