mod sentiment;

pub use sentiment::SentimentCommands;
