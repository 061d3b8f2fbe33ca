pub mod evaluation_log;

pub use evaluation_log::EvaluationLog;
