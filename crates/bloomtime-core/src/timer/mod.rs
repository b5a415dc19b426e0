mod engine;

pub use engine::TaskTimer;
