pub mod lines;

pub use lines::LineSink;
