pub mod config;
pub mod error;
pub mod io;
pub mod processor;
pub mod record;
pub mod runtime;
pub mod stream;

pub use config::RunConfig;
pub use error::ProcessError;
pub use processor::{create_processor, Processor};
pub use record::Record;
pub use stream::{create_stream, DataStream, StreamRegistry, StreamStats};
