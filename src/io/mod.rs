pub mod dataset;
pub mod output;
pub mod writers;

pub use dataset::{load_dataset, parse_records, read_records};
pub use output::{create_writer, open_destination, OutputFormat, OutputWriter};
