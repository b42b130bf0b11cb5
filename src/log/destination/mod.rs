mod buffer_destination;
mod file_destination;
mod null_destination;
mod registry;
mod trait_;
mod writer_destination;

pub use buffer_destination::BufferDestination;
pub use file_destination::{FileDestination, FileDestinationConfig};
pub use null_destination::{NullDestination, NullDestinationConfig};
pub use registry::{create_destination_from_options, register_destinations};
pub use trait_::LogDestination;
pub use writer_destination::WriterDestination;
