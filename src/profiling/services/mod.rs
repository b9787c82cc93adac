mod log_parser;
mod result_aggregator;
mod test_descriptor_generator;

pub use log_parser::LogParser;
pub use result_aggregator::ResultAggregator;
pub use test_descriptor_generator::TestDescriptorGenerator;
