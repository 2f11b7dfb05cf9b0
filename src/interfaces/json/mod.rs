pub mod parameters_reader;
pub mod report_writer;
