pub mod line_reader;
pub mod xml_writer;
