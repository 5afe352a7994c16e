pub mod rate_writer;
