pub mod args;

pub use args::{default_output_path, parse_name_list, parse_number_range, Args, PageSize};
