mod text;

pub use text::truncate_to_width;
