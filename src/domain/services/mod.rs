pub mod input_classifier;

pub use input_classifier::is_ip_literal;
