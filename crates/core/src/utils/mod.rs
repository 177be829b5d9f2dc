pub mod amount_parser;

pub use amount_parser::{parse_amount, parse_percentage, parse_price_range};
