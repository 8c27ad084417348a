//! Core generation logic: resolution, header layout, combinations and fan-out

pub mod combinations;
pub mod email;
pub mod fanout;
pub mod header;
pub mod resolver;

pub use combinations::{combination_count, for_each_combination, generate_country_records, CountryTarget};
pub use email::{synthesize_email, EMAIL_DOMAIN, EMAIL_PREFIX};
pub use fanout::{FanOut, GenerationReport};
pub use header::{build_header, HeaderPlan};
pub use resolver::{CountryResolver, GenerationFlags, Resolution};
