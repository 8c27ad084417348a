//! Service implementations
//!
//! Production implementations of the service traits. These handle the actual
//! network and file I/O of a generation run.

pub mod brand_lookup;
pub mod credentials;
pub mod loc_file;
pub mod record_writer;

#[cfg(test)]
mod tests;

pub use brand_lookup::RealBrandLookup;
pub use credentials::RealCredentialSource;
pub use loc_file::RealLocFileReader;
pub use record_writer::RealRecordWriter;
