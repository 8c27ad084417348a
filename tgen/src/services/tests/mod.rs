//! Service-specific tests
//!
//! Each real service has its own test file; the HTTP lookup runs against a
//! wiremock server and the file services against temporary directories.
