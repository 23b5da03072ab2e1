/// CBOR encoding of strip sequences
pub mod codec;
/// SQLite credential table
pub mod credentials;

pub use credentials::CredentialStore;
