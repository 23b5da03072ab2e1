/// Mean squared error comparison of strip sequences
pub mod matcher;
/// Registration and authentication flows
pub mod session;
