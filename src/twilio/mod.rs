//! Twilio connectivity: a minimal authenticated probe confirming the
//! messaging credentials are usable before the application relies on them.

pub mod verifier;

pub use verifier::TwilioVerifier;
