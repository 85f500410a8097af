//! Types shared between the Keysmith issuance core and its HTTP shell.

pub mod params;
pub mod views;
