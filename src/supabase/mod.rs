//! Supabase provisioning: schema DDL and the REST client that applies it.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for the roles/profiles bootstrap
//! - `client.rs`: thin wrapper over the SQL-execution RPC endpoint
//! - `provisioner.rs`: the provisioning step built on top of the client

pub mod client;
pub mod provisioner;
pub mod schema;

pub use client::SupabaseClient;
pub use provisioner::SchemaProvisioner;
pub use schema::PROFILES_INIT;
