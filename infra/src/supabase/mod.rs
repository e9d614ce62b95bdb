//! Supabase module - profile access through the PostgREST interface
//!
//! Authenticates with the project's service role key, so it must only run
//! server-side.

pub mod profile_repository;

#[cfg(test)]
mod tests;

pub use profile_repository::{ProfileRow, SupabaseProfileRepository};
