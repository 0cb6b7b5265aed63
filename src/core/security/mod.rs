// Security module for request authentication
//
// This module provides the API key gate that protects the network transport:
// keys are stored in the same SQLite database as the parts and checked before
// any request reaches the BOM domain.

pub mod api_key;

pub use api_key::{API_KEY_HEADER, ApiKeyGate, ApiKeyStore, AuthError};
