//! Unit tests for server configuration and error mapping.
