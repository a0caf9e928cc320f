//! Unit tests for the authentication module.
