//! Shared helpers for the lock test suite.
