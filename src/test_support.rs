//! Shared test utilities for the HTTP collaborator clients.
