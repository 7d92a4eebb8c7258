//! No library surface of its own — this crate exists only to host the
//! workspace-level end-to-end scenario tests under `tests/`.
