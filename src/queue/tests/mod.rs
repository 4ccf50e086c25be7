//! Test module organization for queue backends
