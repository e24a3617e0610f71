//! Integration tests for Layer 0: Model
//!
//! Tests for core types: Heading, Rover, and the status format.

mod headings;
