//! Multi-component workflow tests.

mod demo_tests;
