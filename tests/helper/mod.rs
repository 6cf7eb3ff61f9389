#![allow(dead_code)]

pub mod provider;

pub use provider::*;
