pub mod config;
pub mod convert;
pub mod error;
pub mod fragment;
pub mod ir;
pub mod openapi;

pub use fragment::{FragmentOptions, OpenApiFragment, build_fragment};
