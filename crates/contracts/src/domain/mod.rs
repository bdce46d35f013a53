pub mod a001_feature;
pub mod common;
