pub mod a001_feature;
