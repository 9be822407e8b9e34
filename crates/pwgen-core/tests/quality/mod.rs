mod class_coverage;
mod distribution;
