pub mod accumulate;
pub mod quantile;
