mod linear;
mod model;

pub use linear::LinearRegression;
pub use model::Regression;
