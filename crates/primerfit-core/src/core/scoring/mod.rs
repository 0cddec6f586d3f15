pub mod loss;
pub mod scorer;
