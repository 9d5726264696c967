pub mod watson;
