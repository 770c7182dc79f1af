pub mod culling;
