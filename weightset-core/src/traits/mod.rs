pub mod redistributor;

pub use redistributor::IWeightRedistributor;
