pub mod factorial;
pub mod hypergeo;
pub mod mode;

pub use factorial::Factorials;
pub use hypergeo::{Distribution, Hypergeometric};
pub use mode::optimal;
