pub mod ask;
pub mod health;
pub mod reload;

pub use ask::*;
pub use health::*;
pub use reload::*;
