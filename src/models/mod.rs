pub mod de;
pub mod alert;
pub mod order;
pub mod bitunix;
pub mod order_result;

pub use alert::{Alert, Side};
pub use order::{OrderRequest, OrderType, TradeSide};
pub use bitunix::{BitunixErrorBody, BitunixResponse, OrderData};
pub use order_result::OrderResult;
