/// Payment creation (`/payment` or `/authorize`)
#[derive(Debug, Clone)]
pub struct Authorize;

/// Transaction status lookup (`/transaction/details`)
#[derive(Debug, Clone)]
pub struct PSync;
