pub mod novalnet;

pub use self::novalnet::Novalnet;
