pub mod connectors;

pub use connectors::novalnet::transformers::NovalnetAuthType;
