pub mod column_type;
pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod parser;
pub mod scanner;
pub mod schema;
pub mod table;
pub mod value;

pub use column_type::ColumnType;
pub use config::ReaderConfig;
pub use error::ErrorType;
pub use parser::Csv;
pub use schema::ColumnDescriptor;
pub use table::{Column, Row, Table};
pub use value::Value;
