pub mod error;
pub mod hash;
pub mod hash_table;
pub mod value;
pub use error::{Result, TableError};
pub use hash::{CodePointSum, FxKeyHasher, KeyHasher, code_point_sum};
pub use hash_table::{Bucket, HashTable};
pub use value::{AnyTable, Value};
