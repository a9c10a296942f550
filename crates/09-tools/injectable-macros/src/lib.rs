//! # Injectable Macros
//!
//! 这个 crate 提供了为结构体生成依赖声明和注入构造函数的派生宏。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use injectable_macros::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Injectable)]
//! pub struct ReportService {
//!     #[inject("log")]
//!     log: Arc<ConsoleLogger>,
//!     #[inject(name = "cache")]
//!     cache: Option<Arc<MemoryCache>>,
//!     retries: u32,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可注入类型派生宏
///
/// 为结构体实现 `registry_common::Injectable`。
///
/// - 带 `#[inject("name")]` 或 `#[inject(name = "name")]` 的字段按声明顺序成为依赖
/// - `Option<Arc<T>>` 字段为可选依赖，其他字段（`Arc<T>`）为必需依赖
/// - 未标注的字段使用 `Default::default()` 初始化
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
