//! 宏工具函数

use syn::{Field, LitStr, Result, Type};

/// 注入属性名称
pub const INJECT_ATTR: &str = "inject";

/// 检查类型是否为 Option<T>
pub fn is_option_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}

/// 从 `#[inject(...)]` 中提取服务名称
///
/// 支持 `#[inject("log")]` 和 `#[inject(name = "log")]` 两种写法。
/// 字段没有该属性时返回 `Ok(None)`。
pub fn extract_inject_key(field: &Field) -> Result<Option<LitStr>> {
    let Some(attr) = field
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(INJECT_ATTR))
    else {
        return Ok(None);
    };

    if let Ok(lit) = attr.parse_args::<LitStr>() {
        return validate_key(lit).map(Some);
    }

    let mut key = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            key = Some(meta.value()?.parse::<LitStr>()?);
            Ok(())
        } else {
            Err(meta.error("未知的 inject 参数，应为 name = \"...\""))
        }
    })?;

    match key {
        Some(lit) => validate_key(lit).map(Some),
        None => Err(syn::Error::new_spanned(attr, "#[inject] 需要服务名称")),
    }
}

fn validate_key(lit: LitStr) -> Result<LitStr> {
    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(&lit, "服务名称不能为空"));
    }
    Ok(lit)
}
