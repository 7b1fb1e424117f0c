//! Item Context - 商品实体
//!
//! 不变量:
//! - id 由存储分配，创建后不可修改
//! - name 创建时不能为空
//! - price 原样保留客户端提交的 JSON 数字（`500` 不会变成 `500.0`）

use serde::Serialize;
use serde_json::Number;

use super::{DomainError, EntityId};

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub price: Number,
}

impl Item {
    /// 用已分配的 id 实体化一个新商品
    pub fn from_new(id: EntityId, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
        }
    }

    /// 部分更新：只覆盖 patch 中出现的字段
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// 已通过校验、尚未分配 id 的商品
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    name: String,
    price: Number,
}

impl NewItem {
    /// 校验创建参数
    ///
    /// name 缺失或为空、price 缺失时返回 [`DomainError::MissingFields`]。
    /// price 为 0 是合法的。
    pub fn new(name: Option<String>, price: Option<Number>) -> Result<Self, DomainError> {
        match (name, price) {
            (Some(name), Some(price)) if !name.is_empty() => Ok(Self { name, price }),
            _ => Err(DomainError::MissingFields {
                fields: "name and price",
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 商品部分更新
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<Number>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pencil() -> Item {
        let new = NewItem::new(Some("pencil".to_string()), Some(Number::from(500))).unwrap();
        Item::from_new(1, new)
    }

    #[test]
    fn test_new_item_requires_name_and_price() {
        assert!(NewItem::new(None, Some(Number::from(1))).is_err());
        assert!(NewItem::new(Some(String::new()), Some(Number::from(1))).is_err());
        assert!(NewItem::new(Some("eraser".to_string()), None).is_err());
    }

    #[test]
    fn test_zero_price_is_valid() {
        assert!(NewItem::new(Some("free".to_string()), Some(Number::from(0))).is_ok());
    }

    #[test]
    fn test_patch_price_only_keeps_name() {
        let mut item = pencil();
        item.apply(ItemPatch {
            name: None,
            price: Some(Number::from(700)),
        });
        assert_eq!(item.name, "pencil");
        assert_eq!(item.price, Number::from(700));
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut item = pencil();
        item.apply(ItemPatch::default());
        assert_eq!(item, pencil());
    }

    #[test]
    fn test_price_serializes_as_sent() {
        let json = serde_json::to_value(pencil()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "pencil", "price": 500})
        );
    }
}
